//! Domain error types for PatternViz.
//!
//! Engine errors describe what the rendering engine reported. Render errors
//! are what the renderer decided to do about it, and carry the message shown
//! to users.

use thiserror::Error;

/// Errors related to building the pattern catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog is empty")]
    Empty,

    #[error("Duplicate pattern id: {0}")]
    DuplicateId(String),
}

/// Errors reported by a rendering engine for a single invocation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine rejected the diagram source.
    #[error("Diagram syntax error: {0}")]
    Syntax(String),

    #[error("Engine failure: {0}")]
    Internal(String),

    #[error("Engine IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Terminal failures of a render request.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Diagram rendering failed: {0}")]
    Engine(#[from] EngineError),

    #[error("Diagram engine did not become ready after {attempts} attempts")]
    EngineUnavailable { attempts: u32 },

    #[error("Diagram rendering timed out after {0:?}")]
    TimedOut(std::time::Duration),
}

impl RenderError {
    /// Terse, display-safe message for the view layer.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Engine(EngineError::Syntax(_)) => "Failed to render diagram syntax.",
            Self::Engine(_) => "Diagram engine error.",
            Self::EngineUnavailable { .. } => "Diagram engine is unavailable.",
            Self::TimedOut(_) => "Diagram rendering timed out.",
        }
    }
}

/// Errors related to loading or saving the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_hides_engine_details() {
        let err = RenderError::from(EngineError::Syntax("Parse error on line 3".into()));
        assert_eq!(err.user_message(), "Failed to render diagram syntax.");
        assert!(err.to_string().contains("line 3"));

        let err = RenderError::from(EngineError::Internal("puppeteer crashed".into()));
        assert_eq!(err.user_message(), "Diagram engine error.");
    }

    #[test]
    fn test_user_message_for_lifecycle_failures() {
        let err = RenderError::EngineUnavailable { attempts: 3 };
        assert_eq!(err.user_message(), "Diagram engine is unavailable.");
        assert!(err.to_string().contains("3 attempts"));

        let err = RenderError::TimedOut(std::time::Duration::from_secs(2));
        assert_eq!(err.user_message(), "Diagram rendering timed out.");
    }
}
