use crate::domain::EngineError;
use crate::infra::diagram::readiness::ReadinessGate;
use crate::infra::diagram::theme::ThemeOptions;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Rendered visual payload (SVG markup).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    svg: Arc<str>,
}

impl Artifact {
    pub fn from_svg(svg: impl Into<Arc<str>>) -> Self {
        Self { svg: svg.into() }
    }

    pub fn svg(&self) -> &str {
        &self.svg
    }
}

/// Identifier handed to the engine for a single render invocation.
///
/// Every invocation gets a fresh id so overlapping renders never share
/// engine-side state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderId(String);

impl RenderId {
    pub fn generate() -> Self {
        Self(format!("mermaid-{}", uuid::Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A diagram rendering engine that becomes available asynchronously.
///
/// Implementations must tolerate overlapping `render` calls as long as each
/// call uses a distinct [`RenderId`].
#[async_trait]
pub trait RenderEngine: Send + Sync {
    /// Handle that resolves once the engine can accept renders.
    fn readiness(&self) -> ReadinessGate;

    /// Applies theme options. Repeating a call with the same options is a no-op.
    fn configure(&self, theme: &ThemeOptions);

    async fn render(&self, id: &RenderId, source: &str) -> Result<Artifact, EngineError>;
}

#[async_trait]
impl<T: RenderEngine + ?Sized> RenderEngine for Arc<T> {
    fn readiness(&self) -> ReadinessGate {
        (**self).readiness()
    }

    fn configure(&self, theme: &ThemeOptions) {
        (**self).configure(theme)
    }

    async fn render(&self, id: &RenderId, source: &str) -> Result<Artifact, EngineError> {
        (**self).render(id, source).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_ids_are_unique() {
        let a = RenderId::generate();
        let b = RenderId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("mermaid-"));
        assert_eq!(a.as_str().len(), "mermaid-".len() + 32);
    }

    #[test]
    fn test_artifact_exposes_svg() {
        let artifact = Artifact::from_svg("<svg/>");
        assert_eq!(artifact.svg(), "<svg/>");
        assert_eq!(artifact.clone(), artifact);
    }
}
