use crate::domain::ConfigError;
use crate::infra::diagram::{RendererOptions, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const MIN_RETRY_INTERVAL_MS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Command name or path of the Mermaid CLI. Defaults to `mmdc`.
    pub mmdc_path: Option<String>,
    pub retry_interval_ms: u64,
    /// Readiness checks before giving up. Unset waits indefinitely.
    pub max_ready_attempts: Option<u32>,
    /// Per-render limit. Unset waits indefinitely.
    pub render_timeout_ms: Option<u64>,
    /// Rendered diagrams kept in memory; 0 disables the cache.
    pub cache_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mmdc_path: None,
            retry_interval_ms: 500,
            max_ready_attempts: None,
            render_timeout_ms: None,
            cache_capacity: 32,
        }
    }
}

impl AppConfig {
    pub fn retry_interval(&self) -> Duration {
        Duration::from_millis(self.retry_interval_ms.max(MIN_RETRY_INTERVAL_MS))
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        let policy = RetryPolicy::fixed(self.retry_interval());
        match self.max_ready_attempts {
            Some(max) => policy.with_max_attempts(max),
            None => policy,
        }
    }

    pub fn renderer_options(&self) -> RendererOptions {
        RendererOptions {
            retry: self.retry_policy(),
            timeout: self.render_timeout_ms.map(Duration::from_millis),
            ..RendererOptions::default()
        }
    }

    pub fn cache_capacity(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.cache_capacity)
    }
}

/// Loads the config file, falling back to defaults when it is missing or invalid.
pub fn load_config() -> AppConfig {
    let path = config_path();
    match load_config_from(&path) {
        Ok(config) => config,
        Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            AppConfig::default()
        }
        Err(err) => {
            log::warn!("Ignoring config at {}: {err}", path.display());
            AppConfig::default()
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("PATTERN_VIZ_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    config_dir().join("config.toml")
}

fn config_dir() -> PathBuf {
    resolve_config_dir(
        std::env::var_os("PATTERN_VIZ_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        home::home_dir(),
    )
}

/// Explicit override, then the XDG config dir, then `~/.config`, then the
/// working directory.
fn resolve_config_dir(
    explicit: Option<PathBuf>,
    xdg_config: Option<PathBuf>,
    home: Option<PathBuf>,
) -> PathBuf {
    explicit
        .or_else(|| xdg_config.map(|dir| dir.join("pattern-viz")))
        .or_else(|| home.map(|dir| dir.join(".config").join("pattern-viz")))
        .unwrap_or_else(|| PathBuf::from(".pattern-viz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_behavior() {
        let config = AppConfig::default();
        let options = config.renderer_options();
        assert_eq!(options.retry, RetryPolicy::fixed(Duration::from_millis(500)));
        assert_eq!(options.timeout, None);
        assert_eq!(config.cache_capacity().map(NonZeroUsize::get), Some(32));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "mmdc_path = \"/opt/mmdc\"\nmax_ready_attempts = 4\ncache_capacity = 0\n",
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.mmdc_path.as_deref(), Some("/opt/mmdc"));
        assert_eq!(config.retry_interval_ms, 500);
        assert_eq!(config.retry_policy().max_attempts, Some(4));
        assert!(config.cache_capacity().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            render_timeout_ms: Some(15_000),
            retry_interval_ms: 250,
            ..AppConfig::default()
        };

        save_config_to(&config, &path).unwrap();
        let reloaded = load_config_from(&path).unwrap();
        assert_eq!(reloaded, config);
        assert_eq!(
            reloaded.renderer_options().timeout,
            Some(Duration::from_secs(15))
        );
    }

    #[test]
    fn test_invalid_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "retry_interval_ms = \"soon\"").unwrap();
        assert!(matches!(
            load_config_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_config_dir_resolution_order() {
        let explicit = Some(PathBuf::from("/custom"));
        let xdg = Some(PathBuf::from("/xdg"));
        let home = Some(PathBuf::from("/home/me"));

        assert_eq!(
            resolve_config_dir(explicit, xdg.clone(), home.clone()),
            PathBuf::from("/custom")
        );
        assert_eq!(
            resolve_config_dir(None, xdg, home.clone()),
            PathBuf::from("/xdg/pattern-viz")
        );
        assert_eq!(
            resolve_config_dir(None, None, home),
            PathBuf::from("/home/me/.config/pattern-viz")
        );
        assert_eq!(
            resolve_config_dir(None, None, None),
            PathBuf::from(".pattern-viz")
        );
    }

    #[test]
    fn test_retry_interval_has_floor() {
        let config = AppConfig {
            retry_interval_ms: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.retry_interval(), Duration::from_millis(10));
    }
}
