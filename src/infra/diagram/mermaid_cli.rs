//! Rendering through the Mermaid CLI (`mmdc`).
//!
//! The executable is located by a background probe; the engine's readiness
//! gate opens once it is found. Each render runs `mmdc` in its own temp dir.

use crate::domain::EngineError;
use crate::infra::diagram::engine::{Artifact, RenderEngine, RenderId};
use crate::infra::diagram::readiness::{DEFAULT_RETRY_INTERVAL, ReadinessGate};
use crate::infra::diagram::theme::ThemeOptions;
use crate::infra::shell;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::{Arc, OnceLock, Weak};
use std::time::Duration;
use tempfile::NamedTempFile;

pub const DEFAULT_COMMAND: &str = "mmdc";

#[derive(Debug, Clone)]
pub struct MermaidCliSettings {
    /// Command name or path of the Mermaid CLI.
    pub command: String,
    pub probe_interval: Duration,
}

impl Default for MermaidCliSettings {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            probe_interval: DEFAULT_RETRY_INTERVAL,
        }
    }
}

struct ConfiguredTheme {
    theme: ThemeOptions,
    file: Arc<NamedTempFile>,
}

pub struct MermaidCliEngine {
    readiness: ReadinessGate,
    binary: OnceLock<PathBuf>,
    configured: Mutex<Option<ConfiguredTheme>>,
}

impl MermaidCliEngine {
    /// Creates the engine and starts probing for the executable.
    ///
    /// Must be called from within a Tokio runtime. The probe stops once the
    /// executable is found or the engine is dropped.
    pub fn spawn(settings: MermaidCliSettings) -> Arc<Self> {
        let engine = Arc::new(Self {
            readiness: ReadinessGate::new(),
            binary: OnceLock::new(),
            configured: Mutex::new(None),
        });

        if !engine.probe(&settings.command) {
            log::info!(
                "Waiting for `{}` to become available; install it with `npm install -g @mermaid-js/mermaid-cli`",
                settings.command
            );
            tokio::spawn(probe_loop(Arc::downgrade(&engine), settings));
        }

        engine
    }

    fn probe(&self, command: &str) -> bool {
        let Some(path) = shell::find_bin(command) else {
            return false;
        };
        log::debug!("Found Mermaid CLI at {}", path.display());
        let _ = self.binary.set(path);
        self.readiness.mark_ready();
        true
    }

    fn config_file(&self) -> Option<Arc<NamedTempFile>> {
        self.configured
            .lock()
            .as_ref()
            .map(|configured| configured.file.clone())
    }
}

async fn probe_loop(engine: Weak<MermaidCliEngine>, settings: MermaidCliSettings) {
    let mut ticker = tokio::time::interval(settings.probe_interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        let Some(engine) = engine.upgrade() else {
            return;
        };
        if engine.probe(&settings.command) {
            return;
        }
    }
}

fn write_theme_file(theme: &ThemeOptions) -> std::io::Result<NamedTempFile> {
    let json = theme.to_config_json().map_err(std::io::Error::other)?;
    let mut file = tempfile::Builder::new()
        .prefix("pattern-viz-theme-")
        .suffix(".json")
        .tempfile()?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Diagnostics Mermaid prints when it rejects the diagram source.
const REJECTION_MARKERS: &[&str] = &[
    "parse error",
    "syntax error",
    "lexical error",
    "no diagram type detected",
    "unknowndiagramerror",
];

/// Maps a failed `mmdc` run to an engine error.
///
/// A run whose stderr carries one of [`REJECTION_MARKERS`] is a rejected
/// source; anything else (browser launch, missing output) is an engine
/// failure.
fn classify_failure(status: std::process::ExitStatus, stderr: &[u8]) -> EngineError {
    let message = String::from_utf8_lossy(stderr).trim().to_string();
    if message.is_empty() {
        return EngineError::Internal(format!("mmdc exited with {status}"));
    }
    let lower = message.to_lowercase();
    if REJECTION_MARKERS.iter().any(|marker| lower.contains(marker)) {
        EngineError::Syntax(message)
    } else {
        EngineError::Internal(message)
    }
}

async fn run_mmdc(
    binary: &Path,
    config: Option<&Path>,
    id: &RenderId,
    source: &str,
) -> Result<Artifact, EngineError> {
    let workdir = tempfile::tempdir()?;
    let input = workdir.path().join(format!("{id}.mmd"));
    let output = workdir.path().join(format!("{id}.svg"));
    tokio::fs::write(&input, source).await?;

    let mut command = tokio::process::Command::new(binary);
    command.arg("--quiet");
    command.arg("--input").arg(&input);
    command.arg("--output").arg(&output);
    if let Some(config) = config {
        command.arg("--configFile").arg(config);
    }

    let result = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await?;

    if !result.status.success() {
        return Err(classify_failure(result.status, &result.stderr));
    }

    let svg = tokio::fs::read_to_string(&output).await.map_err(|err| {
        EngineError::Internal(format!("mmdc produced no output for {id}: {err}"))
    })?;
    Ok(Artifact::from_svg(svg))
}

#[async_trait]
impl RenderEngine for MermaidCliEngine {
    fn readiness(&self) -> ReadinessGate {
        self.readiness.clone()
    }

    fn configure(&self, theme: &ThemeOptions) {
        let mut configured = self.configured.lock();
        if configured.as_ref().is_some_and(|c| &c.theme == theme) {
            return;
        }

        match write_theme_file(theme) {
            Ok(file) => {
                log::debug!("Wrote Mermaid theme config to {}", file.path().display());
                *configured = Some(ConfiguredTheme {
                    theme: theme.clone(),
                    file: Arc::new(file),
                });
            }
            Err(err) => log::warn!("Failed to write Mermaid theme config: {err}"),
        }
    }

    async fn render(&self, id: &RenderId, source: &str) -> Result<Artifact, EngineError> {
        let binary = self
            .binary
            .get()
            .ok_or_else(|| EngineError::Internal("Mermaid CLI is not available".to_string()))?;
        // Holding the handle keeps the config file alive for the whole run.
        let config = self.config_file();
        run_mmdc(binary, config.as_deref().map(|f| f.path()), id, source).await
    }
}
