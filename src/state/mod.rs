use crate::catalog::CatalogStore;
use crate::domain::PatternEntry;
use crate::infra::app_config::AppConfig;
use crate::infra::diagram::mermaid_cli::DEFAULT_COMMAND;
use crate::infra::diagram::{CachedEngine, MermaidCliEngine, MermaidCliSettings, RenderEngine};
use crate::view::DiagramPanel;
use parking_lot::RwLock;
use std::sync::Arc;

/// Process-wide application state.
///
/// Owns the single rendering engine shared by every diagram panel.
pub struct AppState {
    pub catalog: &'static CatalogStore,
    pub config: Arc<RwLock<AppConfig>>,
    engine: Arc<dyn RenderEngine>,
    selected_id: RwLock<String>,
}

impl AppState {
    pub fn new(config: AppConfig, engine: Arc<dyn RenderEngine>) -> Self {
        let catalog = CatalogStore::builtin();
        Self {
            catalog,
            config: Arc::new(RwLock::new(config)),
            engine,
            selected_id: RwLock::new(catalog.first().id.to_string()),
        }
    }

    /// Builds the state with the Mermaid CLI engine described by `config`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn from_config(config: AppConfig) -> Self {
        let engine = engine_from_config(&config);
        Self::new(config, engine)
    }

    pub fn engine(&self) -> Arc<dyn RenderEngine> {
        self.engine.clone()
    }

    pub fn select(&self, id: &str) {
        *self.selected_id.write() = id.to_string();
    }

    /// The selected entry, or the first one if the selection is unknown.
    pub fn selected(&self) -> &'static PatternEntry {
        self.catalog.get_by_id(&self.selected_id.read())
    }

    /// A new diagram panel bound to the shared engine.
    pub fn diagram_panel(&self) -> DiagramPanel {
        DiagramPanel::new(self.engine(), self.config.read().renderer_options())
    }
}

pub fn engine_from_config(config: &AppConfig) -> Arc<dyn RenderEngine> {
    let settings = MermaidCliSettings {
        command: config
            .mmdc_path
            .clone()
            .unwrap_or_else(|| DEFAULT_COMMAND.to_string()),
        probe_interval: config.retry_interval(),
    };
    let engine = MermaidCliEngine::spawn(settings);

    match config.cache_capacity() {
        Some(capacity) => Arc::new(CachedEngine::new(engine, capacity)),
        None => engine,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EngineError;
    use crate::infra::diagram::{Artifact, ReadinessGate, RenderId, RenderState, ThemeOptions};
    use async_trait::async_trait;

    struct StaticEngine;

    #[async_trait]
    impl RenderEngine for StaticEngine {
        fn readiness(&self) -> ReadinessGate {
            ReadinessGate::ready()
        }

        fn configure(&self, _theme: &ThemeOptions) {}

        async fn render(&self, _id: &RenderId, _source: &str) -> Result<Artifact, EngineError> {
            Ok(Artifact::from_svg("<svg/>"))
        }
    }

    #[test]
    fn test_selection_defaults_to_first_and_falls_back() {
        let state = AppState::new(AppConfig::default(), Arc::new(StaticEngine));
        assert_eq!(state.selected().id, "singleton");

        state.select("proxy");
        assert_eq!(state.selected().id, "proxy");

        state.select("missing");
        assert_eq!(state.selected().id, "singleton");
    }

    #[tokio::test]
    async fn test_panel_renders_selected_entry() {
        let state = AppState::new(AppConfig::default(), Arc::new(StaticEngine));
        state.select("visitor");

        let mut panel = state.diagram_panel();
        panel.show(state.selected().diagram_source);

        assert_eq!(
            panel.settled().await,
            RenderState::Rendered(Artifact::from_svg("<svg/>"))
        );
    }

    #[tokio::test]
    async fn test_engine_from_config_waits_for_missing_cli() {
        let config = AppConfig {
            mmdc_path: Some("/definitely/not/here/mmdc".to_string()),
            ..AppConfig::default()
        };
        let engine = engine_from_config(&config);
        assert!(!engine.readiness().is_ready());
    }
}
