//! Integration tests for browsing the catalog with a live diagram panel.
//! These tests drive the public API the way the CLI does.

use async_trait::async_trait;
use pattern_viz::catalog::CatalogStore;
use pattern_viz::domain::EngineError;
use pattern_viz::infra::app_config::AppConfig;
use pattern_viz::infra::diagram::{
    Artifact, CachedEngine, ReadinessGate, RenderEngine, RenderId, RenderOutcome, RenderState,
    ThemeOptions,
};
use pattern_viz::state::AppState;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Loads after a delay and takes longer for earlier catalog entries, so
/// rapid switching sees results complete out of order.
struct SlowEngine {
    readiness: ReadinessGate,
    calls: AtomicUsize,
}

impl SlowEngine {
    fn loading_for(delay: Duration) -> Arc<Self> {
        let engine = Arc::new(Self {
            readiness: ReadinessGate::new(),
            calls: AtomicUsize::new(0),
        });
        let gate = engine.readiness.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            gate.mark_ready();
        });
        engine
    }
}

#[async_trait]
impl RenderEngine for SlowEngine {
    fn readiness(&self) -> ReadinessGate {
        self.readiness.clone()
    }

    fn configure(&self, _theme: &ThemeOptions) {}

    async fn render(&self, id: &RenderId, source: &str) -> Result<Artifact, EngineError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(10_000 - 1000 * call.min(5) as u64)).await;
        Ok(Artifact::from_svg(format!("<svg id=\"{id}\">{}</svg>", source.len())))
    }
}

fn svg_len(state: &RenderState) -> Option<usize> {
    let svg = state.artifact()?.svg();
    let start = svg.find('>')? + 1;
    let end = svg.rfind("</svg>")?;
    svg[start..end].parse().ok()
}

#[tokio::test(start_paused = true)]
async fn test_rapid_switching_shows_last_selection() -> anyhow::Result<()> {
    let engine = SlowEngine::loading_for(Duration::from_millis(1200));
    let state = AppState::new(AppConfig::default(), engine.clone());
    let mut panel = state.diagram_panel();

    let mut tickets = Vec::new();
    for entry in state.catalog.get_all().iter().take(5) {
        state.select(entry.id);
        let ticket = panel
            .show(state.selected().diagram_source)
            .expect("distinct sources");
        tickets.push(ticket);
        tokio::time::sleep(Duration::from_millis(1500)).await;
    }

    let last = tickets.pop().expect("five tickets");
    assert_eq!(last.outcome().await, RenderOutcome::Applied);
    for ticket in tickets {
        assert_eq!(ticket.outcome().await, RenderOutcome::Superseded);
    }

    let final_state = panel.state();
    assert_eq!(svg_len(&final_state), Some(state.selected().diagram_source.len()));
    assert_eq!(state.selected().id, state.catalog.get_all()[4].id);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_unknown_selection_renders_first_entry() -> anyhow::Result<()> {
    let engine = SlowEngine::loading_for(Duration::ZERO);
    let state = AppState::new(AppConfig::default(), engine);
    state.select("no-such-pattern");

    let mut panel = state.diagram_panel();
    panel.show(state.selected().diagram_source);
    let rendered = panel.settled().await;

    let first = CatalogStore::builtin().first();
    assert_eq!(svg_len(&rendered), Some(first.diagram_source.len()));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_revisiting_entry_uses_cache() -> anyhow::Result<()> {
    let slow = SlowEngine::loading_for(Duration::ZERO);
    let engine = Arc::new(CachedEngine::new(slow.clone(), NonZeroUsize::new(4).unwrap()));
    let state = AppState::new(AppConfig::default(), engine);
    let mut panel = state.diagram_panel();

    for id in ["singleton", "observer", "singleton"] {
        state.select(id);
        panel.show(state.selected().diagram_source);
        assert!(panel.settled().await.artifact().is_some());
    }

    assert_eq!(slow.calls.load(Ordering::SeqCst), 2);
    Ok(())
}
