use crate::infra::diagram::{
    DiagramRenderer, RenderEngine, RenderState, RenderTicket, RendererOptions,
};
use std::sync::Arc;
use tokio::sync::watch;

/// Diagram area of the pattern view.
///
/// Re-renders only when the shown source changes. Dropping the panel drops
/// its renderer, which detaches it from any render still in flight.
pub struct DiagramPanel {
    renderer: DiagramRenderer,
    shown: Option<Arc<str>>,
}

impl DiagramPanel {
    pub fn new(engine: Arc<dyn RenderEngine>, options: RendererOptions) -> Self {
        Self {
            renderer: DiagramRenderer::new(engine, options),
            shown: None,
        }
    }

    /// Shows `source`, returning the new request when a render was issued.
    pub fn show(&mut self, source: &str) -> Option<RenderTicket> {
        if self.shown.as_deref() == Some(source) {
            return None;
        }
        let source: Arc<str> = Arc::from(source);
        self.shown = Some(source.clone());
        Some(self.renderer.render(source))
    }

    pub fn shown_source(&self) -> Option<&str> {
        self.shown.as_deref()
    }

    pub fn state(&self) -> RenderState {
        self.renderer.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<RenderState> {
        self.renderer.subscribe()
    }

    pub async fn settled(&self) -> RenderState {
        self.renderer.settled().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EngineError;
    use crate::infra::diagram::{
        Artifact, ReadinessGate, RenderId, RenderOutcome, ThemeOptions,
    };
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct EchoEngine {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RenderEngine for EchoEngine {
        fn readiness(&self) -> ReadinessGate {
            ReadinessGate::ready()
        }

        fn configure(&self, _theme: &ThemeOptions) {}

        async fn render(&self, _id: &RenderId, source: &str) -> Result<Artifact, EngineError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Artifact::from_svg(source.to_string()))
        }
    }

    #[tokio::test]
    async fn test_show_skips_unchanged_source() {
        let engine = Arc::new(EchoEngine::default());
        let mut panel = DiagramPanel::new(engine.clone(), RendererOptions::default());
        assert_eq!(panel.state(), RenderState::Idle);

        let ticket = panel.show("classDiagram\nclass A").expect("first render");
        assert_eq!(ticket.outcome().await, RenderOutcome::Applied);
        assert!(panel.show("classDiagram\nclass A").is_none());

        let ticket = panel.show("classDiagram\nclass B").expect("changed source");
        assert_eq!(ticket.generation(), 2);
        ticket.outcome().await;

        assert_eq!(engine.calls.load(Ordering::SeqCst), 2);
        assert_eq!(panel.shown_source(), Some("classDiagram\nclass B"));
        assert_eq!(
            panel.settled().await.artifact().map(|a| a.svg().to_string()),
            Some("classDiagram\nclass B".to_string())
        );
    }

    #[tokio::test]
    async fn test_dropping_panel_detaches_renderer() {
        let engine = Arc::new(EchoEngine::default());
        let mut panel = DiagramPanel::new(engine, RendererOptions::default());
        let rx = panel.subscribe();

        let ticket = panel.show("classDiagram\nclass A").unwrap();
        drop(panel);

        assert_eq!(ticket.outcome().await, RenderOutcome::Detached);
        assert_eq!(*rx.borrow(), RenderState::Pending);
    }
}
