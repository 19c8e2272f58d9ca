pub mod cache;
pub mod engine;
pub mod mermaid_cli;
pub mod readiness;
pub mod renderer;
pub mod theme;

// Re-export core types for convenience
pub use cache::CachedEngine;
pub use engine::{Artifact, RenderEngine, RenderId};
pub use mermaid_cli::{MermaidCliEngine, MermaidCliSettings};
pub use readiness::{ReadinessGate, ReadyWait, RetryPolicy};
pub use renderer::{DiagramRenderer, RenderOutcome, RenderState, RenderTicket, RendererOptions};
pub use theme::ThemeOptions;
