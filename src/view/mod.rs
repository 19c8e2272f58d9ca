//! Display layer.
//!
//! Passive views over the catalog and the diagram renderer. Nothing here
//! decides what to render; it only shows the current state.

pub mod diagram_panel;
pub mod text;

pub use diagram_panel::DiagramPanel;
pub use text::{format_catalog_line, format_entry, format_role_table, format_state};
