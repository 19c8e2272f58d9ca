//! Domain types for PatternViz
//! Defines the catalog records and the error types shared by every layer.

pub mod error;
pub mod pattern;

pub use error::*;
pub use pattern::*;
