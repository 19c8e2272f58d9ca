//! Infrastructure layer (adapters/implementations).
//!
//! This module contains the IO-heavy integrations: the Mermaid CLI engine,
//! binary discovery, and the config file.

pub mod app_config;
pub mod diagram;
pub mod shell;
