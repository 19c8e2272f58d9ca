pub mod catalog;
pub mod domain;
pub mod infra;
pub mod state;
pub mod view;
