// ABOUTME: Main library module for the vellum document renderer
// ABOUTME: Exports the data model, loader, renderer, and CLI layers

pub mod cli;
pub mod data;
pub mod loader;
pub mod render;

// Re-export commonly used types
pub use cli::{App, Args};
pub use data::{DocData, Document, Environment, MetaData, Values};
pub use loader::STDIN_SENTINEL;
pub use render::{Engine, Separator};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
