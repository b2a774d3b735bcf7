// ABOUTME: Data model module for the vellum document renderer
// ABOUTME: Provides the environment snapshot, value tree, and per-document context types

pub mod context;
pub mod error;
pub mod values;

pub use context::{environment, DocData, Document, Environment, MetaData};
pub use error::{DataError, Result};
pub use values::{load_values_file, nest_under, Values};
