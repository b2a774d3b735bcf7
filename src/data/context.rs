// ABOUTME: Context types threaded through the rendering pipeline
// ABOUTME: Environment snapshot, render-pass metadata, documents, and per-document data

use std::collections::HashMap;
use std::env;

use serde::Serialize;

use super::values::Values;

/// Snapshot of the process environment, taken once at startup.
pub type Environment = HashMap<String, String>;

/// Capture the current process environment as an [`Environment`] map.
///
/// Rendering never reads the live environment afterwards, so a run is
/// reproducible even if variables change while documents execute.
pub fn environment() -> Environment {
    env::vars().collect()
}

/// Metadata shared by every document in one render pass.
///
/// Constructed once per invocation and read-only for the remainder of the
/// run. Documents borrow from it and can never mutate it.
#[derive(Debug, Clone)]
pub struct MetaData {
    pub name: String,
    pub env: Environment,
    pub values: Values,
}

impl MetaData {
    pub fn new(name: impl Into<String>, env: Environment, values: Values) -> Self {
        Self {
            name: name.into(),
            env,
            values,
        }
    }
}

/// A single input document, resolved and read by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Source identifier: a file path, or the stdin sentinel.
    pub filename: String,
    /// Raw content as read from disk or stdin, not yet parsed.
    pub content: String,
    /// When true, execution output is discarded instead of written.
    pub silent: bool,
}

impl Document {
    pub fn new(filename: impl Into<String>, content: impl Into<String>, silent: bool) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
            silent,
        }
    }
}

/// The execution context handed to the substitution engine for one document.
///
/// Serialized with PascalCase field names and the value tree flattened into
/// the root, so expressions address `{{Filename}}`, `{{Env.HOME}}` and value
/// keys such as `{{a.b}}` directly. Built fresh for each document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocData<'a> {
    pub filename: &'a str,
    pub content: &'a str,
    pub env: &'a Environment,
    #[serde(flatten)]
    pub values: &'a Values,
}

impl<'a> DocData<'a> {
    pub fn new(meta: &'a MetaData, doc: &'a Document) -> Self {
        Self {
            filename: &doc.filename,
            content: &doc.content,
            env: &meta.env,
            values: &meta.values,
        }
    }
}
