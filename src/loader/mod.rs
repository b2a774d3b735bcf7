// ABOUTME: Document loader for the vellum rendering pipeline
// ABOUTME: Resolves requested names into deduplicated, eagerly-read documents

pub mod error;

use std::fs;
use std::io;

use tracing::debug;

use crate::data::Document;

pub use error::{LoaderError, Result};

/// Reserved input name meaning "read the standard input stream".
pub const STDIN_SENTINEL: &str = "-";

/// Resolve requested input names into ready-to-render documents.
///
/// An empty request list is treated as a single request for stdin. Later
/// occurrences of an already-seen name are dropped, preserving first-
/// occurrence order, so each source is read exactly once. Any read failure
/// aborts resolution with the failing name attached.
///
/// The silent flag is constant for the whole invocation and stamped onto
/// every produced document.
pub fn resolve(names: &[String], silent: bool) -> Result<Vec<Document>> {
    let requested: Vec<&str> = if names.is_empty() {
        vec![STDIN_SENTINEL]
    } else {
        names.iter().map(String::as_str).collect()
    };

    let unique = dedup(&requested);
    debug!(
        "Resolving {} document(s) from {} request(s)",
        unique.len(),
        requested.len()
    );

    unique
        .into_iter()
        .map(|name| read_document(name, silent))
        .collect()
}

/// Drop duplicate names, keeping the first occurrence of each in order.
fn dedup<'a>(names: &[&'a str]) -> Vec<&'a str> {
    let mut seen = std::collections::HashSet::new();
    names
        .iter()
        .copied()
        .filter(|name| seen.insert(*name))
        .collect()
}

fn read_document(name: &str, silent: bool) -> Result<Document> {
    let content = if name == STDIN_SENTINEL {
        // Must read to EOF before parsing can begin.
        io::read_to_string(io::stdin().lock())
            .map_err(|source| LoaderError::ReadStdin { source })?
    } else {
        fs::read_to_string(name).map_err(|source| LoaderError::ReadDocument {
            filename: name.to_string(),
            source,
        })?
    };

    Ok(Document::new(name, content, silent))
}
