// ABOUTME: Renderer module for the vellum document pipeline
// ABOUTME: Drives parse and execute per document against a shared context, aborting on first failure

pub mod engine;
pub mod error;
pub mod funcs;
pub mod helpers;
pub mod separator;

use std::io::{self, Write};

use tracing::debug;

use crate::data::{DocData, Document, MetaData};

pub use engine::Engine;
pub use error::{RenderError, Result};
pub use separator::Separator;

/// Render documents in order against shared metadata, writing to `out`.
///
/// Each document is parsed, given a fresh per-document context, and executed
/// against the real stream or a discard sink when silent. The separator line
/// is written before each non-silent document, but only in multi-document
/// runs. The first parse or execute failure aborts the whole pass; later
/// documents are never rendered.
pub fn render_documents(
    meta: &MetaData,
    docs: &[Document],
    separator: Option<&Separator>,
    out: &mut dyn Write,
) -> Result<()> {
    let mut engine = Engine::new();
    let multi_doc = docs.len() > 1;

    for doc in docs {
        engine.parse(&doc.filename, &doc.content)?;
        let data = DocData::new(meta, doc);

        if doc.silent {
            debug!("Rendering {} to discard sink", doc.filename);
            engine.execute(&doc.filename, &data, io::sink())?;
            continue;
        }

        if multi_doc {
            if let Some(sep) = separator {
                out.write_all(sep.line(&doc.filename).as_bytes())?;
            }
        }

        engine.execute(&doc.filename, &data, &mut *out)?;
        out.flush()?;
    }

    Ok(())
}
