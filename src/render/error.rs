// ABOUTME: Error types for rendering operations
// ABOUTME: Distinguishes parse, execute, separator, and sink failures

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to parse {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: handlebars::TemplateError,
    },

    #[error("failed to render {name}: {source}")]
    Execute {
        name: String,
        #[source]
        source: handlebars::RenderError,
    },

    #[error("invalid separator format {format:?}: {reason}")]
    Separator { format: String, reason: String },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
