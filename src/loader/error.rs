// ABOUTME: Error types for document loading
// ABOUTME: Carries the failing source name alongside the underlying I/O error

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("failed to read document {filename}: {source}")]
    ReadDocument {
        filename: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read standard input: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LoaderError>;
