// ABOUTME: Error types for the data model
// ABOUTME: Covers value-file reading and YAML decoding failures

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read value file {path}: {source}")]
    ReadValueFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode value file {path}: {source}")]
    DecodeValueFile {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type Result<T> = std::result::Result<T, DataError>;
