use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline failures. Everything else (malformed records, unresolved
/// references, duplicate digests) is handled locally and never surfaces here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: input is not valid JSON: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write headword database: {0}")]
    Output(#[source] serde_json::Error),

    #[error("config {path:?}: {message}")]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
