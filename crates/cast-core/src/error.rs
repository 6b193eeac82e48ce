//! Errors raised while reading or writing AST documents.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AstIoError {
    /// The file could not be read or written.
    #[error("AST file I/O failed for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not a valid AST document.
    #[error("AST file '{path}' is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
