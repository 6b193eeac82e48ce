//! Front-end error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontEndError {
    /// The libclang shared library could not be found or loaded.
    #[error("Failed to load libclang: {0}")]
    LibraryNotLoaded(String),

    /// libclang refused to create an index.
    #[error("Failed to create a libclang index")]
    IndexCreation,

    /// A path or argument contained an interior NUL byte.
    #[error("Invalid argument for the front end: '{0}'")]
    InvalidArgument(String),

    /// The front end could not produce a translation unit at all.
    #[error("Parsing '{}' failed with error code {code} ({reason})", path.display())]
    ParseFailed {
        path: PathBuf,
        code: i32,
        reason: &'static str,
    },
}
