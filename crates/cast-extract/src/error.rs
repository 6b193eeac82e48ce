//! Extraction error types.

use std::path::PathBuf;

use cast_core::{AstIoError, NodeKind};
use cast_frontend::FrontEndError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The front end could not produce a translation unit.
    #[error(transparent)]
    FrontEnd(#[from] FrontEndError),

    /// The translation unit has error or fatal diagnostics.
    #[error(
        "Parsing '{}' produced {} error diagnostic(s):\n{}",
        path.display(),
        messages.len(),
        messages.join("\n")
    )]
    Diagnostics {
        path: PathBuf,
        arguments: Vec<String>,
        messages: Vec<String>,
    },

    /// A node kind reached dispatch without a handler.
    #[error("No explore handler is implemented for node kind '{kind}'")]
    NotImplemented { kind: NodeKind },

    /// An ignored macro pattern is not a valid glob.
    #[error("Invalid ignored macro pattern: {0}")]
    MacroPattern(#[from] globset::Error),

    /// Writing the AST document failed.
    #[error(transparent)]
    Output(#[from] AstIoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
