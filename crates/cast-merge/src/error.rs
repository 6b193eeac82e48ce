use cast_core::AstIoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeError {
    /// None of the input files named a platform.
    #[error("No platform AST could be merged: {inputs} input file(s), none usable")]
    NoPlatforms { inputs: usize },

    #[error(transparent)]
    Output(#[from] AstIoError),
}
