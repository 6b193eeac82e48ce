//! # cast-merge
//!
//! Folds per-platform ASTs into one cross-platform AST holding only the
//! declarations that are identical everywhere.
//!
//! A node survives when every contributing platform has a node of that name,
//! all of the same kind, and all structurally equal once locations are
//! ignored. Survivors are written without any location. Everything else is
//! dropped and recorded in the [`MergeReport`].

pub mod engine;
pub mod error;
pub mod report;
pub mod tool;

pub use engine::{MergeOutcome, merge};
pub use error::MergeError;
pub use report::{MergeIssue, MergeReport};
pub use tool::run;
