//! # cast-extract
//!
//! Extracts a platform-specific, declaration-level AST from a C header.
//!
//! Built on the front-end traits of `cast-frontend`, so any front end works;
//! the CLI uses libclang.
//!
//! ## Architecture
//!
//! ```text
//! ExtractTool ──► Explorer ──► Parser ──► FrontEnd::parse
//!                    │
//!                    ├─► frontier ──► KindHandler per NodeKind
//!                    └─► macros: candidates ──► C++ program ──► evaluation
//! ```
//!
//! Each platform is explored independently and written with
//! [`cast_core::io::write_ast`]. The merge tool folds the files together.

pub mod error;
pub mod explore;
pub mod parse;
pub mod tool;

mod macros;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::ExtractError;
pub use explore::Explorer;
pub use parse::Parser;
pub use tool::{ExtractSummary, ExtractTool, FailurePolicy};
