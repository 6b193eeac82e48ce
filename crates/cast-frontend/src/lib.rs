//! # cast-frontend
//!
//! Narrow adapter over a C compiler front end.
//!
//! The exploration engine only talks to the traits in [`unit`]: parse a file,
//! walk cursors, ask for types and layouts, tokenize a cursor's extent, and
//! evaluate constant expressions. [`clang`] implements them with libclang,
//! loaded at runtime through `clang-sys`.
//!
//! Cursor and type handles are plain `Copy` values that are only meaningful
//! while the translation unit that produced them is alive. Dropping the unit
//! disposes it.

pub mod clang;
pub mod error;
pub mod kinds;
pub mod unit;

pub use clang::{ClangFrontEnd, ClangTranslationUnit};
pub use error::FrontEndError;
pub use kinds::{CursorKind, DiagnosticSeverity, Evaluation, LayoutError, TypeKind};
pub use unit::{Diagnostic, FrontEnd, ParseFlags, ParseRequest, SourceLocation, TranslationUnit};
