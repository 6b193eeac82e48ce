//! The front-end contract consumed by the exploration engine.

use std::fmt;
use std::path::{Path, PathBuf};

use cast_core::CallingConvention;

use crate::error::FrontEndError;
use crate::kinds::{CursorKind, DiagnosticSeverity, Evaluation, LayoutError, TypeKind};

/// A compiler front end able to parse headers into translation units.
pub trait FrontEnd {
    type Unit: TranslationUnit;

    /// Parse one file.
    ///
    /// Fatal failures (the front end could not produce a unit at all) are
    /// errors; diagnostics of any severity are left on the unit.
    fn parse(&self, request: &ParseRequest<'_>) -> Result<Self::Unit, FrontEndError>;
}

/// What to parse and how.
#[derive(Debug, Clone, Copy)]
pub struct ParseRequest<'a> {
    pub file_path: &'a Path,
    pub arguments: &'a [String],
    pub flags: ParseFlags,
}

/// Optional parse behaviors. Detailed preprocessing records and attributed
/// types are always requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseFlags {
    pub skip_function_bodies: bool,
    pub keep_going: bool,
}

/// One compiler diagnostic, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub message: String,
}

/// Where a cursor was spelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file_path: PathBuf,
    pub line: u32,
    pub column: u32,
    pub is_system: bool,
    pub is_main_file: bool,
}

/// A parsed translation unit. Dropping it releases the front end's memory,
/// which invalidates every cursor and type handle it produced.
pub trait TranslationUnit {
    type Cursor: Copy + fmt::Debug;
    type Type: Copy + fmt::Debug;

    fn diagnostics(&self) -> Vec<Diagnostic>;

    /// The target triple the front end actually used.
    fn target_triple(&self) -> Option<String>;

    // ── Cursors ──────────────────────────────────────────────────────────

    fn root(&self) -> Self::Cursor;

    /// Direct children in source order.
    fn children(&self, cursor: Self::Cursor) -> Vec<Self::Cursor>;

    fn is_null_cursor(&self, cursor: Self::Cursor) -> bool;

    fn cursor_kind(&self, cursor: Self::Cursor) -> CursorKind;

    fn cursor_name(&self, cursor: Self::Cursor) -> String;

    fn cursor_type(&self, cursor: Self::Cursor) -> Self::Type;

    fn cursor_location(&self, cursor: Self::Cursor) -> Option<SourceLocation>;

    fn cursor_comment(&self, cursor: Self::Cursor) -> Option<String>;

    /// External linkage and default visibility.
    fn is_externally_visible(&self, cursor: Self::Cursor) -> bool;

    fn is_anonymous(&self, cursor: Self::Cursor) -> bool;

    fn is_macro_builtin(&self, cursor: Self::Cursor) -> bool;

    fn is_macro_function_like(&self, cursor: Self::Cursor) -> bool;

    /// The file named by an inclusion directive.
    fn included_file(&self, cursor: Self::Cursor) -> Option<PathBuf>;

    /// Token spellings covering the cursor's extent.
    fn tokens(&self, cursor: Self::Cursor) -> Vec<String>;

    fn evaluate(&self, cursor: Self::Cursor) -> Evaluation;

    fn enum_integer_type(&self, cursor: Self::Cursor) -> Self::Type;

    fn enum_constant_value(&self, cursor: Self::Cursor) -> i64;

    fn typedef_underlying_type(&self, cursor: Self::Cursor) -> Self::Type;

    /// Offset of a field from the start of its record, in bits.
    fn field_offset_bits(&self, cursor: Self::Cursor) -> Option<i64>;

    /// Parameter cursors of a function declaration.
    fn arguments(&self, cursor: Self::Cursor) -> Vec<Self::Cursor>;

    // ── Types ────────────────────────────────────────────────────────────

    fn type_kind(&self, ty: Self::Type) -> TypeKind;

    fn type_name(&self, ty: Self::Type) -> String;

    fn canonical_type(&self, ty: Self::Type) -> Self::Type;

    fn pointee_type(&self, ty: Self::Type) -> Self::Type;

    fn element_type(&self, ty: Self::Type) -> Self::Type;

    fn array_size(&self, ty: Self::Type) -> Option<i64>;

    /// The type an attributed type wraps.
    fn modified_type(&self, ty: Self::Type) -> Self::Type;

    /// The type an elaborated type names.
    fn named_type(&self, ty: Self::Type) -> Self::Type;

    fn size_of(&self, ty: Self::Type) -> Result<i64, LayoutError>;

    fn align_of(&self, ty: Self::Type) -> Result<i64, LayoutError>;

    fn is_const(&self, ty: Self::Type) -> bool;

    fn type_declaration(&self, ty: Self::Type) -> Self::Cursor;

    fn result_type(&self, ty: Self::Type) -> Self::Type;

    fn argument_types(&self, ty: Self::Type) -> Vec<Self::Type>;

    fn calling_convention(&self, ty: Self::Type) -> CallingConvention;
}
