//! Closed views of the front end's cursor, type, diagnostic, and evaluation kinds.

use std::fmt;

// ---------------------------------------------------------------------------
// CursorKind
// ---------------------------------------------------------------------------

/// The cursor kinds the exploration engine cares about. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorKind {
    TranslationUnit,
    StructDecl,
    UnionDecl,
    EnumDecl,
    FieldDecl,
    EnumConstantDecl,
    FunctionDecl,
    VarDecl,
    ParmDecl,
    TypedefDecl,
    CompoundStmt,
    DeclStmt,
    MacroDefinition,
    MacroExpansion,
    InclusionDirective,
    Other(i32),
}

impl CursorKind {
    #[must_use]
    pub const fn is_record_declaration(self) -> bool {
        matches!(self, Self::StructDecl | Self::UnionDecl)
    }
}

impl fmt::Display for CursorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(raw) => write!(f, "Other({raw})"),
            known => write!(f, "{known:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// TypeKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Invalid,
    Unexposed,
    Void,
    Bool,
    CharU,
    UChar,
    Char16,
    Char32,
    UShort,
    UInt,
    ULong,
    ULongLong,
    UInt128,
    CharS,
    SChar,
    WChar,
    Short,
    Int,
    Long,
    LongLong,
    Int128,
    Half,
    Float16,
    Float,
    Double,
    LongDouble,
    Float128,
    Complex,
    Pointer,
    BlockPointer,
    Record,
    Enum,
    Typedef,
    FunctionNoProto,
    FunctionProto,
    ConstantArray,
    IncompleteArray,
    VariableArray,
    Vector,
    Elaborated,
    Attributed,
    Auto,
    Other(i32),
}

impl TypeKind {
    /// Builtin arithmetic, character, boolean, and void types.
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::Void
                | Self::Bool
                | Self::CharU
                | Self::UChar
                | Self::Char16
                | Self::Char32
                | Self::UShort
                | Self::UInt
                | Self::ULong
                | Self::ULongLong
                | Self::UInt128
                | Self::CharS
                | Self::SChar
                | Self::WChar
                | Self::Short
                | Self::Int
                | Self::Long
                | Self::LongLong
                | Self::Int128
                | Self::Half
                | Self::Float16
                | Self::Float
                | Self::Double
                | Self::LongDouble
                | Self::Float128
                | Self::Complex
        )
    }

    #[must_use]
    pub const fn is_signed_integer(self) -> bool {
        matches!(
            self,
            Self::CharS
                | Self::SChar
                | Self::WChar
                | Self::Short
                | Self::Int
                | Self::Long
                | Self::LongLong
                | Self::Int128
        )
    }

    #[must_use]
    pub const fn is_function(self) -> bool {
        matches!(self, Self::FunctionProto | Self::FunctionNoProto)
    }

    #[must_use]
    pub const fn is_array(self) -> bool {
        matches!(
            self,
            Self::ConstantArray | Self::IncompleteArray | Self::VariableArray
        )
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(raw) => write!(f, "Other({raw})"),
            known => write!(f, "{known:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// LayoutError
// ---------------------------------------------------------------------------

/// Why a type has no size or alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutError {
    Invalid,
    /// Forward-declared only.
    Incomplete,
    Dependent,
    NotConstantSize,
    InvalidFieldName,
    Undeduced,
}

impl LayoutError {
    /// Map a negative libclang layout result to its error.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            -2 => Self::Incomplete,
            -3 => Self::Dependent,
            -4 => Self::NotConstantSize,
            -5 => Self::InvalidFieldName,
            -6 => Self::Undeduced,
            _ => Self::Invalid,
        }
    }
}

// ---------------------------------------------------------------------------
// DiagnosticSeverity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticSeverity {
    Ignored,
    Note,
    Warning,
    Error,
    Fatal,
}

impl DiagnosticSeverity {
    /// Error and fatal diagnostics fail a parse.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error | Self::Fatal)
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Result of evaluating a cursor as a constant expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// Both interpretations of the integer bits; the caller picks by signedness.
    Integer { signed: i64, unsigned: u64 },
    Float(f64),
    /// String literal contents, without quotes.
    String(String),
    /// The expression is not a constant.
    Unexposed,
    /// Some other constant the engine does not represent.
    Other,
}
