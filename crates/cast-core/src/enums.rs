//! Closed tag enums for node kinds, record kinds, and calling conventions.
//!
//! All enums use `camelCase` serialization to match the AST JSON documents.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// NodeKind
// ---------------------------------------------------------------------------

/// Kind of a declaration or type use.
///
/// Derived from the concrete node variant (see [`crate::Node::kind`]) and
/// stored on every [`crate::TypeInfo`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    #[default]
    Unknown,
    Primitive,
    Pointer,
    Array,
    Function,
    FunctionPointer,
    Struct,
    Union,
    Enum,
    EnumConstant,
    TypeAlias,
    OpaqueType,
    Variable,
    MacroObject,
}

impl NodeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Primitive => "primitive",
            Self::Pointer => "pointer",
            Self::Array => "array",
            Self::Function => "function",
            Self::FunctionPointer => "functionPointer",
            Self::Struct => "struct",
            Self::Union => "union",
            Self::Enum => "enum",
            Self::EnumConstant => "enumConstant",
            Self::TypeAlias => "typeAlias",
            Self::OpaqueType => "opaqueType",
            Self::Variable => "variable",
            Self::MacroObject => "macroObject",
        }
    }

    /// Struct or union.
    #[must_use]
    pub const fn is_record(self) -> bool {
        matches!(self, Self::Struct | Self::Union)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RecordKind
// ---------------------------------------------------------------------------

/// Whether a record is a struct or a union.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum RecordKind {
    #[default]
    Struct,
    Union,
}

impl RecordKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Union => "union",
        }
    }

    #[must_use]
    pub const fn node_kind(self) -> NodeKind {
        match self {
            Self::Struct => NodeKind::Struct,
            Self::Union => NodeKind::Union,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CallingConvention
// ---------------------------------------------------------------------------

/// Calling convention of a function or function pointer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum CallingConvention {
    Unknown,
    #[default]
    Cdecl,
    StdCall,
    FastCall,
}

impl CallingConvention {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Cdecl => "cdecl",
            Self::StdCall => "stdCall",
            Self::FastCall => "fastCall",
        }
    }
}

impl fmt::Display for CallingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
