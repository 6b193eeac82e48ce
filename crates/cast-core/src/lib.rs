//! # cast-core
//!
//! Declaration-level AST model for C header FFI extraction.
//!
//! This crate provides the types shared by every other crate in the workspace:
//! - Node structs for every declaration kind (functions, records, enums, aliases, macros, ...)
//! - `TypeInfo` chains describing type uses
//! - The closed `Node` sum type with kind, ordering, and location-insensitive equality
//! - `TargetPlatform` triples
//! - Per-platform and cross-platform AST documents with JSON read/write

pub mod ast;
pub mod enums;
pub mod error;
pub mod io;
pub mod location;
pub mod nodes;
pub mod platform;
pub mod type_info;

mod serde_helpers;

pub use ast::{
    AbstractSyntaxTreeCrossPlatform, AbstractSyntaxTreeTargetPlatform, AstNodes, NodeMap, node_map,
};
pub use enums::{CallingConvention, NodeKind, RecordKind};
pub use error::AstIoError;
pub use location::Location;
pub use nodes::{
    Array, AstNode, Enum, EnumConstant, EnumValue, Function, FunctionParameter, FunctionPointer,
    FunctionPointerParameter, MacroObject, Node, OpaqueType, Pointer, Primitive, Record,
    RecordField, TypeAlias, Variable, compare_nodes,
};
pub use platform::{Architecture, OperatingSystem, TargetPlatform};
pub use type_info::TypeInfo;
