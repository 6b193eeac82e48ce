//! Declaration nodes.
//!
//! Every concrete node implements [`AstNode`]; the closed [`Node`] sum type
//! wraps them all so that kind derivation is a total match.
//!
//! Top-level node names are not stored inside the JSON object: the name is the
//! key of the map that holds the node (see [`crate::ast::AstNodes`]).

use std::cmp::Ordering;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CallingConvention, NodeKind, RecordKind};
use crate::location::Location;
use crate::serde_helpers::{is_false, is_zero};
use crate::type_info::TypeInfo;

// ---------------------------------------------------------------------------
// AstNode
// ---------------------------------------------------------------------------

/// Behavior shared by every declaration node.
pub trait AstNode: Clone + PartialEq {
    fn name(&self) -> &str;

    fn set_name(&mut self, name: String);

    fn kind(&self) -> NodeKind;

    fn location(&self) -> Option<&Location>;

    /// Clear the node's location and every nested location, including
    /// `TypeInfo` chains of fields, parameters, and return types.
    fn clear_locations(&mut self);

    /// Structural equality that ignores every location.
    fn eq_ignoring_location(&self, other: &Self) -> bool {
        let mut this = self.clone();
        let mut that = other.clone();
        this.clear_locations();
        that.clear_locations();
        this == that
    }
}

/// Total order used before nodes are keyed by name.
///
/// Nodes with a location sort by location; nodes without one sort after them.
/// Ties (and location-less nodes) fall back to name ordering.
pub fn compare_nodes<T: AstNode>(a: &T, b: &T) -> Ordering {
    match (a.location(), b.location()) {
        (Some(left), Some(right)) => left.cmp(right).then_with(|| a.name().cmp(b.name())),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.name().cmp(b.name()),
    }
}

fn clear_location(location: &mut Option<Location>) {
    *location = None;
}

// ---------------------------------------------------------------------------
// Function
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Function {
    #[serde(skip)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_system: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub calling_convention: CallingConvention,
    pub return_type: TypeInfo,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<FunctionParameter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct FunctionParameter {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(rename = "type")]
    pub type_info: TypeInfo,
}

impl AstNode for Function {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Function
    }

    fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    fn clear_locations(&mut self) {
        clear_location(&mut self.location);
        self.return_type.clear_locations();
        for parameter in &mut self.parameters {
            clear_location(&mut parameter.location);
            parameter.type_info.clear_locations();
        }
    }
}

// ---------------------------------------------------------------------------
// FunctionPointer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct FunctionPointer {
    #[serde(skip)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_system: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(rename = "type")]
    pub type_info: TypeInfo,
    pub calling_convention: CallingConvention,
    pub return_type: TypeInfo,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<FunctionPointerParameter>,
}

/// Function pointer parameters are positional; `name` is usually empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct FunctionPointerParameter {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "type")]
    pub type_info: TypeInfo,
}

impl AstNode for FunctionPointer {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn kind(&self) -> NodeKind {
        NodeKind::FunctionPointer
    }

    fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    fn clear_locations(&mut self) {
        clear_location(&mut self.location);
        self.type_info.clear_locations();
        self.return_type.clear_locations();
        for parameter in &mut self.parameters {
            parameter.type_info.clear_locations();
        }
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A struct or union with its layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    #[serde(skip)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_system: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub record_kind: RecordKind,
    pub size_of: i32,
    pub align_of: i32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<RecordField>,
}

/// A record field. `offset_of` and `padding` are in bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordField {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(rename = "type")]
    pub type_info: TypeInfo,
    #[serde(skip_serializing_if = "is_zero")]
    pub offset_of: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub padding: i32,
}

impl AstNode for Record {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn kind(&self) -> NodeKind {
        self.record_kind.node_kind()
    }

    fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    fn clear_locations(&mut self) {
        clear_location(&mut self.location);
        for field in &mut self.fields {
            clear_location(&mut field.location);
            field.type_info.clear_locations();
        }
    }
}

// ---------------------------------------------------------------------------
// Enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Enum {
    #[serde(skip)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_system: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub integer_type: TypeInfo,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct EnumValue {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub value: i64,
}

impl AstNode for Enum {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Enum
    }

    fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    fn clear_locations(&mut self) {
        clear_location(&mut self.location);
        self.integer_type.clear_locations();
    }
}

// ---------------------------------------------------------------------------
// EnumConstant
// ---------------------------------------------------------------------------

/// A constant of an anonymous enum, lifted to the top level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct EnumConstant {
    #[serde(skip)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_system: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(rename = "type")]
    pub type_info: TypeInfo,
    pub value: String,
}

impl AstNode for EnumConstant {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn kind(&self) -> NodeKind {
        NodeKind::EnumConstant
    }

    fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    fn clear_locations(&mut self) {
        clear_location(&mut self.location);
        self.type_info.clear_locations();
    }
}

// ---------------------------------------------------------------------------
// TypeAlias
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeAlias {
    #[serde(skip)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_system: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub underlying_type: TypeInfo,
}

impl AstNode for TypeAlias {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn kind(&self) -> NodeKind {
        NodeKind::TypeAlias
    }

    fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    fn clear_locations(&mut self) {
        clear_location(&mut self.location);
        self.underlying_type.clear_locations();
    }
}

// ---------------------------------------------------------------------------
// OpaqueType
// ---------------------------------------------------------------------------

/// A type whose layout is hidden; only the size is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct OpaqueType {
    #[serde(skip)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_system: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "is_zero")]
    pub size_of: i32,
}

impl AstNode for OpaqueType {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn kind(&self) -> NodeKind {
        NodeKind::OpaqueType
    }

    fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    fn clear_locations(&mut self) {
        clear_location(&mut self.location);
    }
}

// ---------------------------------------------------------------------------
// Variable
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Variable {
    #[serde(skip)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_system: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl AstNode for Variable {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Variable
    }

    fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    fn clear_locations(&mut self) {
        clear_location(&mut self.location);
    }
}

// ---------------------------------------------------------------------------
// MacroObject
// ---------------------------------------------------------------------------

/// An object-like macro recovered as a typed constant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MacroObject {
    #[serde(skip)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_system: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(rename = "type")]
    pub type_info: TypeInfo,
    pub value: String,
}

impl AstNode for MacroObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn kind(&self) -> NodeKind {
        NodeKind::MacroObject
    }

    fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    fn clear_locations(&mut self) {
        clear_location(&mut self.location);
        self.type_info.clear_locations();
    }
}

// ---------------------------------------------------------------------------
// Structural nodes: Pointer, Array, Primitive
// ---------------------------------------------------------------------------

macro_rules! structural_node {
    ($(#[$meta:meta])* $ty:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $ty {
            #[serde(skip)]
            pub name: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub comment: Option<String>,
            #[serde(skip_serializing_if = "is_false")]
            pub is_system: bool,
            #[serde(rename = "type")]
            pub type_info: TypeInfo,
        }

        impl AstNode for $ty {
            fn name(&self) -> &str {
                &self.name
            }

            fn set_name(&mut self, name: String) {
                self.name = name;
            }

            fn kind(&self) -> NodeKind {
                $kind
            }

            fn location(&self) -> Option<&Location> {
                None
            }

            fn clear_locations(&mut self) {
                self.type_info.clear_locations();
            }
        }
    };
}

structural_node!(
    /// A pointer type use; carries the pointee in `type_info.inner_type`.
    Pointer,
    NodeKind::Pointer
);
structural_node!(
    /// An array type use; carries the element in `type_info.inner_type`.
    Array,
    NodeKind::Array
);
structural_node!(Primitive, NodeKind::Primitive);

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// Every concrete node kind as one closed sum type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Function(Function),
    FunctionPointer(FunctionPointer),
    Record(Record),
    Enum(Enum),
    EnumConstant(EnumConstant),
    TypeAlias(TypeAlias),
    OpaqueType(OpaqueType),
    Variable(Variable),
    MacroObject(MacroObject),
    Pointer(Pointer),
    Array(Array),
    Primitive(Primitive),
}

macro_rules! each_node {
    ($value:expr, $node:ident => $body:expr) => {
        match $value {
            Node::Function($node) => $body,
            Node::FunctionPointer($node) => $body,
            Node::Record($node) => $body,
            Node::Enum($node) => $body,
            Node::EnumConstant($node) => $body,
            Node::TypeAlias($node) => $body,
            Node::OpaqueType($node) => $body,
            Node::Variable($node) => $body,
            Node::MacroObject($node) => $body,
            Node::Pointer($node) => $body,
            Node::Array($node) => $body,
            Node::Primitive($node) => $body,
        }
    };
}

impl AstNode for Node {
    fn name(&self) -> &str {
        each_node!(self, node => node.name())
    }

    fn set_name(&mut self, name: String) {
        each_node!(self, node => node.set_name(name));
    }

    fn kind(&self) -> NodeKind {
        each_node!(self, node => node.kind())
    }

    fn location(&self) -> Option<&Location> {
        each_node!(self, node => node.location())
    }

    fn clear_locations(&mut self) {
        each_node!(self, node => node.clear_locations());
    }

    fn eq_ignoring_location(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Function(a), Self::Function(b)) => a.eq_ignoring_location(b),
            (Self::FunctionPointer(a), Self::FunctionPointer(b)) => a.eq_ignoring_location(b),
            (Self::Record(a), Self::Record(b)) => a.eq_ignoring_location(b),
            (Self::Enum(a), Self::Enum(b)) => a.eq_ignoring_location(b),
            (Self::EnumConstant(a), Self::EnumConstant(b)) => a.eq_ignoring_location(b),
            (Self::TypeAlias(a), Self::TypeAlias(b)) => a.eq_ignoring_location(b),
            (Self::OpaqueType(a), Self::OpaqueType(b)) => a.eq_ignoring_location(b),
            (Self::Variable(a), Self::Variable(b)) => a.eq_ignoring_location(b),
            (Self::MacroObject(a), Self::MacroObject(b)) => a.eq_ignoring_location(b),
            (Self::Pointer(a), Self::Pointer(b)) => a.eq_ignoring_location(b),
            (Self::Array(a), Self::Array(b)) => a.eq_ignoring_location(b),
            (Self::Primitive(a), Self::Primitive(b)) => a.eq_ignoring_location(b),
            _ => false,
        }
    }
}

macro_rules! node_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Self::$variant(node)
                }
            }
        )*
    };
}

node_from!(
    Function,
    FunctionPointer,
    Record,
    Enum,
    EnumConstant,
    TypeAlias,
    OpaqueType,
    Variable,
    MacroObject,
    Pointer,
    Array,
    Primitive,
);
