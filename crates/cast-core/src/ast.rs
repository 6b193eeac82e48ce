//! Per-platform and cross-platform AST documents.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::nodes::{
    AstNode, Enum, EnumConstant, Function, FunctionPointer, MacroObject, Node, OpaqueType, Record,
    TypeAlias, Variable, compare_nodes,
};
use crate::platform::TargetPlatform;

/// Name-keyed nodes of one category. Keys are sorted, so JSON output is deterministic.
pub type NodeMap<T> = BTreeMap<String, T>;

/// Key nodes by name after a stable sort by [`compare_nodes`].
///
/// When two nodes share a name, the one sorting last wins. Nodes that compare
/// equal keep their discovery order, so the later discovery wins among them.
#[must_use]
pub fn node_map<T: AstNode>(mut nodes: Vec<T>) -> NodeMap<T> {
    nodes.sort_by(compare_nodes);
    let mut map = NodeMap::new();
    for node in nodes {
        map.insert(node.name().to_string(), node);
    }
    map
}

/// Restore each node's name from its map key.
fn named<'de, D, T>(deserializer: D) -> Result<NodeMap<T>, D::Error>
where
    D: Deserializer<'de>,
    T: AstNode + Deserialize<'de>,
{
    let mut map = NodeMap::<T>::deserialize(deserializer)?;
    for (name, node) in &mut map {
        node.set_name(name.clone());
    }
    Ok(map)
}

// ---------------------------------------------------------------------------
// AstNodes
// ---------------------------------------------------------------------------

/// The nine name-keyed node categories shared by both AST documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AstNodes {
    #[serde(skip_serializing_if = "BTreeMap::is_empty", deserialize_with = "named")]
    pub macro_objects: NodeMap<MacroObject>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", deserialize_with = "named")]
    pub variables: NodeMap<Variable>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", deserialize_with = "named")]
    pub functions: NodeMap<Function>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", deserialize_with = "named")]
    pub records: NodeMap<Record>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", deserialize_with = "named")]
    pub enums: NodeMap<Enum>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", deserialize_with = "named")]
    pub type_aliases: NodeMap<TypeAlias>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", deserialize_with = "named")]
    pub opaque_types: NodeMap<OpaqueType>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", deserialize_with = "named")]
    pub function_pointers: NodeMap<FunctionPointer>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", deserialize_with = "named")]
    pub enum_constants: NodeMap<EnumConstant>,
}

impl AstNodes {
    /// Every node, category by category in this fixed order: enums, functions,
    /// records, variables, enum constants, function pointers, macro objects,
    /// opaque types, type aliases. Within a category nodes come in name order.
    #[must_use]
    pub fn into_nodes(self) -> Vec<Node> {
        let mut nodes = Vec::with_capacity(self.len());
        nodes.extend(self.enums.into_values().map(Node::from));
        nodes.extend(self.functions.into_values().map(Node::from));
        nodes.extend(self.records.into_values().map(Node::from));
        nodes.extend(self.variables.into_values().map(Node::from));
        nodes.extend(self.enum_constants.into_values().map(Node::from));
        nodes.extend(self.function_pointers.into_values().map(Node::from));
        nodes.extend(self.macro_objects.into_values().map(Node::from));
        nodes.extend(self.opaque_types.into_values().map(Node::from));
        nodes.extend(self.type_aliases.into_values().map(Node::from));
        nodes
    }

    /// Insert a node into the map of its category, replacing any node of the
    /// same name. Structural nodes (pointer, array, primitive) have no category
    /// and are returned unchanged.
    pub fn insert(&mut self, node: Node) -> Option<Node> {
        match node {
            Node::MacroObject(n) => insert_named(&mut self.macro_objects, n),
            Node::Variable(n) => insert_named(&mut self.variables, n),
            Node::Function(n) => insert_named(&mut self.functions, n),
            Node::Record(n) => insert_named(&mut self.records, n),
            Node::Enum(n) => insert_named(&mut self.enums, n),
            Node::TypeAlias(n) => insert_named(&mut self.type_aliases, n),
            Node::OpaqueType(n) => insert_named(&mut self.opaque_types, n),
            Node::FunctionPointer(n) => insert_named(&mut self.function_pointers, n),
            Node::EnumConstant(n) => insert_named(&mut self.enum_constants, n),
            structural @ (Node::Pointer(_) | Node::Array(_) | Node::Primitive(_)) => {
                return Some(structural);
            }
        }
        None
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.macro_objects.len()
            + self.variables.len()
            + self.functions.len()
            + self.records.len()
            + self.enums.len()
            + self.type_aliases.len()
            + self.opaque_types.len()
            + self.function_pointers.len()
            + self.enum_constants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear every location, including nested `TypeInfo` chains.
    pub fn clear_locations(&mut self) {
        fn clear<T: AstNode>(map: &mut NodeMap<T>) {
            map.values_mut().for_each(AstNode::clear_locations);
        }
        clear(&mut self.macro_objects);
        clear(&mut self.variables);
        clear(&mut self.functions);
        clear(&mut self.records);
        clear(&mut self.enums);
        clear(&mut self.type_aliases);
        clear(&mut self.opaque_types);
        clear(&mut self.function_pointers);
        clear(&mut self.enum_constants);
    }
}

fn insert_named<T: AstNode>(map: &mut NodeMap<T>, node: T) {
    map.insert(node.name().to_string(), node);
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// AST of one header parsed for one target platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AbstractSyntaxTreeTargetPlatform {
    pub file_name: String,
    pub platform_requested: TargetPlatform,
    pub platform_actual: TargetPlatform,
    #[serde(flatten)]
    pub nodes: AstNodes,
}

/// AST holding only the nodes that are identical on every contributing platform.
/// Nodes carry no locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AbstractSyntaxTreeCrossPlatform {
    pub file_name: String,
    pub platforms: Vec<TargetPlatform>,
    #[serde(flatten)]
    pub nodes: AstNodes,
}
