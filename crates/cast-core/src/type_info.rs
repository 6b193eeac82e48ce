//! Type-use descriptions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::NodeKind;
use crate::location::Location;
use crate::serde_helpers::{is_false, is_zero};

/// Describes one use of a type: its canonical spelling, kind, layout, and
/// what it points to, contains, or aliases.
///
/// `inner_type` forms a singly-linked chain without cycles:
/// pointer → pointee, array → element, alias → underlying type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeInfo {
    pub name: String,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "is_zero")]
    pub size_of: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_of: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_of_element: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_anonymous: Option<bool>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_const: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_type: Option<Box<Self>>,
}

impl TypeInfo {
    /// A type use with only a name, kind, and size.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: NodeKind, size_of: i32) -> Self {
        Self {
            name: name.into(),
            kind,
            size_of,
            ..Self::default()
        }
    }

    /// Clear the location of this type use and of every type in its inner chain.
    pub fn clear_locations(&mut self) {
        let mut current = Some(self);
        while let Some(type_info) = current {
            type_info.location = None;
            current = type_info.inner_type.as_deref_mut();
        }
    }

    /// True if neither this type use nor any inner type carries a location.
    #[must_use]
    pub fn has_no_locations(&self) -> bool {
        let mut current = Some(self);
        while let Some(type_info) = current {
            if type_info.location.is_some() {
                return false;
            }
            current = type_info.inner_type.as_deref();
        }
        true
    }
}
