//! What the engine knows about a declaration waiting to be explored.

use std::path::PathBuf;

use cast_core::{Location, NodeKind, TypeInfo};
use cast_frontend::TranslationUnit;

/// Index of a translation unit owned by the running exploration.
pub(crate) type UnitId = usize;

/// The enclosing declaration of a nested one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParentInfo {
    pub kind: NodeKind,
    pub name: String,
    pub location: Option<Location>,
}

#[derive(Debug, Clone)]
pub(crate) struct ExploreInfo<C, T> {
    pub kind: NodeKind,
    pub name: String,
    pub unit: UnitId,
    pub cursor: C,
    pub ty: T,
    pub location: Option<Location>,
    /// Absolute path of the declaring file, used for ignored-directory checks.
    pub source_path: Option<PathBuf>,
    pub is_system: bool,
    pub size_of: i32,
    pub align_of: Option<i32>,
    pub parent: Option<ParentInfo>,
    /// The resolved type use, present when the item was reached through a type.
    pub type_info: Option<TypeInfo>,
}

pub(crate) type InfoOf<U> = ExploreInfo<<U as TranslationUnit>::Cursor, <U as TranslationUnit>::Type>;

impl<C, T> ExploreInfo<C, T> {
    pub(crate) fn as_parent(&self) -> ParentInfo {
        ParentInfo {
            kind: self.kind,
            name: self.name.clone(),
            location: self.location.clone(),
        }
    }

    /// The type use this item describes; built from its own layout when it
    /// was not reached through a type.
    pub(crate) fn type_info_or_own(&self) -> TypeInfo {
        self.type_info.clone().unwrap_or_else(|| TypeInfo {
            align_of: self.align_of,
            location: self.location.clone(),
            ..TypeInfo::new(self.name.clone(), self.kind, self.size_of)
        })
    }
}

#[cfg(test)]
impl<C, T> ExploreInfo<C, T> {
    /// An item with no location or layout, as if nothing reached it.
    pub(crate) fn detached(kind: NodeKind, name: &str, cursor: C, ty: T) -> Self {
        Self {
            kind,
            name: name.to_string(),
            unit: 0,
            cursor,
            ty,
            location: None,
            source_path: None,
            is_system: false,
            size_of: 0,
            align_of: None,
            parent: None,
            type_info: None,
        }
    }
}
