//! Shared state handed to every explore handler.
//!
//! The context owns nothing: it borrows the parsed units and the frontier of
//! the running exploration. Handlers use it to resolve type uses into
//! [`TypeInfo`] chains, which enqueues every named type they reach.

use std::path::Path;

use cast_config::ExploreOptions;
use cast_core::{Location, NodeKind, TypeInfo};
use cast_frontend::{CursorKind, LayoutError, SourceLocation, TranslationUnit, TypeKind};
use tracing::{debug, warn};

use super::frontier::Frontier;
use super::info::{ExploreInfo, InfoOf, ParentInfo, UnitId};
use super::names::{AnonymousSite, anonymous_name, normalize_type_name};

/// Upper bound on sugar layers peeled off a type before giving up.
const MAX_SUGAR_DEPTH: usize = 32;

/// Where a type use was found.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TypeSite<'s> {
    pub parent: Option<&'s ParentInfo>,
    pub field_name: Option<&'s str>,
    pub field_index: Option<usize>,
    /// Name of a typedef collapsing onto its underlying record or enum.
    pub alias_name: Option<&'s str>,
}

impl<'s> TypeSite<'s> {
    pub(crate) const fn within(parent: &'s ParentInfo) -> Self {
        Self {
            parent: Some(parent),
            field_name: None,
            field_index: None,
            alias_name: None,
        }
    }

    pub(crate) const fn field(parent: &'s ParentInfo, name: &'s str, index: usize) -> Self {
        Self {
            parent: Some(parent),
            field_name: Some(name),
            field_index: Some(index),
            alias_name: None,
        }
    }

    const fn without_alias(self) -> Self {
        Self {
            alias_name: None,
            ..self
        }
    }

    fn anonymous(&self) -> AnonymousSite<'s> {
        AnonymousSite {
            parent: self.parent.map(|parent| parent.name.as_str()),
            field_name: self.field_name,
            field_index: self.field_index,
        }
    }
}

pub(crate) struct ExploreContext<'a, U: TranslationUnit> {
    units: &'a [U],
    options: &'a ExploreOptions,
    frontier: &'a mut Frontier<U::Cursor, U::Type>,
}

impl<'a, U: TranslationUnit> ExploreContext<'a, U> {
    pub(crate) fn new(
        units: &'a [U],
        options: &'a ExploreOptions,
        frontier: &'a mut Frontier<U::Cursor, U::Type>,
    ) -> Self {
        Self {
            units,
            options,
            frontier,
        }
    }

    pub(crate) fn unit(&self, id: UnitId) -> &'a U {
        let units = self.units;
        &units[id]
    }

    pub(crate) const fn options(&self) -> &'a ExploreOptions {
        self.options
    }

    pub(crate) fn location(&self, unit: UnitId, cursor: U::Cursor) -> Option<Location> {
        self.unit(unit)
            .cursor_location(cursor)
            .map(|source| to_location(&source, self.options))
    }

    pub(crate) fn comment(&self, unit: UnitId, cursor: U::Cursor) -> Option<String> {
        self.unit(unit)
            .cursor_comment(cursor)
            .filter(|comment| !comment.trim().is_empty())
    }

    /// Build the work item for a declaration cursor.
    pub(crate) fn create_info(
        &self,
        kind: NodeKind,
        name: String,
        unit_id: UnitId,
        cursor: U::Cursor,
        ty: U::Type,
        parent: Option<ParentInfo>,
    ) -> InfoOf<U> {
        let unit = self.unit(unit_id);
        let source = unit.cursor_location(cursor);
        let (size_of, align_of) = layout(unit, ty);
        ExploreInfo {
            kind,
            name,
            unit: unit_id,
            cursor,
            ty,
            location: source.as_ref().map(|source| to_location(source, self.options)),
            source_path: source.as_ref().map(|source| source.file_path.clone()),
            is_system: source.is_some_and(|source| source.is_system),
            size_of,
            align_of,
            parent,
            type_info: None,
        }
    }

    /// Queue `info` unless it was visited already or is excluded.
    pub(crate) fn try_enqueue(&mut self, info: InfoOf<U>) -> bool {
        if !self.can_visit(&info) {
            return false;
        }
        debug!(kind = %info.kind, name = %info.name, "explore: enqueued");
        self.frontier.push(info);
        true
    }

    /// System declarations need the option, except aliases, function pointers
    /// and the structural kinds, which name types a user declaration already uses.
    fn can_visit(&mut self, info: &InfoOf<U>) -> bool {
        if info.name.is_empty() {
            return false;
        }

        let structural = matches!(
            info.kind,
            NodeKind::TypeAlias
                | NodeKind::Primitive
                | NodeKind::Pointer
                | NodeKind::Array
                | NodeKind::FunctionPointer
        );
        if info.is_system && !self.options.is_enabled_system_declarations && !structural {
            debug!(kind = %info.kind, name = %info.name, "explore: skipped system declaration");
            return false;
        }

        if info
            .source_path
            .as_deref()
            .is_some_and(|path| is_ignored_path(self.options, path))
        {
            debug!(kind = %info.kind, name = %info.name, "explore: skipped ignored include directory");
            return false;
        }

        self.frontier.mark_visited(info.kind, &info.name)
    }

    /// Describe a type use and enqueue every named type it reaches.
    pub(crate) fn visit_type(&mut self, unit_id: UnitId, ty: U::Type, site: TypeSite<'_>) -> TypeInfo {
        let unit = self.unit(unit_id);
        let is_const = unit.is_const(ty);
        let ty = resolve_type(unit, ty);
        let type_kind = unit.type_kind(ty);
        let declaration = unit.type_declaration(ty);
        let has_declaration = !unit.is_null_cursor(declaration);
        let source = if has_declaration {
            unit.cursor_location(declaration)
        } else {
            None
        };

        let is_anonymous = has_declaration
            && matches!(type_kind, TypeKind::Record | TypeKind::Enum)
            && unit.is_anonymous(declaration);
        let name = if is_anonymous {
            site.alias_name.map_or_else(
                || {
                    let (line, column) = source.as_ref().map_or((0, 0), |s| (s.line, s.column));
                    let kind = anonymous_kind(unit, type_kind, declaration);
                    anonymous_name(site.anonymous(), kind, line, column)
                },
                str::to_string,
            )
        } else {
            normalize_type_name(&unit.type_name(ty))
        };

        let kind = self.node_kind(unit, ty, type_kind, declaration, &name);
        if kind == NodeKind::TypeAlias {
            let underlying = resolve_type(unit, unit.typedef_underlying_type(declaration));
            if collapses_onto(unit, underlying, &name) {
                let mut collapsed = self.visit_type(
                    unit_id,
                    underlying,
                    TypeSite {
                        alias_name: Some(&name),
                        ..site
                    },
                );
                collapsed.is_const |= is_const;
                return collapsed;
            }
        }

        let (size_of, align_of) = layout(unit, ty);
        let location = source.as_ref().map(|source| to_location(source, self.options));
        let mut type_info = TypeInfo {
            align_of,
            is_anonymous: is_anonymous.then_some(true),
            is_const,
            location: location.clone(),
            ..TypeInfo::new(name, kind, size_of)
        };

        match kind {
            NodeKind::Pointer => {
                let pointee = self.visit_type(unit_id, unit.pointee_type(ty), site.without_alias());
                type_info.inner_type = Some(Box::new(pointee));
            }
            NodeKind::Array => {
                let element = self.visit_type(unit_id, unit.element_type(ty), site.without_alias());
                type_info.size_of_element = Some(element.size_of);
                type_info.array_size = unit.array_size(ty).and_then(|count| i32::try_from(count).ok());
                type_info.inner_type = Some(Box::new(element));
            }
            NodeKind::TypeAlias => {
                let alias = ParentInfo {
                    kind,
                    name: type_info.name.clone(),
                    location,
                };
                let underlying = self.visit_type(
                    unit_id,
                    unit.typedef_underlying_type(declaration),
                    TypeSite::within(&alias),
                );
                type_info.inner_type = Some(Box::new(underlying));
            }
            _ => {}
        }

        if kind == NodeKind::Unknown {
            warn!(name = %type_info.name, %type_kind, "explore: unsupported type kind");
            return type_info;
        }

        let info = ExploreInfo {
            kind,
            name: type_info.name.clone(),
            unit: unit_id,
            cursor: declaration,
            ty,
            location: type_info.location.clone(),
            source_path: source.as_ref().map(|source| source.file_path.clone()),
            is_system: source.as_ref().is_some_and(|source| source.is_system),
            size_of,
            align_of,
            parent: site.parent.cloned(),
            type_info: Some(type_info.clone()),
        };
        self.try_enqueue(info);

        type_info
    }

    fn node_kind(
        &self,
        unit: &U,
        ty: U::Type,
        type_kind: TypeKind,
        declaration: U::Cursor,
        name: &str,
    ) -> NodeKind {
        let opaque = self.options.opaque_type_names.contains(name);
        match type_kind {
            kind if kind.is_primitive() => NodeKind::Primitive,
            TypeKind::Pointer => {
                let pointee = unit.canonical_type(resolve_type(unit, unit.pointee_type(ty)));
                if unit.type_kind(pointee).is_function() {
                    NodeKind::FunctionPointer
                } else {
                    NodeKind::Pointer
                }
            }
            kind if kind.is_array() => NodeKind::Array,
            TypeKind::FunctionProto | TypeKind::FunctionNoProto => NodeKind::FunctionPointer,
            TypeKind::Typedef if opaque => NodeKind::OpaqueType,
            TypeKind::Typedef => NodeKind::TypeAlias,
            TypeKind::Record => {
                if opaque || matches!(unit.size_of(ty), Err(LayoutError::Incomplete)) {
                    NodeKind::OpaqueType
                } else if unit.cursor_kind(declaration) == CursorKind::UnionDecl {
                    NodeKind::Union
                } else {
                    NodeKind::Struct
                }
            }
            TypeKind::Enum if opaque => NodeKind::OpaqueType,
            TypeKind::Enum => NodeKind::Enum,
            _ => NodeKind::Unknown,
        }
    }
}

// ── Free helpers ─────────────────────────────────────────────────────

/// Peel unexposed, attributed, and elaborated sugar off a type.
pub(crate) fn resolve_type<U: TranslationUnit>(unit: &U, mut ty: U::Type) -> U::Type {
    for _ in 0..MAX_SUGAR_DEPTH {
        ty = match unit.type_kind(ty) {
            TypeKind::Unexposed => {
                let canonical = unit.canonical_type(ty);
                if unit.type_kind(canonical) == TypeKind::Unexposed {
                    return canonical;
                }
                canonical
            }
            TypeKind::Attributed => unit.modified_type(ty),
            TypeKind::Elaborated => unit.named_type(ty),
            _ => return ty,
        };
    }
    ty
}

/// Size and alignment in bytes. Types without a layout have size zero.
pub(crate) fn layout<U: TranslationUnit>(unit: &U, ty: U::Type) -> (i32, Option<i32>) {
    let size_of = unit
        .size_of(ty)
        .ok()
        .and_then(|size| i32::try_from(size).ok())
        .unwrap_or(0);
    let align_of = unit.align_of(ty).ok().and_then(|align| i32::try_from(align).ok());
    (size_of, align_of)
}

/// A typedef collapses when it names an anonymous record or enum, or one
/// spelled with the same name as the typedef.
fn collapses_onto<U: TranslationUnit>(unit: &U, underlying: U::Type, alias: &str) -> bool {
    match unit.type_kind(underlying) {
        TypeKind::Record | TypeKind::Enum => {
            let declaration = unit.type_declaration(underlying);
            unit.is_anonymous(declaration) || normalize_type_name(&unit.type_name(underlying)) == alias
        }
        _ => false,
    }
}

fn anonymous_kind<U: TranslationUnit>(unit: &U, type_kind: TypeKind, declaration: U::Cursor) -> NodeKind {
    match (type_kind, unit.cursor_kind(declaration)) {
        (TypeKind::Enum, _) => NodeKind::Enum,
        (_, CursorKind::UnionDecl) => NodeKind::Union,
        _ => NodeKind::Struct,
    }
}

/// Convert a front-end location into the serialized form.
pub(crate) fn to_location(source: &SourceLocation, options: &ExploreOptions) -> Location {
    let full_path = portable(&source.file_path);
    let file_name = options
        .user_include_directories
        .iter()
        .find_map(|dir| source.file_path.strip_prefix(dir).ok())
        .map_or_else(
            || {
                source
                    .file_path
                    .file_name()
                    .map_or_else(|| full_path.clone(), |name| name.to_string_lossy().into_owned())
            },
            portable,
        );
    let file_path = if options.is_enabled_location_full_paths {
        full_path
    } else {
        file_name.clone()
    };
    Location::new(file_name, file_path, source.line, source.column)
}

fn portable(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

pub(crate) fn is_ignored_path(options: &ExploreOptions, path: &Path) -> bool {
    options
        .ignored_include_directories
        .iter()
        .any(|dir| path.starts_with(dir))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use pretty_assertions::assert_eq;

    fn source(path: &str) -> SourceLocation {
        SourceLocation {
            file_path: PathBuf::from(path),
            line: 4,
            column: 9,
            is_system: false,
            is_main_file: true,
        }
    }

    #[test]
    fn file_name_is_relative_to_user_include_directory() {
        let options = ExploreOptions {
            user_include_directories: vec![PathBuf::from("/work/include")],
            ..ExploreOptions::default()
        };
        let location = to_location(&source("/work/include/sub/lib.h"), &options);
        assert_eq!(location, Location::new("sub/lib.h", "sub/lib.h", 4, 9));
    }

    #[test]
    fn file_name_falls_back_to_bare_name() {
        let options = ExploreOptions {
            is_enabled_location_full_paths: true,
            ..ExploreOptions::default()
        };
        let location = to_location(&source("/elsewhere/lib.h"), &options);
        assert_eq!(location, Location::new("lib.h", "/elsewhere/lib.h", 4, 9));
    }

    #[test]
    fn ignored_directories_match_by_prefix() {
        let options = ExploreOptions {
            ignored_include_directories: vec![PathBuf::from("/work/vendor")],
            ..ExploreOptions::default()
        };
        assert!(is_ignored_path(&options, Path::new("/work/vendor/zlib/zlib.h")));
        assert!(!is_ignored_path(&options, Path::new("/work/include/lib.h")));
    }
}
