use cast_core::{Node, OpaqueType};
use cast_frontend::{CursorKind, TranslationUnit, TypeKind};

use super::{Expected, KindHandler};
use crate::explore::context::ExploreContext;
use crate::explore::info::InfoOf;

/// Incomplete records and types named in the opaque override list.
pub(crate) struct OpaqueTypeHandler;

impl KindHandler for OpaqueTypeHandler {
    const CURSORS: Expected<CursorKind> = Expected::OneOf(&[
        CursorKind::StructDecl,
        CursorKind::UnionDecl,
        CursorKind::EnumDecl,
        CursorKind::TypedefDecl,
    ]);
    const TYPES: Expected<TypeKind> = Expected::OneOf(&[TypeKind::Record, TypeKind::Enum, TypeKind::Typedef]);

    fn explore<U: TranslationUnit>(context: &mut ExploreContext<'_, U>, info: &InfoOf<U>) -> Node {
        Node::OpaqueType(OpaqueType {
            name: info.name.clone(),
            comment: context.comment(info.unit, info.cursor),
            is_system: info.is_system,
            location: info.location.clone(),
            size_of: info.size_of,
        })
    }
}
