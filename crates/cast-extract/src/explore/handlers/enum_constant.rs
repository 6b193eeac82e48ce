use cast_core::{EnumConstant, Node};
use cast_frontend::{CursorKind, TranslationUnit, TypeKind};

use super::{Expected, KindHandler};
use crate::explore::context::{ExploreContext, TypeSite};
use crate::explore::info::InfoOf;

/// Constants of anonymous enums, promoted to top-level nodes.
pub(crate) struct EnumConstantHandler;

impl KindHandler for EnumConstantHandler {
    const CURSORS: Expected<CursorKind> = Expected::OneOf(&[CursorKind::EnumConstantDecl]);
    const TYPES: Expected<TypeKind> = Expected::Any;

    fn explore<U: TranslationUnit>(context: &mut ExploreContext<'_, U>, info: &InfoOf<U>) -> Node {
        let unit = context.unit(info.unit);
        let type_info = context.visit_type(info.unit, info.ty, TypeSite::default());

        Node::EnumConstant(EnumConstant {
            name: info.name.clone(),
            comment: context.comment(info.unit, info.cursor),
            is_system: info.is_system,
            location: info
                .location
                .clone()
                .or_else(|| info.parent.as_ref().and_then(|parent| parent.location.clone())),
            type_info,
            value: unit.enum_constant_value(info.cursor).to_string(),
        })
    }
}
