use cast_core::{Enum, EnumValue, Node};
use cast_frontend::{CursorKind, TranslationUnit, TypeKind};

use super::{Expected, KindHandler};
use crate::explore::context::{ExploreContext, TypeSite};
use crate::explore::info::InfoOf;

pub(crate) struct EnumHandler;

impl KindHandler for EnumHandler {
    const CURSORS: Expected<CursorKind> = Expected::OneOf(&[CursorKind::EnumDecl]);
    const TYPES: Expected<TypeKind> = Expected::OneOf(&[TypeKind::Enum]);

    fn explore<U: TranslationUnit>(context: &mut ExploreContext<'_, U>, info: &InfoOf<U>) -> Node {
        let unit = context.unit(info.unit);
        let parent = info.as_parent();
        let integer_type = context.visit_type(
            info.unit,
            unit.enum_integer_type(info.cursor),
            TypeSite::within(&parent),
        );

        let values = unit
            .children(info.cursor)
            .into_iter()
            .filter(|&child| unit.cursor_kind(child) == CursorKind::EnumConstantDecl)
            .map(|constant| EnumValue {
                name: unit.cursor_name(constant),
                comment: context.comment(info.unit, constant),
                value: unit.enum_constant_value(constant),
            })
            .collect();

        Node::Enum(Enum {
            name: info.name.clone(),
            comment: context.comment(info.unit, info.cursor),
            is_system: info.is_system,
            location: info.location.clone(),
            integer_type,
            values,
        })
    }
}
