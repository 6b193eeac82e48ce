use cast_core::{Node, TypeAlias};
use cast_frontend::{CursorKind, TranslationUnit, TypeKind};

use super::{Expected, KindHandler};
use crate::explore::context::{ExploreContext, TypeSite};
use crate::explore::info::InfoOf;

pub(crate) struct TypeAliasHandler;

impl KindHandler for TypeAliasHandler {
    const CURSORS: Expected<CursorKind> = Expected::OneOf(&[CursorKind::TypedefDecl]);
    const TYPES: Expected<TypeKind> = Expected::OneOf(&[TypeKind::Typedef]);

    fn explore<U: TranslationUnit>(context: &mut ExploreContext<'_, U>, info: &InfoOf<U>) -> Node {
        // The underlying type was resolved when the alias itself was visited.
        let underlying_type = match info.type_info.as_ref().and_then(|type_info| type_info.inner_type.as_deref()) {
            Some(underlying) => underlying.clone(),
            None => {
                let unit = context.unit(info.unit);
                let parent = info.as_parent();
                context.visit_type(
                    info.unit,
                    unit.typedef_underlying_type(info.cursor),
                    TypeSite::within(&parent),
                )
            }
        };

        Node::TypeAlias(TypeAlias {
            name: info.name.clone(),
            comment: context.comment(info.unit, info.cursor),
            is_system: info.is_system,
            location: info.location.clone(),
            underlying_type,
        })
    }
}
