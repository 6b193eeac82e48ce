use cast_core::{Node, Primitive};
use cast_frontend::{CursorKind, TranslationUnit, TypeKind};

use super::{Expected, KindHandler};
use crate::explore::context::ExploreContext;
use crate::explore::info::InfoOf;

pub(crate) struct PrimitiveHandler;

impl KindHandler for PrimitiveHandler {
    const CURSORS: Expected<CursorKind> = Expected::Any;
    const TYPES: Expected<TypeKind> = Expected::Any;

    fn explore<U: TranslationUnit>(_context: &mut ExploreContext<'_, U>, info: &InfoOf<U>) -> Node {
        Node::Primitive(Primitive {
            name: info.name.clone(),
            comment: None,
            is_system: false,
            type_info: info.type_info_or_own(),
        })
    }
}
