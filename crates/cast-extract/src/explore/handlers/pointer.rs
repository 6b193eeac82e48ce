use cast_core::{Node, Pointer};
use cast_frontend::{CursorKind, TranslationUnit, TypeKind};

use super::{Expected, KindHandler};
use crate::explore::context::ExploreContext;
use crate::explore::info::InfoOf;

pub(crate) struct PointerHandler;

impl KindHandler for PointerHandler {
    const CURSORS: Expected<CursorKind> = Expected::Any;
    const TYPES: Expected<TypeKind> = Expected::OneOf(&[TypeKind::Pointer]);

    fn explore<U: TranslationUnit>(_context: &mut ExploreContext<'_, U>, info: &InfoOf<U>) -> Node {
        Node::Pointer(Pointer {
            name: info.name.clone(),
            comment: None,
            is_system: info.is_system,
            type_info: info.type_info_or_own(),
        })
    }
}
