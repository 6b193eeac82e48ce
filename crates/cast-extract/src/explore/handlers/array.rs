use cast_core::{Array, Node};
use cast_frontend::{CursorKind, TranslationUnit, TypeKind};

use super::{Expected, KindHandler};
use crate::explore::context::ExploreContext;
use crate::explore::info::InfoOf;

pub(crate) struct ArrayHandler;

impl KindHandler for ArrayHandler {
    const CURSORS: Expected<CursorKind> = Expected::Any;
    const TYPES: Expected<TypeKind> = Expected::OneOf(&[
        TypeKind::ConstantArray,
        TypeKind::IncompleteArray,
        TypeKind::VariableArray,
    ]);

    fn explore<U: TranslationUnit>(_context: &mut ExploreContext<'_, U>, info: &InfoOf<U>) -> Node {
        Node::Array(Array {
            name: info.name.clone(),
            comment: None,
            is_system: info.is_system,
            type_info: info.type_info_or_own(),
        })
    }
}
