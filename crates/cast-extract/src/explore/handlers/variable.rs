use cast_core::{Node, Variable};
use cast_frontend::{CursorKind, TranslationUnit, TypeKind};

use super::{Expected, KindHandler};
use crate::explore::context::{ExploreContext, TypeSite};
use crate::explore::info::InfoOf;

pub(crate) struct VariableHandler;

impl KindHandler for VariableHandler {
    const CURSORS: Expected<CursorKind> = Expected::OneOf(&[CursorKind::VarDecl]);
    const TYPES: Expected<TypeKind> = Expected::Any;

    fn explore<U: TranslationUnit>(context: &mut ExploreContext<'_, U>, info: &InfoOf<U>) -> Node {
        let type_info = context.visit_type(info.unit, info.ty, TypeSite::default());

        Node::Variable(Variable {
            name: info.name.clone(),
            comment: context.comment(info.unit, info.cursor),
            is_system: info.is_system,
            location: info.location.clone(),
            type_name: type_info.name,
        })
    }
}
