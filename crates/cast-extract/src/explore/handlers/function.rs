use cast_core::{Function, FunctionParameter, Node};
use cast_frontend::{CursorKind, TranslationUnit, TypeKind};

use super::{Expected, KindHandler};
use crate::explore::context::{ExploreContext, TypeSite, resolve_type};
use crate::explore::info::InfoOf;

pub(crate) struct FunctionHandler;

impl KindHandler for FunctionHandler {
    const CURSORS: Expected<CursorKind> = Expected::OneOf(&[CursorKind::FunctionDecl]);
    const TYPES: Expected<TypeKind> = Expected::OneOf(&[
        TypeKind::FunctionProto,
        TypeKind::FunctionNoProto,
        TypeKind::Attributed,
        TypeKind::Elaborated,
        TypeKind::Unexposed,
    ]);

    fn explore<U: TranslationUnit>(context: &mut ExploreContext<'_, U>, info: &InfoOf<U>) -> Node {
        let unit = context.unit(info.unit);
        let function_type = resolve_type(unit, info.ty);
        let parent = info.as_parent();

        let return_type = context.visit_type(info.unit, unit.result_type(function_type), TypeSite::within(&parent));

        let mut parameters = Vec::new();
        for (index, argument) in unit.arguments(info.cursor).into_iter().enumerate() {
            let name = unit.cursor_name(argument);
            let type_info = context.visit_type(
                info.unit,
                unit.cursor_type(argument),
                TypeSite::field(&parent, &name, index),
            );
            parameters.push(FunctionParameter {
                comment: context.comment(info.unit, argument),
                location: context.location(info.unit, argument),
                type_info,
                name,
            });
        }

        Node::Function(Function {
            name: info.name.clone(),
            comment: context.comment(info.unit, info.cursor),
            is_system: info.is_system,
            location: info.location.clone(),
            calling_convention: unit.calling_convention(function_type),
            return_type,
            parameters,
        })
    }
}
