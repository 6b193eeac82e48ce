use cast_core::{FunctionPointer, FunctionPointerParameter, Node};
use cast_frontend::{CursorKind, TranslationUnit, TypeKind};

use super::{Expected, KindHandler};
use crate::explore::context::{ExploreContext, TypeSite, resolve_type};
use crate::explore::info::InfoOf;

pub(crate) struct FunctionPointerHandler;

impl KindHandler for FunctionPointerHandler {
    const CURSORS: Expected<CursorKind> = Expected::Any;
    const TYPES: Expected<TypeKind> = Expected::OneOf(&[
        TypeKind::Pointer,
        TypeKind::FunctionProto,
        TypeKind::FunctionNoProto,
    ]);

    fn explore<U: TranslationUnit>(context: &mut ExploreContext<'_, U>, info: &InfoOf<U>) -> Node {
        let unit = context.unit(info.unit);

        let mut function_type = if unit.type_kind(info.ty) == TypeKind::Pointer {
            resolve_type(unit, unit.pointee_type(info.ty))
        } else {
            info.ty
        };
        if !unit.type_kind(function_type).is_function() {
            function_type = resolve_type(unit, unit.canonical_type(function_type));
        }

        let parent = info.as_parent();
        let return_type = context.visit_type(info.unit, unit.result_type(function_type), TypeSite::within(&parent));
        let parameters = unit
            .argument_types(function_type)
            .into_iter()
            .map(|argument| FunctionPointerParameter {
                name: String::new(),
                type_info: context.visit_type(info.unit, argument, TypeSite::within(&parent)),
            })
            .collect();

        Node::FunctionPointer(FunctionPointer {
            name: info.name.clone(),
            comment: None,
            is_system: info.is_system,
            location: info.location.clone(),
            type_info: info.type_info_or_own(),
            calling_convention: unit.calling_convention(function_type),
            return_type,
            parameters,
        })
    }
}
