//! One explore handler per node kind.
//!
//! Dispatch is a total match over [`NodeKind`]: every kind either has a
//! handler or is reported as not implemented. Each handler also declares the
//! cursor and type kinds it accepts; a mismatch is logged and the item is
//! skipped.

mod array;
mod enum_constant;
mod enums;
mod function;
mod function_pointer;
mod opaque_type;
mod pointer;
mod primitive;
mod record;
mod type_alias;
mod variable;

use cast_core::{Node, NodeKind};
use cast_frontend::{CursorKind, TranslationUnit, TypeKind};
use tracing::error;

use super::context::ExploreContext;
use super::info::InfoOf;
use crate::error::ExtractError;

/// Kinds a handler accepts.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Expected<K: 'static> {
    Any,
    OneOf(&'static [K]),
}

impl<K: PartialEq> Expected<K> {
    fn accepts(&self, kind: &K) -> bool {
        match self {
            Self::Any => true,
            Self::OneOf(kinds) => kinds.contains(kind),
        }
    }
}

pub(crate) trait KindHandler {
    const CURSORS: Expected<CursorKind>;
    const TYPES: Expected<TypeKind>;

    fn explore<U: TranslationUnit>(context: &mut ExploreContext<'_, U>, info: &InfoOf<U>) -> Node;
}

/// Explore one work item into its node.
///
/// Returns `Ok(None)` when the item does not match what its handler accepts.
pub(crate) fn explore_node<U: TranslationUnit>(
    context: &mut ExploreContext<'_, U>,
    info: &InfoOf<U>,
) -> Result<Option<Node>, ExtractError> {
    match info.kind {
        NodeKind::Struct | NodeKind::Union => Ok(run::<record::RecordHandler, U>(context, info)),
        NodeKind::Enum => Ok(run::<enums::EnumHandler, U>(context, info)),
        NodeKind::EnumConstant => Ok(run::<enum_constant::EnumConstantHandler, U>(context, info)),
        NodeKind::Function => Ok(run::<function::FunctionHandler, U>(context, info)),
        NodeKind::FunctionPointer => Ok(run::<function_pointer::FunctionPointerHandler, U>(context, info)),
        NodeKind::TypeAlias => Ok(run::<type_alias::TypeAliasHandler, U>(context, info)),
        NodeKind::OpaqueType => Ok(run::<opaque_type::OpaqueTypeHandler, U>(context, info)),
        NodeKind::Variable => Ok(run::<variable::VariableHandler, U>(context, info)),
        NodeKind::Pointer => Ok(run::<pointer::PointerHandler, U>(context, info)),
        NodeKind::Array => Ok(run::<array::ArrayHandler, U>(context, info)),
        NodeKind::Primitive => Ok(run::<primitive::PrimitiveHandler, U>(context, info)),
        NodeKind::MacroObject | NodeKind::Unknown => Err(ExtractError::NotImplemented { kind: info.kind }),
    }
}

fn run<H: KindHandler, U: TranslationUnit>(context: &mut ExploreContext<'_, U>, info: &InfoOf<U>) -> Option<Node> {
    let unit = context.unit(info.unit);

    if !unit.is_null_cursor(info.cursor) {
        let cursor_kind = unit.cursor_kind(info.cursor);
        if !H::CURSORS.accepts(&cursor_kind) {
            error!(kind = %info.kind, name = %info.name, ?cursor_kind, "explore: unexpected cursor kind");
            return None;
        }
    }

    let type_kind = unit.type_kind(info.ty);
    if !H::TYPES.accepts(&type_kind) {
        error!(kind = %info.kind, name = %info.name, %type_kind, "explore: unexpected type kind");
        return None;
    }

    Some(H::explore(context, info))
}

#[cfg(test)]
mod tests {
    use cast_config::ExploreOptions;
    use rstest::rstest;

    use super::*;
    use crate::explore::frontier::Frontier;
    use crate::explore::info::ExploreInfo;
    use crate::test_support::{FakeUnit, INVALID_TYPE, NULL_CURSOR};

    #[rstest]
    #[case(NodeKind::Unknown)]
    #[case(NodeKind::MacroObject)]
    fn kinds_without_a_handler_are_not_implemented(#[case] kind: NodeKind) {
        let units = vec![FakeUnit::new("/work/include/lib.h")];
        let options = ExploreOptions::default();
        let mut frontier = Frontier::default();
        let mut context = ExploreContext::new(&units, &options, &mut frontier);
        let info = ExploreInfo::detached(kind, "mystery", NULL_CURSOR, INVALID_TYPE);

        let result = explore_node(&mut context, &info);

        assert!(
            matches!(result, Err(ExtractError::NotImplemented { kind: reported }) if reported == kind),
            "{result:?}"
        );
    }
}
