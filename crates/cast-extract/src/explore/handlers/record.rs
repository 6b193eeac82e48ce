use cast_core::{Node, NodeKind, Record, RecordField, RecordKind};
use cast_frontend::{CursorKind, TranslationUnit, TypeKind};

use super::{Expected, KindHandler};
use crate::explore::context::{ExploreContext, TypeSite};
use crate::explore::info::InfoOf;

pub(crate) struct RecordHandler;

impl KindHandler for RecordHandler {
    const CURSORS: Expected<CursorKind> = Expected::OneOf(&[CursorKind::StructDecl, CursorKind::UnionDecl]);
    const TYPES: Expected<TypeKind> = Expected::OneOf(&[TypeKind::Record]);

    fn explore<U: TranslationUnit>(context: &mut ExploreContext<'_, U>, info: &InfoOf<U>) -> Node {
        let unit = context.unit(info.unit);
        let record_kind = if info.kind == NodeKind::Union {
            RecordKind::Union
        } else {
            RecordKind::Struct
        };
        let parent = info.as_parent();

        let mut fields = Vec::new();
        let field_cursors = unit
            .children(info.cursor)
            .into_iter()
            .filter(|&child| unit.cursor_kind(child) == CursorKind::FieldDecl);
        for (index, cursor) in field_cursors.enumerate() {
            let name = unit.cursor_name(cursor);
            let type_info = context.visit_type(info.unit, unit.cursor_type(cursor), TypeSite::field(&parent, &name, index));
            let offset_of = unit
                .field_offset_bits(cursor)
                .and_then(|bits| i32::try_from(bits / 8).ok())
                .unwrap_or(0);
            fields.push(RecordField {
                comment: context.comment(info.unit, cursor),
                location: context.location(info.unit, cursor),
                type_info,
                offset_of,
                padding: 0,
                name,
            });
        }
        apply_padding(&mut fields, record_kind, info.size_of);

        Node::Record(Record {
            name: info.name.clone(),
            comment: context.comment(info.unit, info.cursor),
            is_system: info.is_system,
            location: info.location.clone(),
            record_kind,
            size_of: info.size_of,
            align_of: info.align_of.unwrap_or(0),
            fields,
        })
    }
}

/// Padding is the gap between the end of a field and the next field's
/// offset, or the end of the record for the last field and for union members.
fn apply_padding(fields: &mut [RecordField], record_kind: RecordKind, record_size: i32) {
    let next_offsets: Vec<i32> = (0..fields.len())
        .map(|index| match record_kind {
            RecordKind::Union => record_size,
            RecordKind::Struct => fields.get(index + 1).map_or(record_size, |next| next.offset_of),
        })
        .collect();

    for (field, next_offset) in fields.iter_mut().zip(next_offsets) {
        field.padding = (next_offset - field.offset_of - field.type_info.size_of).max(0);
    }
}
