use cast_core::NodeKind;
use cast_frontend::{CursorKind, TypeKind};
use pretty_assertions::assert_eq;

use super::{explore, explore_options, explore_with, header};
use crate::test_support::{FakeFrontEnd, TypeData};

#[test]
fn typedef_of_anonymous_struct_collapses_into_record() {
    let mut unit = header();
    let int = unit.int();
    let anonymous = unit.record(CursorKind::StructDecl, None, 3, &[("a", int)]);
    unit.declare(anonymous);
    let foo = unit.typedef("Foo", anonymous, 5);
    unit.declare(foo);

    let ast = explore(&FakeFrontEnd::default().with_unit(unit));

    assert!(ast.nodes.type_aliases.is_empty());
    let foo = &ast.nodes.records["Foo"];
    assert_eq!(foo.fields.len(), 1);
    assert_eq!(foo.size_of, 4);
    assert_eq!(ast.nodes.records.len(), 1);
}

#[test]
fn typedef_with_same_name_collapses_into_record() {
    let mut unit = header();
    let int = unit.int();
    let foo_record = unit.record(CursorKind::StructDecl, Some("Foo"), 3, &[("a", int)]);
    unit.declare(foo_record);
    let elaborated = unit.elaborated(foo_record);
    let foo = unit.typedef("Foo", elaborated, 5);
    unit.declare(foo);

    let ast = explore(&FakeFrontEnd::default().with_unit(unit));

    assert!(ast.nodes.type_aliases.is_empty());
    assert!(ast.nodes.records.contains_key("Foo"));
}

#[test]
fn typedef_with_other_name_is_an_alias() {
    let mut unit = header();
    let int = unit.int();
    let bar = unit.record(CursorKind::StructDecl, Some("Bar"), 3, &[("a", int), ("b", int)]);
    unit.declare(bar);
    let elaborated = unit.elaborated(bar);
    let foo = unit.typedef("Foo", elaborated, 7);
    unit.declare(foo);

    let ast = explore(&FakeFrontEnd::default().with_unit(unit));

    let alias = &ast.nodes.type_aliases["Foo"];
    assert_eq!(alias.underlying_type.name, "Bar");
    assert_eq!(alias.underlying_type.kind, NodeKind::Struct);
    assert_eq!(alias.underlying_type.size_of, 8);
    assert!(ast.nodes.records.contains_key("Bar"));
}

#[test]
fn pointer_and_array_fields_build_inner_chains() {
    let mut unit = header();
    let int = unit.int();
    let point = unit.record(CursorKind::StructDecl, Some("Point"), 1, &[("x", int), ("y", int)]);
    let point_pointer = unit.pointer_to(point);
    let char_type = unit.scalar(TypeKind::CharS, "char", 1);
    let const_char = unit.const_of(char_type);
    let string = unit.pointer_to(const_char);
    let values = unit.array_of(int, 4);
    let shape = unit.record(
        CursorKind::StructDecl,
        Some("Shape"),
        10,
        &[("origin", point_pointer), ("name", string), ("values", values)],
    );
    unit.declare(shape);

    let ast = explore(&FakeFrontEnd::default().with_unit(unit));

    let shape = &ast.nodes.records["Shape"];
    assert_eq!(shape.size_of, 32);
    assert_eq!(shape.align_of, 8);

    let origin = &shape.fields[0].type_info;
    assert_eq!((origin.name.as_str(), origin.kind, origin.size_of), ("Point*", NodeKind::Pointer, 8));
    let pointee = origin.inner_type.as_deref().unwrap();
    assert_eq!((pointee.name.as_str(), pointee.kind), ("Point", NodeKind::Struct));

    let name = &shape.fields[1].type_info;
    assert_eq!(name.name, "char*");
    let character = name.inner_type.as_deref().unwrap();
    assert_eq!(character.name, "char");
    assert!(character.is_const);

    let values = &shape.fields[2].type_info;
    assert_eq!(values.kind, NodeKind::Array);
    assert_eq!(values.name, "int[4]");
    assert_eq!(values.array_size, Some(4));
    assert_eq!(values.size_of_element, Some(4));
    assert_eq!(values.size_of, 16);
    assert_eq!(shape.fields[2].offset_of, 16);

    assert!(ast.nodes.records.contains_key("Point"), "pointees are explored");
}

#[test]
fn anonymous_field_record_is_named_after_parent_and_field() {
    let mut unit = header();
    let int = unit.int();
    let inner = unit.record(CursorKind::StructDecl, None, 4, &[("a", int)]);
    let unnamed = unit.record(CursorKind::UnionDecl, None, 7, &[("b", int)]);
    let outer = unit.record(CursorKind::StructDecl, Some("Outer"), 3, &[("inner", inner), ("", unnamed)]);
    unit.declare(outer);

    let ast = explore(&FakeFrontEnd::default().with_unit(unit));

    let outer = &ast.nodes.records["Outer"];
    assert_eq!(outer.fields[0].type_info.name, "Outer_inner");
    assert_eq!(outer.fields[0].type_info.is_anonymous, Some(true));
    assert_eq!(outer.fields[1].type_info.name, "Outer_1");
    assert!(ast.nodes.records.contains_key("Outer_inner"));
    assert_eq!(ast.nodes.records["Outer_1"].record_kind, cast_core::RecordKind::Union);
}

#[test]
fn function_pointer_typedef_produces_alias_and_function_pointer() {
    let mut unit = header();
    let int = unit.int();
    let void = unit.scalar(TypeKind::Void, "void", 0);
    let void_pointer = unit.pointer_to(void);
    let callback = unit.function_pointer(void, &[int, void_pointer]);
    let callback_t = unit.typedef("callback_t", callback, 3);
    unit.declare(callback_t);

    let ast = explore(&FakeFrontEnd::default().with_unit(unit));

    let alias = &ast.nodes.type_aliases["callback_t"];
    assert_eq!(alias.underlying_type.kind, NodeKind::FunctionPointer);
    assert_eq!(alias.underlying_type.name, "void (*)(int, void*)");

    let pointer = &ast.nodes.function_pointers["void (*)(int, void*)"];
    assert_eq!(pointer.type_info.size_of, 8);
    assert_eq!(pointer.return_type.name, "void");
    let parameters: Vec<(&str, &str)> = pointer
        .parameters
        .iter()
        .map(|p| (p.name.as_str(), p.type_info.name.as_str()))
        .collect();
    assert_eq!(parameters, vec![("", "int"), ("", "void*")]);
}

#[test]
fn attributed_sugar_is_peeled() {
    let mut unit = header();
    let int = unit.int();
    let mut attributed = TypeData::new(TypeKind::Attributed, "int __attribute__((aligned(4)))");
    attributed.sugar_of = int;
    let attributed = unit.add_type(attributed);
    unit.variable("aligned_value", attributed, 2);

    let ast = explore(&FakeFrontEnd::default().with_unit(unit));

    assert_eq!(ast.nodes.variables["aligned_value"].type_name, "int");
}

#[test]
fn system_records_need_system_declarations() {
    let mut unit = header();
    let long = unit.scalar(TypeKind::Long, "long", 8);
    let timespec = unit.record(CursorKind::StructDecl, Some("timespec"), 40, &[("tv_sec", long), ("tv_nsec", long)]);
    let declaration = unit.declaration_of(timespec);
    unit.set_system(declaration);
    let int = unit.int();
    let timespec_pointer = unit.pointer_to(timespec);
    unit.function("sleep_for", 3, int, &[("duration", timespec_pointer)]);
    let front_end = FakeFrontEnd::default().with_unit(unit);

    let ast = explore(&front_end);
    assert!(ast.nodes.records.is_empty());
    assert_eq!(
        ast.nodes.functions["sleep_for"].parameters[0].type_info.name,
        "timespec*"
    );

    let with_system = cast_config::ExploreOptions {
        is_enabled_system_declarations: true,
        ..explore_options()
    };
    let ast = explore_with(&front_end, &with_system).unwrap();
    assert!(ast.nodes.records["timespec"].is_system);
}

#[test]
fn system_aliases_are_kept_without_system_declarations() {
    let mut unit = header();
    let ulong = unit.scalar(TypeKind::ULong, "unsigned long", 8);
    let size_t = unit.typedef("size_t", ulong, 46);
    let size_t_declaration = unit.declaration_of(size_t);
    unit.set_system(size_t_declaration);
    let int = unit.int();
    let void = unit.scalar(TypeKind::Void, "void", 0);
    let handler = unit.function_pointer(void, &[int]);
    let handler_t = unit.typedef("sighandler_t", handler, 72);
    let handler_declaration = unit.declaration_of(handler_t);
    unit.set_system(handler_declaration);
    unit.function("buffer_size", 3, size_t, &[("on_signal", handler_t)]);

    let ast = explore(&FakeFrontEnd::default().with_unit(unit));

    let size = &ast.nodes.type_aliases["size_t"];
    assert!(size.is_system);
    assert_eq!(size.underlying_type.name, "unsigned long");
    assert!(ast.nodes.type_aliases["sighandler_t"].is_system);
    assert!(ast.nodes.function_pointers.contains_key("void (*)(int)"));
}

#[test]
fn shared_types_are_explored_once() {
    let mut unit = header();
    let int = unit.int();
    let point = unit.record(CursorKind::StructDecl, Some("Point"), 3, &[("x", int), ("y", int)]);
    let point_pointer = unit.pointer_to(point);
    unit.function("point_length", 8, int, &[("point", point_pointer)]);
    unit.function("point_scale", 9, point, &[("point", point), ("factor", int)]);

    let front_end = FakeFrontEnd::default().with_unit(unit);
    let first = explore(&front_end);
    let second = explore(&front_end);

    assert_eq!(first.nodes.records.len(), 1);
    assert_eq!(first, second);
}
