use cast_core::{Location, NodeKind};
use cast_frontend::{Evaluation, TypeKind};
use pretty_assertions::assert_eq;

use super::{HEADER, explore, explore_options, explore_with, header};
use crate::test_support::FakeFrontEnd;

#[test]
fn object_macro_is_evaluated_with_location() {
    let mut unit = header();
    unit.macro_definition("MAX_SIZE", &["1024"], 2);
    let front_end = FakeFrontEnd::default()
        .with_unit(unit)
        .with_macro("MAX_SIZE", Evaluation::Integer { signed: 1024, unsigned: 1024 }, TypeKind::Int, "int", 4);

    let ast = explore(&front_end);

    let max_size = &ast.nodes.macro_objects["MAX_SIZE"];
    assert_eq!(max_size.value, "1024");
    assert_eq!(max_size.type_info.name, "int");
    assert_eq!(max_size.type_info.kind, NodeKind::Primitive);
    assert_eq!(max_size.type_info.size_of, 4);
    assert_eq!(max_size.location, Some(Location::new("lib.h", "lib.h", 2, 9)));
}

#[test]
fn macro_program_includes_header_and_declares_variables() {
    let mut unit = header();
    unit.macro_definition("FLAGS", &["(", "1", "<<", "4", ")"], 3);
    let front_end = FakeFrontEnd::default()
        .with_unit(unit)
        .with_macro("FLAGS", Evaluation::Integer { signed: 16, unsigned: 16 }, TypeKind::Int, "int", 4);

    explore(&front_end);

    let programs = front_end.macro_programs.borrow();
    assert_eq!(
        programs.as_slice(),
        [format!(
            "#include \"{HEADER}\"\n\nint main(void)\n{{\n\t// lib.h:3:9\n\tauto variable_FLAGS = ( 1 << 4 );\n}}\n"
        )]
    );

    let requests = front_end.requests.borrow();
    let program = requests.last().unwrap();
    assert!(program.arguments.contains(&"--language=c++".to_string()));
    assert!(program.arguments.contains(&"--std=gnu++11".to_string()));
    assert!(program.arguments.contains(&"--target=x86_64-unknown-linux-gnu".to_string()));
    assert!(program.flags.keep_going);
}

#[test]
fn values_follow_their_evaluated_kind() {
    let mut unit = header();
    unit.macro_definition("ALL_BITS", &["0xFFFFFFFFu"], 2);
    unit.macro_definition("VERSION", &["\"1.2.3\""], 3);
    unit.macro_definition("RATIO", &["2.5"], 4);
    unit.macro_definition("NEGATIVE", &["-", "7"], 5);
    let front_end = FakeFrontEnd::default()
        .with_unit(unit)
        .with_macro(
            "ALL_BITS",
            Evaluation::Integer { signed: -1, unsigned: 4_294_967_295 },
            TypeKind::UInt,
            "unsigned int",
            4,
        )
        .with_macro("VERSION", Evaluation::String("1.2.3".to_string()), TypeKind::Pointer, "const char *", 8)
        .with_macro("RATIO", Evaluation::Float(2.5), TypeKind::Double, "double", 8)
        .with_macro("NEGATIVE", Evaluation::Integer { signed: -7, unsigned: u64::MAX - 6 }, TypeKind::Int, "int", 4);

    let ast = explore(&front_end);
    let macros = &ast.nodes.macro_objects;

    assert_eq!(macros["ALL_BITS"].value, "4294967295");
    assert_eq!(macros["VERSION"].value, "\"1.2.3\"");
    assert_eq!(macros["VERSION"].type_info.kind, NodeKind::Pointer);
    assert_eq!(macros["VERSION"].type_info.name, "char*");
    assert_eq!(macros["RATIO"].value, "2.5");
    assert_eq!(macros["NEGATIVE"].value, "-7");
    let names: Vec<&str> = macros.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["ALL_BITS", "NEGATIVE", "RATIO", "VERSION"]);
}

#[test]
fn macro_type_comes_from_the_initializer() {
    let mut unit = header();
    unit.macro_definition("DEFAULT_FLAGS", &["(", "(", "flags_t", ")", "5", ")"], 2);
    unit.macro_definition("LIMIT", &["64"], 3);
    let front_end = FakeFrontEnd::default()
        .with_unit(unit)
        .with_macro("DEFAULT_FLAGS", Evaluation::Integer { signed: 5, unsigned: 5 }, TypeKind::Typedef, "flags_t", 4)
        .with_macro("LIMIT", Evaluation::Integer { signed: 64, unsigned: 64 }, TypeKind::Long, "long", 8);

    let ast = explore(&front_end);
    let macros = &ast.nodes.macro_objects;

    assert_eq!(macros["DEFAULT_FLAGS"].value, "5");
    assert_eq!(macros["DEFAULT_FLAGS"].type_info.kind, NodeKind::TypeAlias);
    assert_eq!(macros["DEFAULT_FLAGS"].type_info.name, "flags_t");
    assert_eq!(macros["LIMIT"].type_info.kind, NodeKind::Primitive);
    assert_eq!(macros["LIMIT"].type_info.size_of, 8);
}

#[test]
fn non_constant_and_filtered_macros_are_dropped() {
    let mut unit = header();
    unit.macro_definition("HAS_FEATURE", &[], 2);
    unit.macro_definition("_PRIVATE", &["1"], 3);
    unit.macro_definition("MYLIB_API_DECL", &["extern"], 4);
    unit.macro_definition("ALIGNED", &["__attribute__", "(", "(", "aligned", ")", ")"], 5);
    let function_like = unit.macro_definition("SQUARE", &["(", "x", ")", "(", "x", "*", "x", ")"], 6);
    unit.cursor_mut(function_like).macro_function_like = true;
    let builtin = unit.macro_definition("BUILTIN", &["1"], 7);
    unit.cursor_mut(builtin).macro_builtin = true;
    unit.macro_definition("RUNTIME", &["get_value", "(", ")"], 8);
    let front_end = FakeFrontEnd::default().with_unit(unit);

    let ast = explore(&front_end);

    assert!(ast.nodes.macro_objects.is_empty());
    let programs = front_end.macro_programs.borrow();
    assert_eq!(programs.len(), 1);
    assert!(programs[0].contains("auto variable_RUNTIME = get_value ( );"));
    assert!(!programs[0].contains("SQUARE"));
}

#[test]
fn no_candidates_means_no_macro_program() {
    let front_end = FakeFrontEnd::default().with_unit(header());
    explore(&front_end);
    assert!(front_end.macro_programs.borrow().is_empty());
    assert_eq!(front_end.parsed_paths().len(), 1);
}

#[test]
fn duplicate_macro_names_keep_the_first_definition() {
    let mut unit = header();
    unit.macro_definition("LIMIT", &["10"], 2);
    unit.macro_definition("LIMIT", &["20"], 9);
    let front_end = FakeFrontEnd::default()
        .with_unit(unit)
        .with_macro("LIMIT", Evaluation::Integer { signed: 10, unsigned: 10 }, TypeKind::Int, "int", 4);

    let ast = explore(&front_end);

    assert_eq!(ast.nodes.macro_objects["LIMIT"].location.as_ref().unwrap().line, 2);
    assert_eq!(front_end.macro_programs.borrow()[0].matches("variable_LIMIT").count(), 1);
}

#[test]
fn full_paths_survive_location_recovery() {
    let mut unit = header();
    unit.macro_definition("MAX_SIZE", &["1024"], 2);
    let front_end = FakeFrontEnd::default()
        .with_unit(unit)
        .with_macro("MAX_SIZE", Evaluation::Integer { signed: 1024, unsigned: 1024 }, TypeKind::Int, "int", 4);
    let options = cast_config::ExploreOptions {
        is_enabled_location_full_paths: true,
        ..explore_options()
    };

    let ast = explore_with(&front_end, &options).unwrap();

    assert_eq!(
        ast.nodes.macro_objects["MAX_SIZE"].location,
        Some(Location::new("lib.h", HEADER, 2, 9))
    );
}
