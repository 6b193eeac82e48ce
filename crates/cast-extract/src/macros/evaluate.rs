//! Evaluating the macro program and turning results into nodes.

use std::collections::HashMap;

use cast_core::{Location, MacroObject, NodeKind, TypeInfo};
use cast_frontend::{CursorKind, Evaluation, FrontEnd, TranslationUnit, TypeKind};
use tracing::{debug, info, warn};

use super::line_scanner::LineScanner;
use super::program::{VARIABLE_PREFIX, write_program};
use super::{MacroCandidate, dedup_by_name};
use crate::explore::context::layout;
use crate::explore::names::normalize_type_name;
use crate::parse::Parser;

/// Evaluate `candidates` for the parser's target platform.
///
/// Candidates that fail to evaluate are dropped; a failed program parse
/// yields no macro objects at all.
pub(crate) fn macro_objects<F: FrontEnd>(parser: &Parser<'_, F>, candidates: &[MacroCandidate]) -> Vec<MacroObject> {
    let candidates = dedup_by_name(candidates);
    if candidates.is_empty() {
        return Vec::new();
    }

    let program = match write_program(&candidates) {
        Ok(program) => program,
        Err(error) => {
            warn!(%error, "macros: could not write macro program");
            return Vec::new();
        }
    };

    let unit = match parser.parse_macro_program(program.path()) {
        Ok(unit) => unit,
        Err(error) => {
            warn!(%error, "macros: macro program did not parse");
            return Vec::new();
        }
    };

    let mut scanner = match LineScanner::open(program.path()) {
        Ok(scanner) => scanner,
        Err(error) => {
            warn!(%error, "macros: could not reread macro program");
            return Vec::new();
        }
    };

    let by_name: HashMap<&str, &MacroCandidate> = candidates
        .iter()
        .map(|candidate| (candidate.name.as_str(), *candidate))
        .collect();

    let mut objects = Vec::new();
    for variable in variable_declarations(&unit) {
        let name = unit.cursor_name(variable);
        let Some(candidate) = name.strip_prefix(VARIABLE_PREFIX).and_then(|name| by_name.get(name)) else {
            continue;
        };

        let Some(expression) = initializer(&unit, variable) else {
            debug!(macro_name = %candidate.name, "macros: no initializer");
            continue;
        };
        let Some(value) = evaluated_value(&unit, expression) else {
            debug!(macro_name = %candidate.name, "macros: not a constant");
            continue;
        };

        let location = unit
            .cursor_location(variable)
            .and_then(|source| recover_location(&mut scanner, source.line))
            .unwrap_or_else(|| candidate.location.clone());

        objects.push(MacroObject {
            name: candidate.name.clone(),
            comment: None,
            is_system: candidate.is_system,
            location: Some(location),
            type_info: macro_type_info(&unit, expression),
            value,
        });
    }

    objects.sort_by(|a, b| a.name.cmp(&b.name));
    info!(candidates = candidates.len(), recovered = objects.len(), "macros: evaluated");
    objects
}

/// `main` → compound statement → declaration statements → variables.
fn variable_declarations<U: TranslationUnit>(unit: &U) -> Vec<U::Cursor> {
    let main = unit.children(unit.root()).into_iter().find(|&cursor| {
        unit.cursor_kind(cursor) == CursorKind::FunctionDecl
            && unit.cursor_name(cursor) == "main"
            && unit.cursor_location(cursor).is_some_and(|source| source.is_main_file)
    });
    let Some(main) = main else {
        warn!("macros: macro program has no main function");
        return Vec::new();
    };

    let children_of_kind = |cursor: U::Cursor, kind: CursorKind| {
        unit.children(cursor)
            .into_iter()
            .filter(move |&child| unit.cursor_kind(child) == kind)
    };

    children_of_kind(main, CursorKind::CompoundStmt)
        .flat_map(|body| children_of_kind(body, CursorKind::DeclStmt).collect::<Vec<_>>())
        .flat_map(|statement| children_of_kind(statement, CursorKind::VarDecl).collect::<Vec<_>>())
        .collect()
}

/// The expression after `=`. Unlike the `auto` variable, its type keeps the
/// spelling of a cast such as `(uint32_t)5`.
fn initializer<U: TranslationUnit>(unit: &U, variable: U::Cursor) -> Option<U::Cursor> {
    unit.children(variable).into_iter().next()
}

fn evaluated_value<U: TranslationUnit>(unit: &U, expression: U::Cursor) -> Option<String> {
    match unit.evaluate(expression) {
        Evaluation::Integer { signed, unsigned } => {
            let canonical = unit.canonical_type(unit.cursor_type(expression));
            if unit.type_kind(canonical).is_signed_integer() {
                Some(signed.to_string())
            } else {
                Some(unsigned.to_string())
            }
        }
        Evaluation::Float(value) => Some(value.to_string()),
        Evaluation::String(text) => Some(format!("\"{text}\"")),
        Evaluation::Unexposed | Evaluation::Other => None,
    }
}

fn macro_type_info<U: TranslationUnit>(unit: &U, expression: U::Cursor) -> TypeInfo {
    let mut ty = unit.cursor_type(expression);
    if unit.type_kind(ty) == TypeKind::Elaborated {
        ty = unit.named_type(ty);
    }
    let kind = match unit.type_kind(ty) {
        kind if kind.is_primitive() => NodeKind::Primitive,
        TypeKind::Typedef => NodeKind::TypeAlias,
        TypeKind::Enum => NodeKind::Enum,
        TypeKind::Pointer => NodeKind::Pointer,
        TypeKind::ConstantArray => NodeKind::Array,
        _ => NodeKind::Unknown,
    };
    let (size_of, align_of) = layout(unit, ty);
    TypeInfo {
        align_of,
        ..TypeInfo::new(normalize_type_name(&unit.type_name(ty)), kind, size_of)
    }
}

/// Read the location comment written above the declaration on `line`.
fn recover_location(scanner: &mut LineScanner, line: u32) -> Option<Location> {
    let comment_line = usize::try_from(line).ok()?.checked_sub(1)?;
    let text = scanner.line(comment_line).ok().flatten()?;
    text.trim().strip_prefix("//")?.trim().parse().ok()
}
