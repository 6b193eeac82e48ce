//! Recovery of object-like macro constants.
//!
//! The preprocessor leaves no typed value behind, so candidates are collected
//! from macro definition cursors, compiled into a throwaway C++ program with
//! one `auto` variable per macro, and read back through constant evaluation.

mod evaluate;
mod line_scanner;
mod program;

pub(crate) use evaluate::macro_objects;

use std::collections::HashSet;
use std::path::PathBuf;

use cast_config::ExploreOptions;
use cast_core::Location;
use cast_frontend::{CursorKind, TranslationUnit};
use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;

use crate::error::ExtractError;
use crate::explore::context::to_location;

/// An object-like macro whose value may be recoverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MacroCandidate {
    pub name: String,
    /// Replacement tokens, without the macro name.
    pub tokens: Vec<String>,
    pub location: Location,
    /// Header to `#include` in the macro program.
    pub header: PathBuf,
    pub is_system: bool,
}

/// Macro names excluded by the configured glob patterns.
#[derive(Debug, Clone)]
pub(crate) struct MacroFilter {
    ignored: GlobSet,
}

impl MacroFilter {
    pub(crate) fn new(patterns: &[String]) -> Result<Self, ExtractError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(Glob::new(pattern)?);
        }
        Ok(Self {
            ignored: builder.build()?,
        })
    }

    pub(crate) fn is_ignored(&self, name: &str) -> bool {
        self.ignored.is_match(name)
    }
}

/// Collect macro candidates from the macro definitions of `unit`.
pub(crate) fn candidates<U: TranslationUnit>(
    unit: &U,
    options: &ExploreOptions,
    filter: &MacroFilter,
) -> Vec<MacroCandidate> {
    let mut candidates = Vec::new();
    for cursor in unit.children(unit.root()) {
        if unit.cursor_kind(cursor) != CursorKind::MacroDefinition || unit.is_macro_builtin(cursor) {
            continue;
        }
        let Some(source) = unit.cursor_location(cursor) else {
            continue;
        };
        if !options.is_enabled_single_header && !source.is_main_file {
            continue;
        }
        if source.is_system && !options.is_enabled_system_declarations {
            continue;
        }

        let name = unit.cursor_name(cursor);
        if unit.is_macro_function_like(cursor) || name.starts_with('_') || filter.is_ignored(&name) {
            debug!(macro_name = %name, "macros: skipped");
            continue;
        }

        let Some(tokens) = replacement_tokens(unit.tokens(cursor)) else {
            continue;
        };

        candidates.push(MacroCandidate {
            name,
            tokens,
            location: to_location(&source, options),
            header: source.file_path,
            is_system: source.is_system,
        });
    }
    candidates
}

/// The replacement list of a macro definition's tokens, or `None` when the
/// macro has no value or uses compiler-reserved `__x__` tokens.
pub(crate) fn replacement_tokens(tokens: Vec<String>) -> Option<Vec<String>> {
    if tokens.len() <= 1 {
        return None;
    }

    let mut replacement = Vec::with_capacity(tokens.len() - 1);
    for token in tokens.into_iter().skip(1) {
        let token = match token.strip_prefix('\\') {
            Some(rest) => rest.to_string(),
            None => token,
        };
        if token.len() > 4 && token.starts_with("__") && token.ends_with("__") {
            return None;
        }
        if !token.is_empty() {
            replacement.push(token);
        }
    }

    (!replacement.is_empty()).then_some(replacement)
}

/// Keep the first candidate of each name.
pub(crate) fn dedup_by_name(candidates: &[MacroCandidate]) -> Vec<&MacroCandidate> {
    let mut seen = HashSet::new();
    candidates
        .iter()
        .filter(|candidate| seen.insert(candidate.name.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn tokens(text: &[&str]) -> Vec<String> {
        text.iter().map(ToString::to_string).collect()
    }

    #[rstest]
    #[case(&["MAX_SIZE", "1024"], Some(vec!["1024"]))]
    #[case(&["FLAGS", "(", "1", "<<", "4", ")"], Some(vec!["(", "1", "<<", "4", ")"]))]
    #[case(&["MULTI", "\\1"], Some(vec!["1"]))]
    #[case(&["HAS_FEATURE"], None)]
    #[case(&["ALIGNED", "__attribute__", "(", "(", "aligned", ")", ")"], None)]
    fn replacement_tokens_filter(#[case] input: &[&str], #[case] expected: Option<Vec<&str>>) {
        assert_eq!(
            replacement_tokens(tokens(input)),
            expected.map(|expected| tokens(&expected))
        );
    }

    #[test]
    fn filter_matches_globs() {
        let filter = MacroFilter::new(&["*API_DECL".to_string(), "FFI_TARGET_*".to_string()]).unwrap();
        assert!(filter.is_ignored("MYLIB_API_DECL"));
        assert!(filter.is_ignored("FFI_TARGET_LINUX"));
        assert!(!filter.is_ignored("MAX_SIZE"));
    }

    #[test]
    fn invalid_glob_is_an_error() {
        let error = MacroFilter::new(&["[unclosed".to_string()]).unwrap_err();
        assert!(matches!(error, ExtractError::MacroPattern(_)));
    }

    #[test]
    fn dedup_keeps_first_candidate() {
        let candidate = |name: &str, line: u32| MacroCandidate {
            name: name.to_string(),
            tokens: tokens(&["1"]),
            location: Location::new("a.h", "a.h", line, 9),
            header: PathBuf::from("/a.h"),
            is_system: false,
        };
        let candidates = vec![candidate("A", 1), candidate("B", 2), candidate("A", 3)];

        let lines: Vec<u32> = dedup_by_name(&candidates).iter().map(|c| c.location.line).collect();
        assert_eq!(lines, vec![1, 2]);
    }
}
