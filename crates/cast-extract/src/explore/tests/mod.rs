use std::path::{Path, PathBuf};

use cast_config::{ExploreOptions, ParseOptions};
use cast_core::{AbstractSyntaxTreeTargetPlatform, TargetPlatform};

use crate::error::ExtractError;
use crate::explore::Explorer;
use crate::test_support::{FakeFrontEnd, FakeUnit};

mod macros;
mod types;

pub(super) const HEADER: &str = "/work/include/lib.h";

pub(super) fn explore_options() -> ExploreOptions {
    ExploreOptions {
        user_include_directories: vec![PathBuf::from("/work/include")],
        ignored_macro_patterns: vec!["*API_DECL".to_string()],
        is_enabled_only_external_top_level_cursors: true,
        is_enabled_single_header: true,
        ..ExploreOptions::default()
    }
}

pub(super) fn header() -> FakeUnit {
    FakeUnit::new(HEADER)
}

pub(super) fn explore_with(
    front_end: &FakeFrontEnd,
    options: &ExploreOptions,
) -> Result<AbstractSyntaxTreeTargetPlatform, ExtractError> {
    Explorer::new(front_end).abstract_syntax_tree(
        Path::new(HEADER),
        &TargetPlatform::new("x86_64-unknown-linux-gnu"),
        options,
        &ParseOptions::default(),
    )
}

pub(super) fn explore(front_end: &FakeFrontEnd) -> AbstractSyntaxTreeTargetPlatform {
    explore_with(front_end, &explore_options()).expect("exploration should succeed")
}
