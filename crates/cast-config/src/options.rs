//! Sanitized options consumed by the extract and merge tools.

use std::collections::BTreeSet;
use std::path::PathBuf;

use cast_core::TargetPlatform;

/// Fully resolved extract options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub input_file_path: PathBuf,
    /// One entry per requested target platform, in triple order.
    pub platforms: Vec<ExtractTargetPlatformOptions>,
}

/// Everything needed to produce the AST of one target platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractTargetPlatformOptions {
    pub target_platform: TargetPlatform,
    pub output_file_path: PathBuf,
    pub explore: ExploreOptions,
    pub parse: ParseOptions,
}

/// Options steering what the exploration engine visits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExploreOptions {
    /// Used to shorten location file names.
    pub user_include_directories: Vec<PathBuf>,
    pub ignored_include_directories: Vec<PathBuf>,
    pub opaque_type_names: BTreeSet<String>,
    /// Validated glob patterns.
    pub ignored_macro_patterns: Vec<String>,
    pub is_enabled_location_full_paths: bool,
    pub is_enabled_allow_names_with_prefixed_underscore: bool,
    pub is_enabled_system_declarations: bool,
    pub is_enabled_only_external_top_level_cursors: bool,
    /// Collect macro candidates from every header in the translation unit
    /// instead of only the main file.
    pub is_enabled_single_header: bool,
}

/// Options steering how the compiler front end parses a header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub user_include_directories: Vec<PathBuf>,
    pub system_include_directories: Vec<PathBuf>,
    pub macro_object_defines: Vec<String>,
    pub additional_arguments: Vec<String>,
    pub apple_frameworks: Vec<String>,
    pub is_enabled_find_system_headers: bool,
    pub is_enabled_system_declarations: bool,
    pub is_enabled_skip_function_bodies: bool,
}

/// Fully resolved merge options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// Per-platform AST files, sorted by file name.
    pub input_file_paths: Vec<PathBuf>,
    pub output_file_path: PathBuf,
}
