//! The extract configuration file as written by users.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default output directory, relative to the configuration file.
fn default_output_directory() -> String {
    "./ast".to_string()
}

/// Macro names that are never turned into macro objects.
fn default_ignored_macro_patterns() -> Vec<String> {
    vec!["*API_DECL".to_string(), "FFI_TARGET_*".to_string()]
}

const fn default_true() -> bool {
    true
}

/// Top-level extract configuration (JSON, camelCase keys).
///
/// Every list here applies to all target platforms; entries under
/// `targetPlatforms` are appended per platform.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractConfig {
    /// Path of the C header to extract.
    #[serde(default)]
    pub input_file_path: String,

    /// Directory receiving one `<triple>.json` file per target platform.
    #[serde(default = "default_output_directory")]
    pub output_directory: String,

    #[serde(default)]
    pub user_include_directories: Vec<String>,

    #[serde(default)]
    pub system_include_directories: Vec<String>,

    /// Cursors located under these directories are never explored.
    #[serde(default)]
    pub ignored_include_directories: Vec<String>,

    /// Glob patterns of macro names to skip.
    #[serde(default = "default_ignored_macro_patterns")]
    pub ignored_macro_patterns: Vec<String>,

    /// Type names always emitted as opaque types.
    #[serde(default)]
    pub opaque_type_names: Vec<String>,

    #[serde(default)]
    pub apple_frameworks: Vec<String>,

    #[serde(default)]
    pub is_enabled_location_full_paths: bool,

    #[serde(default)]
    pub is_enabled_allow_names_with_prefixed_underscore: bool,

    #[serde(default)]
    pub is_enabled_system_declarations: bool,

    #[serde(default = "default_true")]
    pub is_enabled_automatically_find_system_headers: bool,

    #[serde(default = "default_true")]
    pub is_enabled_parse_as_single_header: bool,

    #[serde(default = "default_true")]
    pub is_enabled_only_external_top_level_cursors: bool,

    #[serde(default = "default_true")]
    pub is_enabled_skip_function_bodies: bool,

    /// Host operating system (`linux`, `macos`, `windows`) → target triple → options.
    #[serde(default)]
    pub target_platforms: BTreeMap<String, BTreeMap<String, PlatformConfig>>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input_file_path: String::new(),
            output_directory: default_output_directory(),
            user_include_directories: Vec::new(),
            system_include_directories: Vec::new(),
            ignored_include_directories: Vec::new(),
            ignored_macro_patterns: default_ignored_macro_patterns(),
            opaque_type_names: Vec::new(),
            apple_frameworks: Vec::new(),
            is_enabled_location_full_paths: false,
            is_enabled_allow_names_with_prefixed_underscore: false,
            is_enabled_system_declarations: false,
            is_enabled_automatically_find_system_headers: true,
            is_enabled_parse_as_single_header: true,
            is_enabled_only_external_top_level_cursors: true,
            is_enabled_skip_function_bodies: true,
            target_platforms: BTreeMap::new(),
        }
    }
}

/// Options for one target triple.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformConfig {
    pub user_include_directories: Vec<String>,
    pub system_include_directories: Vec<String>,
    pub ignored_include_directories: Vec<String>,
    pub ignored_macro_patterns: Vec<String>,
    pub opaque_type_names: Vec<String>,
    pub apple_frameworks: Vec<String>,
    /// Passed to the compiler as `--define-macro=<define>`.
    pub defines: Vec<String>,
    /// Extra compiler arguments, appended verbatim.
    pub clang_arguments: Vec<String>,
}
