//! # cast-config
//!
//! Configuration loading for the extract and merge tools using figment.
//!
//! The extract configuration is a JSON file layered over built-in defaults:
//! 1. The JSON file given on the command line
//! 2. Built-in defaults ([`ExtractConfig::default`])
//!
//! Loading is followed by sanitization: relative paths resolve against the
//! configuration file's directory, required files and directories are checked,
//! and only the target platforms of the current host operating system are kept.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! let options = cast_config::load_extract_options(Path::new("config.json")).expect("config");
//! for platform in &options.platforms {
//!     println!("{} -> {}", platform.target_platform, platform.output_file_path.display());
//! }
//! ```

mod error;
mod extract_config;
mod options;
mod sanitize;

pub use error::ConfigError;
pub use extract_config::{ExtractConfig, PlatformConfig};
pub use options::{
    ExploreOptions, ExtractOptions, ExtractTargetPlatformOptions, MergeOptions, ParseOptions,
};

use figment::{
    Figment,
    providers::{Format, Json, Serialized},
};
use std::path::Path;

impl ExtractConfig {
    /// Build the figment provider chain for the configuration file at `path`.
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Json::file(path))
    }

    /// Load the raw configuration file.
    ///
    /// Missing and empty files are reported before figment sees them.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let metadata = std::fs::metadata(path).map_err(|_| ConfigError::FileNotFound {
            path: path.to_path_buf(),
        })?;
        if !metadata.is_file() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        if metadata.len() == 0 {
            return Err(ConfigError::FileEmpty {
                path: path.to_path_buf(),
            });
        }

        Self::figment(path).extract().map_err(ConfigError::from)
    }
}

/// Load and sanitize the extract configuration at `path`.
pub fn load_extract_options(path: &Path) -> Result<ExtractOptions, ConfigError> {
    let path = sanitize::absolute(path);
    let config = ExtractConfig::load(&path)?;
    let base_directory = path.parent().unwrap_or_else(|| Path::new("."));
    config.sanitize(base_directory)
}
