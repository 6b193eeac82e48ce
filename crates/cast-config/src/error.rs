//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// The configuration file does not exist.
    #[error("The options file '{}' does not exist", path.display())]
    FileNotFound { path: PathBuf },

    /// The configuration file exists but has no content.
    #[error("The options file '{}' is empty", path.display())]
    FileEmpty { path: PathBuf },

    /// The C header named by `inputFilePath` does not exist.
    #[error("The input file '{}' does not exist", path.display())]
    InputFileNotFound { path: PathBuf },

    /// An include directory named in the configuration does not exist.
    #[error("The {role} directory '{}' does not exist", path.display())]
    DirectoryNotFound { role: &'static str, path: PathBuf },

    /// `targetPlatforms` has no entry for the operating system running the tool.
    #[error("The current operating system '{os}' was not specified in targetPlatforms")]
    HostPlatformMissing { os: String },

    /// A target triple could not be recognized.
    #[error("Unrecognized target platform '{triple}'")]
    InvalidTargetPlatform { triple: String },

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
