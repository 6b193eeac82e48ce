//! Turning a raw [`ExtractConfig`] into [`ExtractOptions`].

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use cast_core::{OperatingSystem, TargetPlatform};
use globset::Glob;

use crate::error::ConfigError;
use crate::extract_config::{ExtractConfig, PlatformConfig};
use crate::options::{
    ExploreOptions, ExtractOptions, ExtractTargetPlatformOptions, MergeOptions, ParseOptions,
};

impl ExtractConfig {
    /// Resolve every path against `base_directory` (the configuration file's
    /// directory), validate it, and expand the platforms of the current host.
    pub fn sanitize(self, base_directory: &Path) -> Result<ExtractOptions, ConfigError> {
        self.sanitize_for_host(base_directory, OperatingSystem::host(), &TargetPlatform::host())
    }

    /// Like [`ExtractConfig::sanitize`], for an explicit host.
    pub fn sanitize_for_host(
        mut self,
        base_directory: &Path,
        host_os: OperatingSystem,
        host_platform: &TargetPlatform,
    ) -> Result<ExtractOptions, ConfigError> {
        if self.input_file_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "inputFilePath".to_string(),
                reason: "a C header path is required".to_string(),
            });
        }

        let input_file_path = resolve(base_directory, &self.input_file_path);
        if !input_file_path.is_file() {
            return Err(ConfigError::InputFileNotFound {
                path: input_file_path,
            });
        }

        let platforms = self.host_platforms(host_os, host_platform)?;
        let output_directory = resolve(base_directory, &self.output_directory);

        let mut options = Vec::with_capacity(platforms.len());
        for (triple, platform) in platforms {
            let target_platform = TargetPlatform::new(triple.as_str());
            if target_platform.is_unknown() {
                return Err(ConfigError::InvalidTargetPlatform { triple });
            }

            let output_file_path = output_directory.join(format!("{target_platform}.json"));
            let (explore, parse) = self.platform_options(base_directory, &input_file_path, &platform)?;
            options.push(ExtractTargetPlatformOptions {
                target_platform,
                output_file_path,
                explore,
                parse,
            });
        }

        Ok(ExtractOptions {
            input_file_path,
            platforms: options,
        })
    }

    fn host_platforms(
        &mut self,
        host_os: OperatingSystem,
        host_platform: &TargetPlatform,
    ) -> Result<BTreeMap<String, PlatformConfig>, ConfigError> {
        if self.target_platforms.is_empty() {
            let mut platforms = BTreeMap::new();
            platforms.insert(host_platform.triple().to_string(), PlatformConfig::default());
            return Ok(platforms);
        }

        let key = self
            .target_platforms
            .keys()
            .find(|key| key.eq_ignore_ascii_case(host_os.as_str()))
            .cloned()
            .ok_or_else(|| ConfigError::HostPlatformMissing {
                os: host_os.to_string(),
            })?;

        Ok(self.target_platforms.remove(&key).unwrap_or_default())
    }

    fn platform_options(
        &self,
        base_directory: &Path,
        input_file_path: &Path,
        platform: &PlatformConfig,
    ) -> Result<(ExploreOptions, ParseOptions), ConfigError> {
        let mut user_include_directories = existing_directories(
            base_directory,
            self.user_include_directories
                .iter()
                .chain(&platform.user_include_directories),
            "user include",
        )?;
        if user_include_directories.is_empty() {
            if let Some(parent) = input_file_path.parent() {
                user_include_directories.push(parent.to_path_buf());
            }
        }

        let system_include_directories = existing_directories(
            base_directory,
            self.system_include_directories
                .iter()
                .chain(&platform.system_include_directories),
            "system include",
        )?;

        let ignored_include_directories = self
            .ignored_include_directories
            .iter()
            .chain(&platform.ignored_include_directories)
            .map(|dir| resolve(base_directory, dir))
            .collect();

        let ignored_macro_patterns: Vec<String> = self
            .ignored_macro_patterns
            .iter()
            .chain(&platform.ignored_macro_patterns)
            .cloned()
            .collect();
        for pattern in &ignored_macro_patterns {
            Glob::new(pattern).map_err(|error| ConfigError::InvalidValue {
                field: "ignoredMacroPatterns".to_string(),
                reason: error.to_string(),
            })?;
        }

        let explore = ExploreOptions {
            user_include_directories: user_include_directories.clone(),
            ignored_include_directories,
            opaque_type_names: self
                .opaque_type_names
                .iter()
                .chain(&platform.opaque_type_names)
                .cloned()
                .collect(),
            ignored_macro_patterns,
            is_enabled_location_full_paths: self.is_enabled_location_full_paths,
            is_enabled_allow_names_with_prefixed_underscore: self
                .is_enabled_allow_names_with_prefixed_underscore,
            is_enabled_system_declarations: self.is_enabled_system_declarations,
            is_enabled_only_external_top_level_cursors: self
                .is_enabled_only_external_top_level_cursors,
            is_enabled_single_header: self.is_enabled_parse_as_single_header,
        };

        let parse = ParseOptions {
            user_include_directories,
            system_include_directories,
            macro_object_defines: platform.defines.clone(),
            additional_arguments: platform.clang_arguments.clone(),
            apple_frameworks: self
                .apple_frameworks
                .iter()
                .chain(&platform.apple_frameworks)
                .cloned()
                .collect(),
            is_enabled_find_system_headers: self.is_enabled_automatically_find_system_headers,
            is_enabled_system_declarations: self.is_enabled_system_declarations,
            is_enabled_skip_function_bodies: self.is_enabled_skip_function_bodies,
        };

        Ok((explore, parse))
    }
}

impl MergeOptions {
    /// Collect every `*.json` file of `input_directory`, sorted by file name.
    pub fn from_directory(
        input_directory: &Path,
        output_file_path: &Path,
    ) -> Result<Self, ConfigError> {
        let input_directory = absolute(input_directory);
        if !input_directory.is_dir() {
            return Err(ConfigError::DirectoryNotFound {
                role: "input",
                path: input_directory,
            });
        }

        let entries = std::fs::read_dir(&input_directory).map_err(|error| {
            ConfigError::InvalidValue {
                field: "inputDirectory".to_string(),
                reason: error.to_string(),
            }
        })?;

        let mut input_file_paths: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
            })
            .collect();
        input_file_paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        Ok(Self {
            input_file_paths,
            output_file_path: absolute(output_file_path),
        })
    }
}

fn existing_directories<'a>(
    base_directory: &Path,
    directories: impl Iterator<Item = &'a String>,
    role: &'static str,
) -> Result<Vec<PathBuf>, ConfigError> {
    let mut resolved = Vec::new();
    for directory in directories {
        let path = resolve(base_directory, directory);
        if !path.is_dir() {
            return Err(ConfigError::DirectoryNotFound { role, path });
        }
        if !resolved.contains(&path) {
            resolved.push(path);
        }
    }
    Ok(resolved)
}

/// Join `path` onto `base` unless it is absolute, then normalize lexically.
pub(crate) fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path.trim());
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };
    normalize(&joined)
}

pub(crate) fn absolute(path: &Path) -> PathBuf {
    normalize(&std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()))
}

/// Remove `.` components and fold `..` into the preceding component.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
