//! Compiler arguments for header and macro-program parses.

use std::path::PathBuf;

use cast_config::ParseOptions;
use cast_core::{OperatingSystem, TargetPlatform};

/// Source language of a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    C,
    /// Used for the macro program so that `auto` deduces each macro's type.
    Cpp,
}

/// Builds the argument list passed to the front end.
#[derive(Debug, Clone)]
pub struct ArgumentsBuilder<'a> {
    target_platform: &'a TargetPlatform,
    options: &'a ParseOptions,
    system_include_directories: &'a [PathBuf],
    framework_directories: &'a [PathBuf],
}

impl<'a> ArgumentsBuilder<'a> {
    pub const fn new(
        target_platform: &'a TargetPlatform,
        options: &'a ParseOptions,
        system_include_directories: &'a [PathBuf],
        framework_directories: &'a [PathBuf],
    ) -> Self {
        Self {
            target_platform,
            options,
            system_include_directories,
            framework_directories,
        }
    }

    #[must_use]
    pub fn build(&self, language: Language, ignore_warnings: bool) -> Vec<String> {
        let gnu = self.target_platform.operating_system() == OperatingSystem::Linux;
        let (language_argument, standard) = match (language, gnu) {
            (Language::C, false) => ("--language=c", "--std=c11"),
            (Language::C, true) => ("--language=c", "--std=gnu11"),
            (Language::Cpp, false) => ("--language=c++", "--std=c++11"),
            (Language::Cpp, true) => ("--language=c++", "--std=gnu++11"),
        };

        let mut arguments = vec![
            language_argument.to_string(),
            standard.to_string(),
            "-fblocks".to_string(),
            "-Wno-pragma-once-outside-header".to_string(),
            "-fparse-all-comments".to_string(),
        ];

        if ignore_warnings {
            arguments.push("-Wno-everything".to_string());
        }

        arguments.extend(
            self.options
                .user_include_directories
                .iter()
                .map(|dir| format!("--include-directory={}", dir.display())),
        );
        arguments.extend(
            self.options
                .macro_object_defines
                .iter()
                .map(|define| format!("--define-macro={define}")),
        );
        arguments.push(format!("--target={}", self.target_platform));
        arguments.extend(self.options.additional_arguments.iter().cloned());
        arguments.extend(
            self.options
                .system_include_directories
                .iter()
                .chain(self.system_include_directories)
                .map(|dir| format!("-isystem{}", dir.display())),
        );
        arguments.extend(
            self.framework_directories
                .iter()
                .map(|dir| format!("-F{}", dir.display())),
        );

        arguments
    }
}
