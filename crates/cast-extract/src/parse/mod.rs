//! Parse glue between the extract tool and the compiler front end.
//!
//! Three kinds of parse happen during one platform's extraction:
//! - the input header itself, where any error diagnostic aborts the platform
//! - every followed `#include`, parsed best-effort with diagnostics ignored
//! - the synthesized macro program, parsed as C++ best-effort

pub mod arguments;
pub mod system_includes;

use std::path::{Path, PathBuf};

use cast_config::ParseOptions;
use cast_core::TargetPlatform;
use cast_frontend::{DiagnosticSeverity, FrontEnd, ParseFlags, ParseRequest, TranslationUnit};
use tracing::{debug, error, info, warn};

use crate::error::ExtractError;
use arguments::{ArgumentsBuilder, Language};
use system_includes::SystemIncludes;

/// How diagnostics of a parse are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DiagnosticsMode {
    /// Any error or fatal diagnostic fails the parse.
    Strict,
    /// Keep going past errors and do not inspect diagnostics.
    Ignore,
}

/// Parses files for one target platform.
pub struct Parser<'a, F: FrontEnd> {
    front_end: &'a F,
    target_platform: &'a TargetPlatform,
    options: &'a ParseOptions,
    system_includes: SystemIncludes,
}

impl<'a, F: FrontEnd> Parser<'a, F> {
    /// Create a parser. System include discovery runs once here when enabled.
    pub fn new(front_end: &'a F, target_platform: &'a TargetPlatform, options: &'a ParseOptions) -> Self {
        let system_includes = if options.is_enabled_find_system_headers {
            system_includes::discover(target_platform, &options.apple_frameworks)
        } else {
            SystemIncludes::default()
        };

        Self {
            front_end,
            target_platform,
            options,
            system_includes,
        }
    }

    pub const fn target_platform(&self) -> &TargetPlatform {
        self.target_platform
    }

    /// Parse the input header. Error diagnostics fail the parse.
    pub fn parse_header(&self, path: &Path) -> Result<F::Unit, ExtractError> {
        self.parse(path, Language::C, DiagnosticsMode::Strict)
    }

    /// Parse a followed include, ignoring its diagnostics.
    pub fn parse_include(&self, path: &Path) -> Result<F::Unit, ExtractError> {
        self.parse(path, Language::C, DiagnosticsMode::Ignore)
    }

    /// Parse the synthesized macro program as C++.
    pub fn parse_macro_program(&self, path: &Path) -> Result<F::Unit, ExtractError> {
        self.parse(path, Language::Cpp, DiagnosticsMode::Ignore)
    }

    /// The argument list used for a parse in `language`.
    pub fn arguments(&self, language: Language, ignore_warnings: bool) -> Vec<String> {
        ArgumentsBuilder::new(
            self.target_platform,
            self.options,
            &self.system_includes.include_directories,
            &self.system_includes.framework_directories,
        )
        .build(language, ignore_warnings)
    }

    fn parse(&self, path: &Path, language: Language, mode: DiagnosticsMode) -> Result<F::Unit, ExtractError> {
        let arguments = self.arguments(language, mode == DiagnosticsMode::Ignore);
        let request = ParseRequest {
            file_path: path,
            arguments: &arguments,
            flags: ParseFlags {
                skip_function_bodies: self.options.is_enabled_skip_function_bodies,
                keep_going: mode == DiagnosticsMode::Ignore,
            },
        };

        debug!(path = %path.display(), arguments = %arguments.join(" "), "parse: start");
        let unit = self.front_end.parse(&request).map_err(|err| {
            error!(path = %path.display(), arguments = %arguments.join(" "), error = %err, "parse: front end failed");
            ExtractError::from(err)
        })?;

        if mode == DiagnosticsMode::Strict {
            check_diagnostics(&unit, path, &arguments)?;
        }

        info!(path = %path.display(), "parse: success");
        Ok(unit)
    }
}

/// Log every diagnostic and fail when any of them is an error.
fn check_diagnostics<U: TranslationUnit>(unit: &U, path: &Path, arguments: &[String]) -> Result<(), ExtractError> {
    let mut messages = Vec::new();
    for diagnostic in unit.diagnostics() {
        match diagnostic.severity {
            DiagnosticSeverity::Error | DiagnosticSeverity::Fatal => {
                error!(path = %path.display(), message = %diagnostic.message, "parse: diagnostic");
                messages.push(diagnostic.message);
            }
            DiagnosticSeverity::Warning => {
                warn!(path = %path.display(), message = %diagnostic.message, "parse: diagnostic");
            }
            DiagnosticSeverity::Note | DiagnosticSeverity::Ignored => {
                debug!(path = %path.display(), message = %diagnostic.message, "parse: diagnostic");
            }
        }
    }

    if messages.is_empty() {
        Ok(())
    } else {
        error!(path = %path.display(), arguments = %arguments.join(" "), "parse: failed with error diagnostics");
        Err(ExtractError::Diagnostics {
            path: PathBuf::from(path),
            arguments: arguments.to_vec(),
            messages,
        })
    }
}
