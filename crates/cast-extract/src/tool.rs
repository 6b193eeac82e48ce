//! The extract tool: one AST file per requested target platform.

use std::fmt;
use std::path::PathBuf;

use cast_config::ExtractOptions;
use cast_core::{TargetPlatform, io::write_ast};
use cast_frontend::FrontEnd;
use tracing::{error, info, warn};

use crate::error::ExtractError;
use crate::explore::Explorer;

/// What happens to the remaining platforms after one fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the failure and go on with the next platform.
    #[default]
    Continue,
    /// Skip every remaining platform.
    Stop,
}

/// Outcome of one extract run.
#[derive(Debug, Default)]
pub struct ExtractSummary {
    /// Platforms whose AST was written, with the output path.
    pub succeeded: Vec<(TargetPlatform, PathBuf)>,
    pub failed: Vec<(TargetPlatform, ExtractError)>,
    /// Platforms not attempted because of [`FailurePolicy::Stop`].
    pub skipped: Vec<TargetPlatform>,
}

impl ExtractSummary {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }
}

impl fmt::Display for ExtractSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} succeeded, {} failed, {} skipped",
            self.succeeded.len(),
            self.failed.len(),
            self.skipped.len()
        )
    }
}

/// Extracts ASTs with a front end.
pub struct ExtractTool<'f, F: FrontEnd> {
    explorer: Explorer<'f, F>,
    policy: FailurePolicy,
}

impl<'f, F: FrontEnd> ExtractTool<'f, F> {
    pub const fn new(front_end: &'f F, policy: FailurePolicy) -> Self {
        Self {
            explorer: Explorer::new(front_end),
            policy,
        }
    }

    /// Explore and write every platform of `options`, in order.
    pub fn run(&self, options: &ExtractOptions) -> ExtractSummary {
        let mut summary = ExtractSummary::default();

        for (index, platform) in options.platforms.iter().enumerate() {
            let result = self
                .explorer
                .abstract_syntax_tree(
                    &options.input_file_path,
                    &platform.target_platform,
                    &platform.explore,
                    &platform.parse,
                )
                .and_then(|ast| write_ast(&platform.output_file_path, &ast).map_err(ExtractError::from));

            match result {
                Ok(()) => {
                    info!(
                        platform = %platform.target_platform,
                        path = %platform.output_file_path.display(),
                        "extract: wrote abstract syntax tree"
                    );
                    summary
                        .succeeded
                        .push((platform.target_platform.clone(), platform.output_file_path.clone()));
                }
                Err(error) => {
                    error!(platform = %platform.target_platform, %error, "extract: platform failed");
                    summary.failed.push((platform.target_platform.clone(), error));
                    if self.policy == FailurePolicy::Stop {
                        summary.skipped.extend(
                            options.platforms[index + 1..]
                                .iter()
                                .map(|rest| rest.target_platform.clone()),
                        );
                        break;
                    }
                }
            }
        }

        if summary.is_success() {
            info!(%summary, "extract: finished");
        } else {
            warn!(%summary, "extract: finished with failures");
        }
        summary
    }
}
