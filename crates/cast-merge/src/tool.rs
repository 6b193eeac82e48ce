//! The merge tool: read every input file, merge, write one document.

use cast_config::MergeOptions;
use cast_core::io::{read_target_platform_ast, write_ast};
use tracing::{info, info_span, warn};

use crate::engine::merge;
use crate::error::MergeError;
use crate::report::MergeReport;

/// Merge the inputs of `options` and write the cross-platform AST.
///
/// Inputs that cannot be read are logged and skipped.
///
/// # Errors
///
/// Returns [`MergeError::NoPlatforms`] when no input contributes a platform,
/// or [`MergeError::Output`] when the result cannot be written.
pub fn run(options: &MergeOptions) -> Result<MergeReport, MergeError> {
    let _span = info_span!("merge", output = %options.output_file_path.display()).entered();

    let mut asts = Vec::with_capacity(options.input_file_paths.len());
    let mut skipped_inputs = Vec::new();
    for path in &options.input_file_paths {
        match read_target_platform_ast(path) {
            Ok(ast) => {
                info!(path = %path.display(), platform = %ast.platform_requested, "merge: loaded");
                asts.push(ast);
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "merge: skipping unreadable input");
                skipped_inputs.push(path.clone());
            }
        }
    }

    let mut outcome = merge(asts);
    if outcome.ast.platforms.is_empty() {
        return Err(MergeError::NoPlatforms {
            inputs: options.input_file_paths.len(),
        });
    }

    write_ast(&options.output_file_path, &outcome.ast)?;
    outcome.report.skipped_inputs = skipped_inputs;
    info!(
        path = %options.output_file_path.display(),
        summary = %outcome.report,
        "merge: wrote cross-platform abstract syntax tree"
    );
    Ok(outcome.report)
}
