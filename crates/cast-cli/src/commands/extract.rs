use anyhow::{Context, bail};
use cast_extract::{ExtractTool, FailurePolicy};
use cast_frontend::ClangFrontEnd;

use crate::cli::ExtractArgs;

/// Handle `castffi extract`.
pub fn handle(args: &ExtractArgs) -> anyhow::Result<()> {
    let options = cast_config::load_extract_options(&args.config)
        .with_context(|| format!("failed to load extract configuration '{}'", args.config.display()))?;
    let front_end = ClangFrontEnd::new(args.clang_library.as_deref()).context("failed to load libclang")?;

    let policy = if args.stop_on_failure {
        FailurePolicy::Stop
    } else {
        FailurePolicy::Continue
    };
    let summary = ExtractTool::new(&front_end, policy).run(&options);

    for (platform, path) in &summary.succeeded {
        println!("{platform}\t{}", path.display());
    }
    for (platform, error) in &summary.failed {
        eprintln!("{platform}\tfailed: {error}");
    }
    if !summary.is_success() {
        bail!("extract finished with failures: {summary}");
    }
    Ok(())
}
