use anyhow::Context;
use cast_config::MergeOptions;

use crate::cli::MergeArgs;

/// Handle `castffi merge`.
pub fn handle(args: &MergeArgs) -> anyhow::Result<()> {
    let options = MergeOptions::from_directory(&args.input_directory, &args.output_file)
        .context("invalid merge options")?;
    let report = cast_merge::run(&options).context("merge failed")?;

    println!("{}\t{report}", options.output_file_path.display());
    Ok(())
}
