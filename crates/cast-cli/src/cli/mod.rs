use clap::Parser;

pub mod root_commands;

pub use root_commands::{Commands, ExtractArgs, MergeArgs, SchemaArgs, SchemaDocument};

/// Top-level CLI parser for the `castffi` binary.
#[derive(Debug, Parser)]
#[command(
    name = "castffi",
    version,
    about = "Extract the FFI surface of a C header per platform and merge it across platforms"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (warnings and errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}
