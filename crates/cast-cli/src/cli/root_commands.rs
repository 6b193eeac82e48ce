use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Extract one AST file per target platform of the configuration.
    Extract(ExtractArgs),
    /// Merge per-platform AST files into one cross-platform AST.
    Merge(MergeArgs),
    /// Print the JSON Schema of an AST document.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ExtractArgs {
    /// Extract configuration file (JSON)
    #[arg(short, long)]
    pub config: PathBuf,

    /// libclang shared library, or a directory containing it
    #[arg(long)]
    pub clang_library: Option<PathBuf>,

    /// Skip the remaining platforms after the first failure
    #[arg(long)]
    pub stop_on_failure: bool,
}

#[derive(Clone, Debug, Args)]
pub struct MergeArgs {
    /// Directory holding the per-platform AST files
    #[arg(short, long)]
    pub input_directory: PathBuf,

    /// Path of the cross-platform AST file to write
    #[arg(short, long)]
    pub output_file: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum, default_value_t = SchemaDocument::Target)]
    pub document: SchemaDocument,
}

/// Which AST document to describe.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaDocument {
    /// Per-platform AST
    Target,
    /// Cross-platform AST
    Cross,
}
