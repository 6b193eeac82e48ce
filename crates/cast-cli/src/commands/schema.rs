use cast_core::{AbstractSyntaxTreeCrossPlatform, AbstractSyntaxTreeTargetPlatform};
use schemars::schema_for;

use crate::cli::{SchemaArgs, SchemaDocument};

/// Handle `castffi schema`.
pub fn handle(args: &SchemaArgs) -> anyhow::Result<()> {
    let schema = match args.document {
        SchemaDocument::Target => schema_for!(AbstractSyntaxTreeTargetPlatform),
        SchemaDocument::Cross => schema_for!(AbstractSyntaxTreeCrossPlatform),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
