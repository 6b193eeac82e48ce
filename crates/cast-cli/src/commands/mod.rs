use crate::cli::Commands;

mod extract;
mod merge;
mod schema;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: &Commands) -> anyhow::Result<()> {
    match command {
        Commands::Extract(args) => extract::handle(args),
        Commands::Merge(args) => merge::handle(args),
        Commands::Schema(args) => schema::handle(args),
    }
}
