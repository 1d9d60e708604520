//! CLI command implementations
//!
//! Each subcommand has its own module with an Args struct and a run()
//! function.

use clap::Subcommand;

pub mod boards;
pub mod hotlist;
pub mod synonyms;
pub mod xray;

use crate::app::AppContext;
use crate::error::Result;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Xray(args) => xray::run(ctx, args),
        Commands::Hotlist(args) => hotlist::run(ctx, args),
        Commands::Synonyms(args) => synonyms::run(ctx, args),
        Commands::Boards(args) => boards::run(ctx, args),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the full x-ray query set for a consultant profile
    Xray(xray::XrayArgs),

    /// Generate queries that surface vendor hotlists and mailing lists
    Hotlist(hotlist::HotlistArgs),

    /// Look up alternative titles for a role
    Synonyms(synonyms::SynonymsArgs),

    /// Direct search links into each job board's native interface
    Boards(boards::BoardsArgs),
}
