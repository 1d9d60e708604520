//! bx boards - Direct links into each board's native search

use clap::Args;

use crate::app::AppContext;
use crate::cli::OutputFormat;
use crate::cli::output;
use crate::error::Result;
use crate::search::all_boards;

#[derive(Args, Debug)]
pub struct BoardsArgs {
    /// Consultant job title
    #[arg(long, short)]
    pub title: String,

    /// Target location; boards with a location default fall back to
    /// "United States"
    #[arg(long, short)]
    pub location: Option<String>,
}

pub fn run(ctx: &AppContext, args: &BoardsArgs) -> Result<()> {
    let location = args
        .location
        .clone()
        .unwrap_or_else(|| ctx.config.defaults.location.clone());
    let links = all_boards(&args.title, &location);

    match ctx.output_format {
        OutputFormat::Json => output::emit_robot(&output::robot_ok(&links)),
        OutputFormat::Human => {
            let heading = format!("Job board searches: {}", args.title);
            println!("{}", output::board_list(&heading, &links));
            Ok(())
        }
    }
}
