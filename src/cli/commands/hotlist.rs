//! bx hotlist - Surface vendor hotlists and mailing lists

use clap::Args;

use crate::app::AppContext;
use crate::cli::OutputFormat;
use crate::cli::output;
use crate::error::Result;
use crate::search::{SearchParams, XRaySearchEngine};

#[derive(Args, Debug)]
pub struct HotlistArgs {
    /// Consultant job title
    #[arg(long, short)]
    pub title: String,

    /// Primary skill, repeatable
    #[arg(long = "skill", short)]
    pub skills: Vec<String>,
}

pub fn run(ctx: &AppContext, args: &HotlistArgs) -> Result<()> {
    let params = SearchParams::new(&args.title).with_primary_skills(args.skills.clone());
    let queries = XRaySearchEngine::new().generate_hotlist_queries(&params);

    match ctx.output_format {
        OutputFormat::Json => output::emit_robot(&output::robot_ok(&queries)),
        OutputFormat::Human => {
            let heading = format!("Hotlist queries: {}", args.title);
            println!("{}", output::query_list(&heading, &queries));
            Ok(())
        }
    }
}
