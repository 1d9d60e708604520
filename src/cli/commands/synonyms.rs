//! bx synonyms - Alternative titles for a role

use clap::Args;

use crate::app::AppContext;
use crate::cli::OutputFormat;
use crate::cli::output;
use crate::error::Result;
use crate::search::XRaySearchEngine;

#[derive(Args, Debug)]
pub struct SynonymsArgs {
    /// Role title to look up, e.g. "java developer"
    pub title: String,
}

pub fn run(ctx: &AppContext, args: &SynonymsArgs) -> Result<()> {
    let synonyms = XRaySearchEngine::new().get_role_synonyms(&args.title);

    match ctx.output_format {
        OutputFormat::Json => output::emit_robot(&output::robot_ok(&synonyms)),
        OutputFormat::Human => {
            println!("{}", output::synonym_list(&args.title, &synonyms));
            Ok(())
        }
    }
}
