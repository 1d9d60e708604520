//! bx xray - Generate the full x-ray query set

use clap::Args;

use crate::app::AppContext;
use crate::cli::OutputFormat;
use crate::cli::output;
use crate::error::Result;
use crate::search::{QueryCategory, SearchParams, XRaySearchEngine};

#[derive(Args, Debug)]
pub struct XrayArgs {
    /// Consultant job title, e.g. "Java Developer"
    #[arg(long, short)]
    pub title: String,

    /// Primary skill, repeatable; order controls query density
    #[arg(long = "skill", short)]
    pub skills: Vec<String>,

    /// Target location, e.g. "Dallas, TX"
    #[arg(long, short)]
    pub location: Option<String>,

    /// Visa status filter, e.g. "H1B"
    #[arg(long)]
    pub visa: Option<String>,

    /// Only print queries in this category
    #[arg(long)]
    pub category: Option<String>,
}

pub fn run(ctx: &AppContext, args: &XrayArgs) -> Result<()> {
    let params = build_params(ctx, args);
    let engine = XRaySearchEngine::new();
    let mut queries = engine.generate_all_queries(&params);

    if let Some(raw) = &args.category {
        let category: QueryCategory = raw.parse()?;
        queries.retain(|q| q.category == category);
    }

    match ctx.output_format {
        OutputFormat::Json => output::emit_robot(&output::robot_ok(&queries)),
        OutputFormat::Human => {
            let heading = format!("X-ray queries: {}", args.title);
            println!("{}", output::query_list(&heading, &queries));
            Ok(())
        }
    }
}

fn build_params(ctx: &AppContext, args: &XrayArgs) -> SearchParams {
    let defaults = &ctx.config.defaults;
    SearchParams::new(&args.title)
        .with_primary_skills(args.skills.clone())
        .with_location(
            args.location
                .clone()
                .unwrap_or_else(|| defaults.location.clone()),
        )
        .with_visa_status(
            args.visa
                .clone()
                .unwrap_or_else(|| defaults.visa_status.clone()),
        )
        .with_remote_ok(defaults.remote_ok)
        .with_employment_types(defaults.employment_types.clone())
}
