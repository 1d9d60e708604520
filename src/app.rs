use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;

/// Resolved runtime context shared by every subcommand.
pub struct AppContext {
    pub config: Config,
    pub output_format: OutputFormat,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        let output_format = cli.output_format(&config);
        Ok(Self {
            config,
            output_format,
            verbosity: cli.verbose,
        })
    }
}
