//! Command-line interface

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

pub use commands::Commands;

#[derive(Parser, Debug)]
#[command(
    name = "bx",
    version,
    about = "Generate C2C x-ray search queries and job board links for bench sales sourcing"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Explicit config file path (falls back to BX_CONFIG, then the global file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl Cli {
    /// The `--robot` flag wins over the configured format.
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        if self.robot || config.output.format == "json" {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn robot_flag_forces_json() {
        let cli = Cli::parse_from(["bx", "--robot", "synonyms", "java developer"]);
        assert_eq!(cli.output_format(&Config::default()), OutputFormat::Json);
    }

    #[test]
    fn config_format_applies_without_robot() {
        let cli = Cli::parse_from(["bx", "synonyms", "java developer"]);
        let mut config = Config::default();
        assert_eq!(cli.output_format(&config), OutputFormat::Human);
        config.output.format = "json".to_string();
        assert_eq!(cli.output_format(&config), OutputFormat::Json);
    }
}
