use crate::cli::{Cli, Commands};
use crate::components::list::DEFAULT_YEAR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// Runtime settings, resolved from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Year the list starts on
    pub default_year: i32,
    /// Start with the four demo expenses
    pub seed: bool,
    /// How `list` prints
    pub format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            default_year: DEFAULT_YEAR,
            seed: true,
            format: OutputFormat::Plain,
        }
    }
}

impl From<&Cli> for AppConfig {
    fn from(cli: &Cli) -> Self {
        let defaults = AppConfig::default();
        AppConfig {
            default_year: cli.year.unwrap_or(defaults.default_year),
            seed: !cli.empty,
            format: match &cli.command {
                Some(Commands::List { format }) => (*format).into(),
                _ => defaults.format,
            },
        }
    }
}
