use crate::config::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "expense-tracker")]
#[command(about = "Track personal expenses by year", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Year selected when the list first renders
    #[arg(long, global = true)]
    pub year: Option<i32>,

    /// Start without the demo expenses
    #[arg(long, global = true)]
    pub empty: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive terminal view (default)
    Ui,

    /// Print the expenses of the selected year
    List {
        #[arg(long, value_enum, default_value_t = FormatArg::Plain)]
        format: FormatArg,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Plain,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
