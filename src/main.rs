use anyhow::Result;
use clap::Parser;
use log::info;

use expense_tracker::{output, App, AppConfig, Cli, Commands, OutputFormat};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = AppConfig::from(&cli);
    let mut app = App::new(&config)?;
    info!("expense-tracker {} starting", expense_tracker::VERSION);

    match cli.command {
        Some(Commands::List { .. }) => run_list(&app, config.format),
        Some(Commands::Ui) | None => run_ui_mode(&mut app),
    }
}

fn run_list(app: &App, format: OutputFormat) -> Result<()> {
    print!("{}", output::render(app, format)?);
    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(app: &mut App) -> Result<()> {
    expense_tracker::ui::run_ui(app)?;

    if let Some(first) = app.expenses.first() {
        info!("session closed, latest expense: {}", first.title);
    }

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(app: &mut App) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or print the list: expense-tracker list");
    run_list(app, OutputFormat::Plain)
}
