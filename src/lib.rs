// Expense Tracker - Core Library
// Exposes component state and logic for the CLI, the terminal UI and tests

pub mod expense;
pub mod components;
pub mod app;
pub mod config;
pub mod cli;
pub mod output;

// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use expense::{Expense, ExpenseDraft, ExpenseError, seed_expenses};
pub use components::{
    ExpenseDate, ExpenseItem, ItemView,
    ExpensesFilter, FILTER_YEARS,
    Expenses, ListView, EMPTY_STATE,
    ExpenseForm, FormErrors, FormField,
    NewExpense,
};
pub use app::{App, Pane};
pub use config::{AppConfig, OutputFormat};
pub use cli::{Cli, Commands};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
