// Components - state and view logic for each piece of the expense screen
//
// Data flows down as immutable input; events flow back up through callbacks.
// Each component owns only the state it declares.

pub mod date;
pub mod item;
pub mod filter;
pub mod list;
pub mod form;
pub mod new_expense;

pub use date::ExpenseDate;
pub use item::{ExpenseItem, ItemView};
pub use filter::{ExpensesFilter, FILTER_YEARS};
pub use list::{Expenses, ListView, EMPTY_STATE};
pub use form::{ExpenseForm, FormErrors, FormField};
pub use new_expense::NewExpense;
