use crate::components::date::ExpenseDate;
use crate::expense::Expense;
use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

/// Literal title shown after "Change Title" is pressed
pub const UPDATED_TITLE: &str = "Updated!";

/// Shown in place of a blank title
pub const UNTITLED: &str = "(untitled)";

/// What an expense row displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub date: ExpenseDate,
    pub title: String,
    pub amount: String,
}

/// One expense row.
///
/// Amount and date are props and stay as given. The title is local state,
/// seeded from the record and only ever changed by `change_title`. The edit is
/// never written back to the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseItem {
    title: String,
    amount: Decimal,
    date: NaiveDate,
}

impl ExpenseItem {
    pub fn new(expense: &Expense) -> Self {
        ExpenseItem {
            title: expense.title.clone(),
            amount: expense.amount,
            date: expense.date,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn change_title(&mut self) {
        self.title = UPDATED_TITLE.to_string();
        debug!("item title changed to {:?}", self.title);
    }

    pub fn view(&self) -> ItemView {
        let title = if self.title.trim().is_empty() {
            UNTITLED.to_string()
        } else {
            self.title.clone()
        };

        ItemView {
            date: ExpenseDate::new(self.date),
            title,
            amount: format!("${}", self.amount),
        }
    }
}
