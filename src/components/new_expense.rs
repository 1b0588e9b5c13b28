use crate::expense::{Expense, ExpenseDraft};
use log::info;

/// Container around the expense form. Turns a submitted draft into an
/// `Expense` with a fresh id and reports it to the parent. Never touches the
/// parent's list itself.
pub struct NewExpense<F>
where
    F: FnMut(Expense),
{
    on_display_expense_data: F,
}

impl<F> NewExpense<F>
where
    F: FnMut(Expense),
{
    pub fn new(on_display_expense_data: F) -> Self {
        NewExpense {
            on_display_expense_data,
        }
    }

    pub fn save_expense_data(&mut self, entered_expense_data: ExpenseDraft) {
        let expense = Expense::from_draft(entered_expense_data);
        info!("new expense {} ({})", expense.id, expense.title);
        (self.on_display_expense_data)(expense);
    }
}
