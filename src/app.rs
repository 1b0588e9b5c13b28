// App - the parent that owns the expense array
//
// Children never mutate it directly: the list reads it, the new-expense
// container reports additions through a callback, and `add_expense` applies
// them here.

use crate::components::{
    ExpenseForm, ExpenseItem, Expenses, FormErrors, ItemView, ListView, NewExpense,
};
use crate::config::AppConfig;
use crate::expense::{seed_expenses, Expense, ExpenseError};
use log::{debug, info, warn};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    List,
    Form,
}

impl Pane {
    pub fn toggle(&self) -> Self {
        match self {
            Pane::List => Pane::Form,
            Pane::Form => Pane::List,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Pane::List => "Expenses",
            Pane::Form => "New Expense",
        }
    }
}

pub struct App {
    pub expenses: Vec<Expense>,
    pub list: Expenses,
    pub form: ExpenseForm,
    pub focus: Pane,
    /// Per-expense local item state, keyed by expense id
    items: HashMap<String, ExpenseItem>,
    selected: Option<usize>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, ExpenseError> {
        let expenses = if config.seed {
            seed_expenses()
        } else {
            Vec::new()
        };

        Self::with_expenses(expenses, config.default_year)
    }

    pub fn with_expenses(expenses: Vec<Expense>, year: i32) -> Result<Self, ExpenseError> {
        let list = Expenses::new(year)?;

        let mut items = HashMap::with_capacity(expenses.len());
        for expense in &expenses {
            if items
                .insert(expense.id.clone(), ExpenseItem::new(expense))
                .is_some()
            {
                return Err(ExpenseError::DuplicateId(expense.id.clone()));
            }
        }

        let mut app = App {
            expenses,
            list,
            form: ExpenseForm::new(),
            focus: Pane::List,
            items,
            selected: None,
        };
        app.reset_selection();

        debug!(
            "app started with {} expenses, year {}",
            app.expenses.len(),
            app.list.selected_year()
        );
        Ok(app)
    }

    /// Callback target for `NewExpense`. Ids must be unique within the list.
    pub fn add_expense(&mut self, expense: Expense) -> Result<(), ExpenseError> {
        if self.items.contains_key(&expense.id) {
            return Err(ExpenseError::DuplicateId(expense.id));
        }

        info!("adding expense {} to the list", expense.id);
        self.items
            .insert(expense.id.clone(), ExpenseItem::new(&expense));
        self.expenses.insert(0, expense);
        self.reset_selection();
        Ok(())
    }

    /// Submit the form; a valid draft flows through `NewExpense` back into
    /// `add_expense`
    pub fn submit_form(&mut self) -> Result<(), FormErrors> {
        let mut added = None;
        {
            let mut new_expense = NewExpense::new(|expense: Expense| added = Some(expense));
            self.form
                .submit(|draft| new_expense.save_expense_data(draft))?;
        }

        if let Some(expense) = added {
            if let Err(err) = self.add_expense(expense) {
                warn!("{}", err);
            }
        }
        Ok(())
    }

    pub fn visible(&self) -> Vec<&Expense> {
        self.list.visible(&self.expenses)
    }

    pub fn list_view(&self) -> ListView {
        self.list.view_with(&self.expenses, |e| self.item_view(e))
    }

    fn item_view(&self, expense: &Expense) -> ItemView {
        match self.items.get(&expense.id) {
            Some(item) => item.view(),
            None => ExpenseItem::new(expense).view(),
        }
    }

    pub fn select_year(&mut self, year: i32) -> Result<(), ExpenseError> {
        self.list.select_year(year)?;
        self.reset_selection();
        Ok(())
    }

    pub fn older_year(&mut self) -> Result<(), ExpenseError> {
        let year = self.list.filter().next();
        self.select_year(year)
    }

    pub fn newer_year(&mut self) -> Result<(), ExpenseError> {
        let year = self.list.filter().previous();
        self.select_year(year)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_expense(&self) -> Option<&Expense> {
        self.selected.and_then(|i| self.visible().get(i).copied())
    }

    /// "Change Title" on the highlighted row
    pub fn change_selected_title(&mut self) {
        let Some(id) = self.selected_expense().map(|e| e.id.clone()) else {
            return;
        };

        if let Some(item) = self.items.get_mut(&id) {
            item.change_title();
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    pub fn next(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    pub fn previous(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    fn reset_selection(&mut self) {
        self.selected = if self.visible().is_empty() {
            None
        } else {
            Some(0)
        };
    }
}
