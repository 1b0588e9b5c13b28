use crate::components::filter::ExpensesFilter;
use crate::components::item::{ExpenseItem, ItemView};
use crate::expense::{Expense, ExpenseError};
use log::debug;

/// Rendered when the selected year has no expenses
pub const EMPTY_STATE: &str = "Found no expenses.";

/// Default selected year
pub const DEFAULT_YEAR: i32 = 2023;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub selected_year: i32,
    pub content: ListContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent {
    Items(Vec<ItemView>),
    Empty(&'static str),
}

impl ListView {
    pub fn items(&self) -> &[ItemView] {
        match &self.content {
            ListContent::Items(items) => items,
            ListContent::Empty(_) => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.content, ListContent::Empty(_))
    }
}

/// The expense list. Owns the selected year; the expenses themselves are
/// passed in by the parent on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expenses {
    filtered_year: i32,
}

impl Default for Expenses {
    fn default() -> Self {
        Expenses {
            filtered_year: DEFAULT_YEAR,
        }
    }
}

impl Expenses {
    pub fn new(initial_year: i32) -> Result<Self, ExpenseError> {
        if !ExpensesFilter::is_offered(initial_year) {
            return Err(ExpenseError::UnknownYear(initial_year));
        }

        Ok(Expenses {
            filtered_year: initial_year,
        })
    }

    pub fn selected_year(&self) -> i32 {
        self.filtered_year
    }

    /// The filter child, fed the current year as its prop
    pub fn filter(&self) -> ExpensesFilter {
        ExpensesFilter::new(self.filtered_year)
    }

    /// Callback handed to the filter
    pub fn expenses_year_filter_change(&mut self, selected_year: i32) {
        debug!(
            "selected year {} -> {}",
            self.filtered_year, selected_year
        );
        self.filtered_year = selected_year;
    }

    /// Ask the filter for `year` and apply whatever it reports
    pub fn select_year(&mut self, year: i32) -> Result<(), ExpenseError> {
        let filter = self.filter();
        filter.choose(year, |y| self.expenses_year_filter_change(y))
    }

    /// Expenses dated in the selected year, in source order
    pub fn visible<'a>(&self, items: &'a [Expense]) -> Vec<&'a Expense> {
        items
            .iter()
            .filter(|e| e.year() == self.filtered_year)
            .collect()
    }

    /// Render with the given per-item view (lets the parent supply items
    /// carrying local state)
    pub fn view_with<F>(&self, items: &[Expense], item_view: F) -> ListView
    where
        F: Fn(&Expense) -> ItemView,
    {
        let visible = self.visible(items);

        let content = if visible.is_empty() {
            ListContent::Empty(EMPTY_STATE)
        } else {
            ListContent::Items(visible.into_iter().map(item_view).collect())
        };

        ListView {
            selected_year: self.filtered_year,
            content,
        }
    }

    pub fn view(&self, items: &[Expense]) -> ListView {
        self.view_with(items, |e| ExpenseItem::new(e).view())
    }
}
