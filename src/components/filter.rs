use crate::expense::ExpenseError;
use log::{debug, warn};

/// Years offered by the filter, newest first
pub const FILTER_YEARS: [i32; 5] = [2023, 2022, 2021, 2020, 2019];

/// Year picker. The selected year is a prop owned by the list; a choice is
/// reported back through the `on_change` callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpensesFilter {
    selected: i32,
}

impl ExpensesFilter {
    pub fn new(selected: i32) -> Self {
        ExpensesFilter { selected }
    }

    pub fn selected(&self) -> i32 {
        self.selected
    }

    pub fn options(&self) -> &'static [i32] {
        &FILTER_YEARS
    }

    pub fn is_offered(year: i32) -> bool {
        FILTER_YEARS.contains(&year)
    }

    /// Report `year` to the parent. Calls `on_change` exactly once, and only
    /// for a year the filter offers.
    pub fn choose<F>(&self, year: i32, on_change: F) -> Result<(), ExpenseError>
    where
        F: FnOnce(i32),
    {
        if !Self::is_offered(year) {
            warn!("rejected filter year {}", year);
            return Err(ExpenseError::UnknownYear(year));
        }

        debug!("filter year chosen: {} (was {})", year, self.selected);
        on_change(year);
        Ok(())
    }

    /// The option after the selected one (one year older), clamped at the last
    pub fn next(&self) -> i32 {
        self.step(1)
    }

    /// The option before the selected one (one year newer), clamped at the first
    pub fn previous(&self) -> i32 {
        self.step(-1)
    }

    fn step(&self, delta: isize) -> i32 {
        let Some(pos) = FILTER_YEARS.iter().position(|y| *y == self.selected) else {
            return self.selected;
        };

        let last = FILTER_YEARS.len() as isize - 1;
        let next = (pos as isize + delta).clamp(0, last);
        FILTER_YEARS[next as usize]
    }
}
