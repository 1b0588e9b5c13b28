use chrono::NaiveDate;

/// Calendar breakdown shown next to each expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDate {
    pub month: String,
    pub year: String,
    pub day: String,
}

impl ExpenseDate {
    pub fn new(date: NaiveDate) -> Self {
        ExpenseDate {
            month: date.format("%B").to_string(),
            year: date.format("%Y").to_string(),
            day: date.format("%d").to_string(),
        }
    }
}
