// Expense Entity - the one record the tracker knows about
//
// "Identity is assigned once, values are carried as given"
//
// - id: UUID v4 string, attached when the record is created, never recomputed
// - title / amount / date: copied from the submitted draft

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpenseError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),
    #[error("amount must be at least {minimum}, got {amount}")]
    AmountTooSmall { amount: Decimal, minimum: Decimal },
    #[error("'{0}' is not a date (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("the date '{date}' is beyond the range {min} - {max}")]
    DateOutOfRange {
        date: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },
    #[error("year {0} is not offered by the filter")]
    UnknownYear(i32),
    #[error("an expense with id '{0}' is already in the list")]
    DuplicateId(String),
}

// ============================================================================
// DRAFT (submitted fields, no identity yet)
// ============================================================================

/// The fields collected by the expense form, before an id is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    pub fn new(title: impl Into<String>, amount: Decimal, date: NaiveDate) -> Self {
        ExpenseDraft {
            title: title.into(),
            amount,
            date,
        }
    }
}

// ============================================================================
// EXPENSE ENTITY
// ============================================================================

/// A record of one spending event.
///
/// Identity: `id` (never changes)
/// Values: title, amount, date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Stable identity (UUID) - NEVER changes
    pub id: String,
    pub title: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

impl Expense {
    /// Create an expense from a draft, generating a fresh UUID
    pub fn from_draft(draft: ExpenseDraft) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), draft)
    }

    /// Create an expense with a caller-supplied id
    pub fn with_id(id: impl Into<String>, draft: ExpenseDraft) -> Self {
        Expense {
            id: id.into(),
            title: draft.title,
            amount: draft.amount,
            date: draft.date,
        }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

/// The four expenses the tracker starts with unless seeding is disabled.
pub fn seed_expenses() -> Vec<Expense> {
    let seeds = [
        ("e1", "Toilet Paper", Decimal::new(9412, 2), (2020, 8, 14)),
        ("e2", "New TV", Decimal::new(79949, 2), (2021, 2, 12)),
        ("e3", "Car Insurance", Decimal::new(29467, 2), (2021, 2, 28)),
        ("e4", "New Desk (Wooden)", Decimal::new(450, 0), (2021, 5, 12)),
    ];

    seeds
        .into_iter()
        .filter_map(|(id, title, amount, (y, m, d))| {
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(Expense::with_id(id, ExpenseDraft::new(title, amount, date)))
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
