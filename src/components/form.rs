use crate::expense::{ExpenseDraft, ExpenseError};
use chrono::NaiveDate;
use log::{debug, info};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Amount,
    Date,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Title => FormField::Amount,
            FormField::Amount => FormField::Date,
            FormField::Date => FormField::Title,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            FormField::Title => FormField::Date,
            FormField::Amount => FormField::Title,
            FormField::Date => FormField::Amount,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Amount => "Amount",
            FormField::Date => "Date",
        }
    }
}

/// Every field that failed validation on a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors(pub Vec<(FormField, ExpenseError)>);

impl FormErrors {
    pub fn for_field(&self, field: FormField) -> Option<&ExpenseError> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, e)| e)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn clear_field(&mut self, field: FormField) {
        self.0.retain(|(f, _)| *f != field);
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(|(_, e)| e.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

/// Entry form for a new expense. Fields are held as typed text and only
/// parsed on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseForm {
    entered_title: String,
    entered_amount: String,
    entered_date: String,
    focus: FormField,
    errors: Option<FormErrors>,
}

impl Default for ExpenseForm {
    fn default() -> Self {
        ExpenseForm {
            entered_title: String::new(),
            entered_amount: String::new(),
            entered_date: String::new(),
            focus: FormField::Title,
            errors: None,
        }
    }
}

impl ExpenseForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_amount() -> Decimal {
        Decimal::new(1, 2)
    }

    pub fn min_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 1, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn max_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 12, 31).unwrap_or(NaiveDate::MAX)
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.entered_title,
            FormField::Amount => &self.entered_amount,
            FormField::Date => &self.entered_date,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.entered_title,
            FormField::Amount => &mut self.entered_amount,
            FormField::Date => &mut self.entered_date,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> &mut Self {
        *self.value_mut(field) = value.into();
        self.clear_error(field);
        self
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.focus;
        self.value_mut(field).push(c);
        self.clear_error(field);
    }

    pub fn pop_char(&mut self) {
        let field = self.focus;
        self.value_mut(field).pop();
        self.clear_error(field);
    }

    // An edited field's stale error goes away; the rest wait for the next submit
    fn clear_error(&mut self, field: FormField) {
        if let Some(errors) = self.errors.as_mut() {
            errors.clear_field(field);
            if errors.is_empty() {
                self.errors = None;
            }
        }
    }

    pub fn errors(&self) -> Option<&FormErrors> {
        self.errors.as_ref()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Parse the entered text into a draft without touching form state
    pub fn parse(&self) -> Result<ExpenseDraft, FormErrors> {
        let mut errors = Vec::new();

        let title = self.entered_title.trim();
        if title.is_empty() {
            errors.push((FormField::Title, ExpenseError::MissingField("title")));
        }

        let amount = match parse_amount(&self.entered_amount) {
            Ok(a) => Some(a),
            Err(e) => {
                errors.push((FormField::Amount, e));
                None
            }
        };

        let date = match parse_date(&self.entered_date) {
            Ok(d) => Some(d),
            Err(e) => {
                errors.push((FormField::Date, e));
                None
            }
        };

        match (amount, date) {
            (Some(amount), Some(date)) if errors.is_empty() => {
                Ok(ExpenseDraft::new(title, amount, date))
            }
            _ => Err(FormErrors(errors)),
        }
    }

    /// Validate and hand the draft to the parent. The callback runs once on
    /// success and the form clears; on failure the input is kept.
    pub fn submit<F>(&mut self, on_save_expense_data: F) -> Result<(), FormErrors>
    where
        F: FnOnce(ExpenseDraft),
    {
        match self.parse() {
            Ok(draft) => {
                info!("expense form submitted: {:?}", draft.title);
                on_save_expense_data(draft);
                self.clear();
                Ok(())
            }
            Err(errors) => {
                debug!("expense form rejected: {}", errors);
                self.errors = Some(errors.clone());
                Err(errors)
            }
        }
    }
}

fn parse_amount(raw: &str) -> Result<Decimal, ExpenseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ExpenseError::MissingField("amount"));
    }

    let amount = Decimal::from_str(raw).map_err(|_| ExpenseError::InvalidAmount(raw.to_string()))?;

    let minimum = ExpenseForm::min_amount();
    if amount < minimum {
        return Err(ExpenseError::AmountTooSmall { amount, minimum });
    }

    Ok(amount)
}

fn parse_date(raw: &str) -> Result<NaiveDate, ExpenseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ExpenseError::MissingField("date"));
    }

    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| ExpenseError::InvalidDate(raw.to_string()))?;

    let (min, max) = (ExpenseForm::min_date(), ExpenseForm::max_date());
    if date < min || date > max {
        return Err(ExpenseError::DateOutOfRange { date, min, max });
    }

    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn filled(title: &str, amount: &str, date: &str) -> ExpenseForm {
        let mut form = ExpenseForm::new();
        form.set(FormField::Title, title)
            .set(FormField::Amount, amount)
            .set(FormField::Date, date);
        form
    }

    #[test]
    fn test_submit_valid_calls_back_once_and_clears() {
        let mut form = filled("Rent", "800", "2022-03-01");
        let mut saved = Vec::new();

        form.submit(|draft| saved.push(draft)).unwrap();

        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].title, "Rent");
        assert_eq!(saved[0].amount, dec!(800));
        assert_eq!(saved[0].date, NaiveDate::from_ymd_opt(2022, 3, 1).unwrap());
        assert_eq!(form, ExpenseForm::new());
    }

    #[test]
    fn test_title_is_trimmed() {
        let draft = filled("  Groceries ", "12.50", "2021-07-04").parse().unwrap();

        assert_eq!(draft.title, "Groceries");
        assert_eq!(draft.amount, dec!(12.50));
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let mut form = ExpenseForm::new();
        let mut called = false;

        let errors = form.submit(|_| called = true).unwrap_err();

        assert!(!called);
        assert_eq!(errors.0.len(), 3);
        assert_eq!(
            errors.for_field(FormField::Title),
            Some(&ExpenseError::MissingField("title"))
        );
        assert_eq!(
            errors.for_field(FormField::Amount),
            Some(&ExpenseError::MissingField("amount"))
        );
        assert!(form.errors().is_some());
    }

    #[test]
    fn test_invalid_amount_keeps_input() {
        let mut form = filled("Lunch", "abc", "2021-01-01");

        let errors = form.submit(|_| {}).unwrap_err();

        assert_eq!(
            errors.for_field(FormField::Amount),
            Some(&ExpenseError::InvalidAmount("abc".to_string()))
        );
        assert_eq!(form.value(FormField::Title), "Lunch");
    }

    #[test]
    fn test_amount_below_minimum() {
        let errors = filled("Gum", "0", "2021-01-01").parse().unwrap_err();

        assert!(matches!(
            errors.for_field(FormField::Amount),
            Some(ExpenseError::AmountTooSmall { .. })
        ));
    }

    #[test]
    fn test_date_bounds() {
        let errors = filled("Old", "1", "2018-12-31").parse().unwrap_err();
        assert!(matches!(
            errors.for_field(FormField::Date),
            Some(ExpenseError::DateOutOfRange { .. })
        ));

        let errors = filled("Bad", "1", "31/12/2020").parse().unwrap_err();
        assert_eq!(
            errors.for_field(FormField::Date),
            Some(&ExpenseError::InvalidDate("31/12/2020".to_string()))
        );

        assert!(filled("Edge", "1", "2023-12-31").parse().is_ok());
    }

    #[test]
    fn test_editing_a_field_clears_only_its_error() {
        let mut form = ExpenseForm::new();
        form.submit(|_| {}).unwrap_err();

        form.push_char('T');

        let errors = form.errors().unwrap();
        assert_eq!(errors.for_field(FormField::Title), None);
        assert!(errors.for_field(FormField::Amount).is_some());
        assert!(errors.for_field(FormField::Date).is_some());

        form.set(FormField::Amount, "5").set(FormField::Date, "2021-01-01");
        assert!(form.errors().is_none());
    }

    #[test]
    fn test_pop_char_clears_error() {
        let mut form = filled("Lunch", "abc", "2021-01-01");
        form.submit(|_| {}).unwrap_err();

        form.focus_next();
        form.pop_char();

        assert!(form.errors().is_none());
    }

    #[test]
    fn test_typing_into_focused_field() {
        let mut form = ExpenseForm::new();
        form.push_char('T');
        form.push_char('V');
        form.focus_next();
        form.push_char('9');
        form.push_char('9');
        form.pop_char();

        assert_eq!(form.value(FormField::Title), "TV");
        assert_eq!(form.value(FormField::Amount), "9");
        assert_eq!(form.focus(), FormField::Amount);

        form.focus_previous();
        form.focus_previous();
        assert_eq!(form.focus(), FormField::Date);
    }
}
