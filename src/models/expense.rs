//! Expense model
//!
//! An expense is a single dated spending transaction against one category.
//! Expenses are append-only.

use serde::{Deserialize, Serialize};

use super::ids::{CategoryId, ExpenseId};
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Surrogate key assigned by the store (also the insertion order)
    pub id: ExpenseId,

    /// Date as supplied by the caller, expected in `YYYY-MM-DD` form
    pub date: String,

    /// Amount spent, always positive
    pub amount: Money,

    /// The category this expense was recorded against
    pub category_id: CategoryId,

    /// Free-text description, empty when none was given
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// The `YYYY-MM` prefix used to match the expense against monthly budgets
    ///
    /// Dates are not validated, so a malformed date yields a prefix that
    /// simply never matches a budget month.
    pub fn month_key(&self) -> &str {
        month_prefix(&self.date)
    }
}

/// First seven characters of a date string (or the whole string if shorter)
pub fn month_prefix(date: &str) -> &str {
    match date.char_indices().nth(7) {
        Some((idx, _)) => &date[..idx],
        None => date,
    }
}
