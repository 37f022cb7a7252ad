//! Monthly budget model
//!
//! A budget is a spending ceiling for one category in one calendar month.
//! At most one budget exists per (month, category); setting it again
//! replaces the limit.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// A spending limit for a category in a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Month key in `YYYY-MM` form
    pub month: String,

    /// The category this limit applies to
    pub category_id: CategoryId,

    /// The spending ceiling, always positive
    pub limit_amount: Money,
}

impl Budget {
    /// Create a new budget
    pub fn new(month: impl Into<String>, category_id: CategoryId, limit_amount: Money) -> Self {
        Self {
            month: month.into(),
            category_id,
            limit_amount,
        }
    }

    /// Compare an amount spent against this budget's limit
    pub fn status_for(&self, spent: Money) -> BudgetStatus {
        BudgetStatus::evaluate(self.limit_amount, spent)
    }
}

/// Outcome of comparing spending against a limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetStatus {
    /// Spending is at or below the limit
    Ok,
    /// Spending strictly exceeds the limit
    OverBudget,
}

impl BudgetStatus {
    /// Spending equal to the limit is still within budget
    pub fn evaluate(limit: Money, spent: Money) -> Self {
        if spent <= limit {
            Self::Ok
        } else {
            Self::OverBudget
        }
    }

    /// Label used in console and exported output
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::OverBudget => "OVER BUDGET",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_boundaries() {
        let limit = Money::from_cents(30000);
        assert_eq!(BudgetStatus::evaluate(limit, Money::zero()), BudgetStatus::Ok);
        assert_eq!(BudgetStatus::evaluate(limit, limit), BudgetStatus::Ok);
        assert_eq!(
            BudgetStatus::evaluate(limit, Money::from_cents(30001)),
            BudgetStatus::OverBudget
        );
    }

    #[test]
    fn test_budget_status_for() {
        let budget = Budget::new("2025-01", CategoryId::from_raw(1), Money::from_cents(30000));
        assert_eq!(
            budget.status_for(Money::from_cents(32050)),
            BudgetStatus::OverBudget
        );
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&BudgetStatus::OverBudget).unwrap();
        assert_eq!(json, "\"OVER_BUDGET\"");
        assert_eq!(BudgetStatus::Ok.to_string(), "OK");
    }
}
