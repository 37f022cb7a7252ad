//! Budget service
//!
//! Sets the monthly spending limit for a category. This is the only
//! mutation that can change an existing row.

use crate::error::TallyResult;
use crate::models::{Budget, Money};
use crate::services::{ensure_positive, parse_amount, CategoryService};
use crate::storage::{Store, UpsertOutcome};

/// Service for monthly budget management
pub struct BudgetService<'a> {
    store: &'a Store,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Set or replace the limit for a (month, category) pair
    ///
    /// Repeating the call with a different limit replaces the old value; it
    /// never accumulates. The month is stored as given and is expected in
    /// `YYYY-MM` form.
    pub fn set_budget(
        &self,
        month: &str,
        category_name: &str,
        limit_amount: Money,
    ) -> TallyResult<Budget> {
        let limit_amount = ensure_positive(limit_amount)?;
        let category = CategoryService::new(self.store).resolve(category_name)?;

        let budget = Budget::new(month, category.id, limit_amount);
        match self.store.budgets().upsert(&budget)? {
            UpsertOutcome::Inserted => {
                tracing::info!(month, category = %category.name, limit = %limit_amount, "budget set");
            }
            UpsertOutcome::Replaced { previous } => {
                tracing::info!(
                    month,
                    category = %category.name,
                    previous = %previous,
                    limit = %limit_amount,
                    "budget replaced"
                );
            }
        }

        Ok(budget)
    }

    /// Set a budget from raw limit text
    pub fn set_budget_input(
        &self,
        month: &str,
        category_name: &str,
        limit_amount: &str,
    ) -> TallyResult<Budget> {
        let limit_amount = parse_amount(limit_amount)?;
        self.set_budget(month, category_name, limit_amount)
    }

    /// Get the budget for a month and category name
    pub fn get(&self, month: &str, category_name: &str) -> TallyResult<Option<Budget>> {
        let category = CategoryService::new(self.store).resolve(category_name)?;
        self.store.budgets().get(month, category.id)
    }

    /// List the budgets defined for a month
    pub fn list_for_month(&self, month: &str) -> TallyResult<Vec<Budget>> {
        self.store.budgets().get_for_month(month)
    }
}
