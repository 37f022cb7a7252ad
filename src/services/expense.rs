//! Expense service
//!
//! Records expenses against existing categories. The amount is checked
//! before the category is resolved, and both checks run before any write.

use crate::error::TallyResult;
use crate::models::{Expense, Money};
use crate::services::{ensure_positive, parse_amount, CategoryService};
use crate::storage::Store;

/// Service for recording expenses
pub struct ExpenseService<'a> {
    store: &'a Store,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Record an expense
    ///
    /// `date` is stored verbatim. Reports order and group expenses by
    /// comparing date text, so callers must supply `YYYY-MM-DD`.
    pub fn record(
        &self,
        date: &str,
        amount: Money,
        category_name: &str,
        description: Option<&str>,
    ) -> TallyResult<Expense> {
        let amount = ensure_positive(amount)?;
        let category = CategoryService::new(self.store).resolve(category_name)?;

        let expense = self.store.expenses().insert(
            date,
            amount,
            category.id,
            description.unwrap_or_default(),
        )?;

        tracing::info!(
            id = %expense.id,
            date = %expense.date,
            amount = %expense.amount,
            category = %category.name,
            "expense recorded"
        );

        Ok(expense)
    }

    /// Record an expense from raw amount text
    pub fn record_input(
        &self,
        date: &str,
        amount: &str,
        category_name: &str,
        description: Option<&str>,
    ) -> TallyResult<Expense> {
        let amount = parse_amount(amount)?;
        self.record(date, amount, category_name, description)
    }

    /// List all expenses in the order they were recorded
    pub fn list(&self) -> TallyResult<Vec<Expense>> {
        self.store.expenses().get_all()
    }

    /// Number of recorded expenses
    pub fn count(&self) -> TallyResult<usize> {
        self.store.expenses().count()
    }
}
