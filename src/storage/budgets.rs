//! Budget repository
//!
//! Budgets are keyed by (month, category). Setting a budget that already
//! exists replaces its limit inside a single transaction, so a reader never
//! sees the row missing or duplicated.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::TallyResult;
use crate::models::{Budget, CategoryId, Money};

/// Whether an upsert created a new row or replaced an existing limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced { previous: Money },
}

/// Repository for budget persistence
pub struct BudgetRepository<'a> {
    conn: &'a Connection,
}

impl<'a> BudgetRepository<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Get the budget for a month and category
    pub fn get(&self, month: &str, category_id: CategoryId) -> TallyResult<Option<Budget>> {
        let budget = self
            .conn
            .query_row(
                "SELECT month, category_id, limit_cents FROM budgets
                 WHERE month = ?1 AND category_id = ?2",
                params![month, category_id],
                map_budget,
            )
            .optional()?;
        Ok(budget)
    }

    /// Get all budgets for a month, ordered by category id
    pub fn get_for_month(&self, month: &str) -> TallyResult<Vec<Budget>> {
        let mut stmt = self.conn.prepare(
            "SELECT month, category_id, limit_cents FROM budgets
             WHERE month = ?1 ORDER BY category_id",
        )?;
        let budgets = stmt
            .query_map(params![month], map_budget)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(budgets)
    }

    /// Insert the budget, or replace the limit of the existing row
    ///
    /// Read-then-replace-or-insert runs in one transaction. Any failure rolls
    /// back when the transaction is dropped uncommitted.
    pub fn upsert(&self, budget: &Budget) -> TallyResult<UpsertOutcome> {
        let tx = self.conn.unchecked_transaction()?;

        let existing: Option<Money> = tx
            .query_row(
                "SELECT limit_cents FROM budgets WHERE month = ?1 AND category_id = ?2",
                params![budget.month, budget.category_id],
                |row| row.get(0),
            )
            .optional()?;

        let outcome = match existing {
            Some(previous) => {
                tx.execute(
                    "UPDATE budgets SET limit_cents = ?3
                     WHERE month = ?1 AND category_id = ?2",
                    params![budget.month, budget.category_id, budget.limit_amount],
                )?;
                UpsertOutcome::Replaced { previous }
            }
            None => {
                tx.execute(
                    "INSERT INTO budgets (month, category_id, limit_cents) VALUES (?1, ?2, ?3)",
                    params![budget.month, budget.category_id, budget.limit_amount],
                )?;
                UpsertOutcome::Inserted
            }
        };

        tx.commit()?;
        Ok(outcome)
    }

    /// Number of stored budgets
    pub fn count(&self) -> TallyResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM budgets", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn map_budget(row: &Row<'_>) -> rusqlite::Result<Budget> {
    Ok(Budget {
        month: row.get(0)?,
        category_id: row.get(1)?,
        limit_amount: row.get(2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TallyError;
    use crate::storage::Store;

    #[test]
    fn test_upsert_inserts_then_replaces() {
        let store = Store::open_in_memory().unwrap();
        let food = store.categories().insert("Food").unwrap();
        let repo = store.budgets();

        let first = Budget::new("2025-01", food.id, Money::from_cents(30000));
        assert_eq!(repo.upsert(&first).unwrap(), UpsertOutcome::Inserted);

        let second = Budget::new("2025-01", food.id, Money::from_cents(25000));
        assert_eq!(
            repo.upsert(&second).unwrap(),
            UpsertOutcome::Replaced {
                previous: Money::from_cents(30000)
            }
        );

        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.get("2025-01", food.id).unwrap(), Some(second));
    }

    #[test]
    fn test_months_are_independent() {
        let store = Store::open_in_memory().unwrap();
        let food = store.categories().insert("Food").unwrap();
        let repo = store.budgets();

        repo.upsert(&Budget::new("2025-01", food.id, Money::from_cents(100)))
            .unwrap();
        repo.upsert(&Budget::new("2025-02", food.id, Money::from_cents(200)))
            .unwrap();

        assert_eq!(repo.get_for_month("2025-01").unwrap().len(), 1);
        assert_eq!(repo.get_for_month("2025-02").unwrap().len(), 1);
        assert!(repo.get_for_month("2025-03").unwrap().is_empty());
    }

    #[test]
    fn test_failed_upsert_leaves_no_trace() {
        let store = Store::open_in_memory().unwrap();
        let repo = store.budgets();

        let orphan = Budget::new("2025-01", CategoryId::from_raw(99), Money::from_cents(100));
        let err = repo.upsert(&orphan).unwrap_err();

        assert!(matches!(err, TallyError::IntegrityViolation(_)));
        assert_eq!(repo.count().unwrap(), 0);
    }
}
