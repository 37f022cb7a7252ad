//! Expense repository
//!
//! Expenses are append-only: there is no update or delete.

use rusqlite::{params, Connection, Row};

use crate::error::TallyResult;
use crate::models::{CategoryId, Expense, ExpenseId, Money};

/// Repository for expense persistence
pub struct ExpenseRepository<'a> {
    conn: &'a Connection,
}

impl<'a> ExpenseRepository<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert an expense row and return it with its assigned id
    ///
    /// The store checks the amount and the category reference; violations
    /// surface as `IntegrityViolation` and leave the table untouched.
    pub fn insert(
        &self,
        date: &str,
        amount: Money,
        category_id: CategoryId,
        description: &str,
    ) -> TallyResult<Expense> {
        self.conn.execute(
            "INSERT INTO expenses (date, amount_cents, category_id, description)
             VALUES (?1, ?2, ?3, ?4)",
            params![date, amount, category_id, description],
        )?;

        Ok(Expense {
            id: ExpenseId::from_raw(self.conn.last_insert_rowid()),
            date: date.to_string(),
            amount,
            category_id,
            description: description.to_string(),
        })
    }

    /// Get all expenses in insertion order
    pub fn get_all(&self) -> TallyResult<Vec<Expense>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, amount_cents, category_id, description
             FROM expenses ORDER BY id",
        )?;
        let expenses = stmt
            .query_map([], map_expense)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(expenses)
    }

    /// Expenses in categories that have a budget for `month`, in insertion order
    ///
    /// Dates are not filtered here; callers match them with
    /// [`Expense::month_key`].
    pub fn get_for_budgeted_categories(&self, month: &str) -> TallyResult<Vec<Expense>> {
        let mut stmt = self.conn.prepare(
            "SELECT e.id, e.date, e.amount_cents, e.category_id, e.description
             FROM expenses e
             JOIN budgets b ON b.category_id = e.category_id
             WHERE b.month = ?1
             ORDER BY e.id",
        )?;
        let expenses = stmt
            .query_map(params![month], map_expense)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(expenses)
    }

    /// Number of stored expenses
    pub fn count(&self) -> TallyResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn map_expense(row: &Row<'_>) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: row.get(0)?,
        date: row.get(1)?,
        amount: row.get(2)?,
        category_id: row.get(3)?,
        description: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TallyError;
    use crate::storage::Store;

    #[test]
    fn test_insert_and_list() {
        let store = Store::open_in_memory().unwrap();
        let food = store.categories().insert("Food").unwrap();

        let expense = store
            .expenses()
            .insert("2025-01-10", Money::from_cents(5050), food.id, "Groceries")
            .unwrap();

        let all = store.expenses().get_all().unwrap();
        assert_eq!(all, vec![expense]);
    }

    #[test]
    fn test_get_for_budgeted_categories() {
        let store = Store::open_in_memory().unwrap();
        let food = store.categories().insert("Food").unwrap();
        let leisure = store.categories().insert("Leisure").unwrap();
        store
            .budgets()
            .upsert(&crate::models::Budget::new("2025-01", food.id, Money::from_cents(100)))
            .unwrap();

        let expenses = store.expenses();
        let in_food = expenses
            .insert("2024-12-31", Money::from_cents(5), food.id, "")
            .unwrap();
        expenses
            .insert("2025-01-02", Money::from_cents(7), leisure.id, "")
            .unwrap();

        assert_eq!(
            expenses.get_for_budgeted_categories("2025-01").unwrap(),
            vec![in_food]
        );
        assert!(expenses.get_for_budgeted_categories("2025-02").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_category_rejected_by_store() {
        let store = Store::open_in_memory().unwrap();

        let err = store
            .expenses()
            .insert("2025-01-10", Money::from_cents(100), CategoryId::from_raw(42), "")
            .unwrap_err();

        assert!(matches!(err, TallyError::IntegrityViolation(_)));
        assert_eq!(store.expenses().count().unwrap(), 0);
    }

    #[test]
    fn test_non_positive_amount_rejected_by_store() {
        let store = Store::open_in_memory().unwrap();
        let food = store.categories().insert("Food").unwrap();

        let err = store
            .expenses()
            .insert("2025-01-10", Money::zero(), food.id, "")
            .unwrap_err();

        assert!(matches!(err, TallyError::IntegrityViolation(_)));
        assert_eq!(store.expenses().count().unwrap(), 0);
    }

    #[test]
    fn test_oversized_amount_rejected_by_store() {
        let store = Store::open_in_memory().unwrap();
        let food = store.categories().insert("Food").unwrap();

        let err = store
            .expenses()
            .insert("2025-01-10", Money::from_cents(i64::MAX), food.id, "")
            .unwrap_err();

        assert!(matches!(err, TallyError::IntegrityViolation(_)));
        assert_eq!(store.expenses().count().unwrap(), 0);
    }
}
