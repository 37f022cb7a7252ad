//! Chronological Ledger Report
//!
//! Lists every expense with its category name, ordered by date. Dates are
//! compared as text, which matches calendar order only for `YYYY-MM-DD`.
//! Expenses on the same date keep the order they were recorded in.

use rusqlite::Row;

use crate::error::TallyResult;
use crate::models::Money;
use crate::storage::Store;

use super::TabularReport;

/// One line of the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub date: String,
    pub category_name: String,
    pub amount: Money,
    pub description: String,
}

/// All expenses in date order
#[derive(Debug, Clone)]
pub struct LedgerReport {
    pub rows: Vec<LedgerEntry>,
}

impl LedgerReport {
    /// Generate the ledger from current store contents
    pub fn generate(store: &Store) -> TallyResult<Self> {
        let mut stmt = store.connection().prepare(
            "SELECT e.date, c.name, e.amount_cents, e.description
             FROM expenses e
             JOIN categories c ON c.id = e.category_id
             ORDER BY e.date ASC, e.id ASC",
        )?;
        let rows = stmt
            .query_map([], map_row)?
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(rows = rows.len(), "ledger generated");
        Ok(Self { rows })
    }

    /// Sum of every listed expense
    pub fn total(&self) -> Money {
        self.rows.iter().map(|r| r.amount).sum()
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<LedgerEntry> {
    Ok(LedgerEntry {
        date: row.get(0)?,
        category_name: row.get(1)?,
        amount: row.get(2)?,
        description: row.get(3)?,
    })
}

impl TabularReport for LedgerReport {
    fn title(&self) -> String {
        "Expense Ledger".to_string()
    }

    fn headers(&self) -> &'static [&'static str] {
        &["Date", "Category", "Amount", "Description"]
    }

    fn table_rows(&self, currency_symbol: &str) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.category_name.clone(),
                    r.amount.format_with_symbol(currency_symbol),
                    r.description.clone(),
                ]
            })
            .collect()
    }

    fn summary(&self, currency_symbol: &str) -> Option<String> {
        Some(format!(
            "{} expenses, total {}",
            self.rows.len(),
            self.total().format_with_symbol(currency_symbol)
        ))
    }

    fn empty_message(&self) -> String {
        "No expenses recorded.".to_string()
    }

    fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
