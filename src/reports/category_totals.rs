//! Category Totals Report
//!
//! Sums every recorded expense per category. Categories without expenses
//! are left out.

use rusqlite::Row;

use crate::error::TallyResult;
use crate::models::Money;
use crate::storage::Store;

use super::TabularReport;

/// Total spending for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category_name: String,
    pub total: Money,
}

/// Spending totals by category, in category creation order
#[derive(Debug, Clone)]
pub struct CategoryTotalsReport {
    pub rows: Vec<CategoryTotal>,
}

impl CategoryTotalsReport {
    /// Generate the report from current store contents
    pub fn generate(store: &Store) -> TallyResult<Self> {
        let mut stmt = store.connection().prepare(
            "SELECT c.name, SUM(e.amount_cents)
             FROM expenses e
             JOIN categories c ON c.id = e.category_id
             GROUP BY c.id
             ORDER BY c.id",
        )?;
        let rows = stmt
            .query_map([], map_row)?
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(rows = rows.len(), "category totals generated");
        Ok(Self { rows })
    }

    /// Sum of all category totals
    pub fn grand_total(&self) -> Money {
        self.rows.iter().map(|r| r.total).sum()
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<CategoryTotal> {
    Ok(CategoryTotal {
        category_name: row.get(0)?,
        total: row.get(1)?,
    })
}

impl TabularReport for CategoryTotalsReport {
    fn title(&self) -> String {
        "Total Spending by Category".to_string()
    }

    fn headers(&self) -> &'static [&'static str] {
        &["Category", "Total Spent"]
    }

    fn table_rows(&self, currency_symbol: &str) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    r.category_name.clone(),
                    r.total.format_with_symbol(currency_symbol),
                ]
            })
            .collect()
    }

    fn summary(&self, currency_symbol: &str) -> Option<String> {
        Some(format!(
            "Total: {}",
            self.grand_total().format_with_symbol(currency_symbol)
        ))
    }

    fn empty_message(&self) -> String {
        "No expenses recorded.".to_string()
    }

    fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{CategoryService, ExpenseService};

    #[test]
    fn test_empty_store() {
        let store = Store::open_in_memory().unwrap();
        CategoryService::new(&store).add("Food").unwrap();

        let report = CategoryTotalsReport::generate(&store).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.grand_total(), Money::zero());
    }

    #[test]
    fn test_sums_match_recorded_amounts() {
        let store = Store::open_in_memory().unwrap();
        let categories = CategoryService::new(&store);
        categories.add("Rent").unwrap();
        categories.add("Books").unwrap();

        let expenses = ExpenseService::new(&store);
        let book_amounts = [1999, 1, 4500, 120];
        for cents in book_amounts {
            expenses
                .record("2025-03-01", Money::from_cents(cents), "Books", None)
                .unwrap();
        }
        expenses
            .record("2025-03-01", Money::from_cents(95000), "Rent", None)
            .unwrap();

        let report = CategoryTotalsReport::generate(&store).unwrap();
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].category_name, "Rent");
        assert_eq!(report.rows[0].total, Money::from_cents(95000));
        assert_eq!(report.rows[1].category_name, "Books");
        assert_eq!(
            report.rows[1].total,
            Money::from_cents(book_amounts.iter().sum())
        );
        assert_eq!(report.grand_total(), Money::from_cents(95000 + 6620));
    }

    #[test]
    fn test_totals_span_all_months() {
        let store = Store::open_in_memory().unwrap();
        CategoryService::new(&store).add("Food").unwrap();
        let expenses = ExpenseService::new(&store);
        expenses
            .record("2024-12-31", Money::from_cents(100), "Food", None)
            .unwrap();
        expenses
            .record("2025-01-01", Money::from_cents(200), "Food", None)
            .unwrap();

        let report = CategoryTotalsReport::generate(&store).unwrap();
        assert_eq!(report.rows[0].total, Money::from_cents(300));
    }

    #[test]
    fn test_table_rows() {
        let report = CategoryTotalsReport {
            rows: vec![CategoryTotal {
                category_name: "Food".into(),
                total: Money::from_cents(32050),
            }],
        };

        assert_eq!(report.table_rows("$"), vec![vec!["Food", "$320.50"]]);
        assert_eq!(report.summary("$").unwrap(), "Total: $320.50");
    }
}
