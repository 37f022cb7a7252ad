//! Budget vs Actual Report
//!
//! For each budget set for a month, compares the limit with what was spent
//! in that category during the month. An expense belongs to the month whose
//! `YYYY-MM` key equals the first seven characters of its date. Categories
//! without a budget for the month are not listed.

use std::collections::HashMap;

use rusqlite::{params, Row};

use crate::error::TallyResult;
use crate::models::{Budget, BudgetStatus, CategoryId, Money};
use crate::storage::Store;

use super::TabularReport;

/// Budget compliance for one category in the report month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetComparison {
    pub category_name: String,
    pub limit_amount: Money,
    pub spent_amount: Money,
    pub status: BudgetStatus,
}

/// Budget versus actual spending for one month
#[derive(Debug, Clone)]
pub struct BudgetVsActualReport {
    pub month: String,
    pub rows: Vec<BudgetComparison>,
}

impl BudgetVsActualReport {
    /// Generate the report for `month` from current store contents
    pub fn generate(store: &Store, month: &str) -> TallyResult<Self> {
        let mut spent: HashMap<CategoryId, Money> = HashMap::new();
        for expense in store.expenses().get_for_budgeted_categories(month)? {
            if expense.month_key() == month {
                *spent.entry(expense.category_id).or_default() += expense.amount;
            }
        }

        let mut stmt = store.connection().prepare(
            "SELECT c.name, b.month, b.category_id, b.limit_cents
             FROM budgets b
             JOIN categories c ON c.id = b.category_id
             WHERE b.month = ?1
             ORDER BY c.id",
        )?;
        let budgets = stmt
            .query_map(params![month], map_budget)?
            .collect::<Result<Vec<_>, _>>()?;

        let rows: Vec<BudgetComparison> = budgets
            .into_iter()
            .map(|(category_name, budget)| {
                let spent_amount = spent.get(&budget.category_id).copied().unwrap_or_default();
                BudgetComparison {
                    category_name,
                    limit_amount: budget.limit_amount,
                    spent_amount,
                    status: budget.status_for(spent_amount),
                }
            })
            .collect();

        tracing::debug!(month, rows = rows.len(), "budget vs actual generated");
        Ok(Self {
            month: month.to_string(),
            rows,
        })
    }

    /// Categories whose spending exceeded the limit
    pub fn over_budget(&self) -> impl Iterator<Item = &BudgetComparison> {
        self.rows
            .iter()
            .filter(|r| r.status == BudgetStatus::OverBudget)
    }
}

fn map_budget(row: &Row<'_>) -> rusqlite::Result<(String, Budget)> {
    Ok((
        row.get(0)?,
        Budget {
            month: row.get(1)?,
            category_id: row.get(2)?,
            limit_amount: row.get(3)?,
        },
    ))
}

impl TabularReport for BudgetVsActualReport {
    fn title(&self) -> String {
        format!("Budget vs Actual: {}", self.month)
    }

    fn headers(&self) -> &'static [&'static str] {
        &["Category", "Budget", "Spent", "Status"]
    }

    fn table_rows(&self, currency_symbol: &str) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    r.category_name.clone(),
                    r.limit_amount.format_with_symbol(currency_symbol),
                    r.spent_amount.format_with_symbol(currency_symbol),
                    r.status.label().to_string(),
                ]
            })
            .collect()
    }

    fn summary(&self, _currency_symbol: &str) -> Option<String> {
        let over = self.over_budget().count();
        if over == 0 {
            None
        } else {
            Some(format!("{} of {} categories over budget", over, self.rows.len()))
        }
    }

    fn empty_message(&self) -> String {
        format!("No budgets defined for {}.", self.month)
    }

    fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
