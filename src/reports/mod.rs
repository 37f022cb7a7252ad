//! Reports module for Tally
//!
//! Three read-only projections over the store: spending totals per
//! category, budget versus actual spending for a month, and the full
//! expense ledger in date order. Every call re-reads the store.
//!
//! Each report implements [`TabularReport`], the shape shared by the console
//! renderer, CSV export and the paginated document export.

pub mod budget_vs_actual;
pub mod category_totals;
pub mod ledger;

pub use budget_vs_actual::{BudgetComparison, BudgetVsActualReport};
pub use category_totals::{CategoryTotal, CategoryTotalsReport};
pub use ledger::{LedgerEntry, LedgerReport};

use crate::error::TallyResult;
use crate::storage::Store;

/// A report that can be laid out as a table
pub trait TabularReport {
    /// Report heading
    fn title(&self) -> String;

    /// Column headings, in row order
    fn headers(&self) -> &'static [&'static str];

    /// Body rows with amounts rendered using `currency_symbol`
    fn table_rows(&self, currency_symbol: &str) -> Vec<Vec<String>>;

    /// Optional closing line (totals and the like)
    fn summary(&self, _currency_symbol: &str) -> Option<String> {
        None
    }

    /// Text shown instead of a table when there are no rows
    fn empty_message(&self) -> String;

    fn is_empty(&self) -> bool;
}

/// Entry point for the three report projections
pub struct ReportEngine<'a> {
    store: &'a Store,
}

impl<'a> ReportEngine<'a> {
    /// Create a report engine over a store
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Total spending per category that has at least one expense
    pub fn totals_by_category(&self) -> TallyResult<CategoryTotalsReport> {
        CategoryTotalsReport::generate(self.store)
    }

    /// Limit, spending and status for every budget set for `month`
    pub fn budget_vs_actual(&self, month: &str) -> TallyResult<BudgetVsActualReport> {
        BudgetVsActualReport::generate(self.store, month)
    }

    /// Every expense with its category name, ordered by date
    pub fn chronological_ledger(&self) -> TallyResult<LedgerReport> {
        LedgerReport::generate(self.store)
    }
}
