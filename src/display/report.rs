//! Console rendering for reports
//!
//! Lays any [`TabularReport`] out as a bordered table for the terminal.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::reports::TabularReport;

/// Render a report as a console table, followed by its summary line
pub fn format_report(report: &dyn TabularReport, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&report.title());
    output.push('\n');

    if report.is_empty() {
        output.push_str(&report.empty_message());
        output.push('\n');
        return output;
    }

    let mut builder = Builder::default();
    builder.push_record(report.headers().iter().map(|h| h.to_string()));
    for row in report.table_rows(currency_symbol) {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::sharp());

    output.push_str(&table.to_string());
    output.push('\n');

    if let Some(summary) = report.summary(currency_symbol) {
        output.push_str(&summary);
        output.push('\n');
    }

    output
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetStatus, Money};
    use crate::reports::{BudgetComparison, BudgetVsActualReport, LedgerReport};

    #[test]
    fn test_format_budget_report() {
        let report = BudgetVsActualReport {
            month: "2025-01".into(),
            rows: vec![BudgetComparison {
                category_name: "Food".into(),
                limit_amount: Money::from_cents(30000),
                spent_amount: Money::from_cents(32050),
                status: BudgetStatus::OverBudget,
            }],
        };

        let output = format_report(&report, "$");
        assert!(output.starts_with("Budget vs Actual: 2025-01\n"));
        assert!(output.contains("Food"));
        assert!(output.contains("$300.00"));
        assert!(output.contains("$320.50"));
        assert!(output.contains("OVER BUDGET"));
        assert!(output.contains("1 of 1 categories over budget"));
    }

    #[test]
    fn test_format_empty_report() {
        let report = LedgerReport { rows: Vec::new() };
        let output = format_report(&report, "$");
        assert_eq!(output, "Expense Ledger\nNo expenses recorded.\n");
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator(3), "───");
    }
}
