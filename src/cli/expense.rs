//! Expense CLI commands

use clap::Subcommand;

use crate::error::TallyResult;
use crate::services::ExpenseService;
use crate::storage::Store;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name (case-sensitive)
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(store: &Store, cmd: ExpenseCommands) -> TallyResult<()> {
    let service = ExpenseService::new(store);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let date = date.unwrap_or_else(today);
            let expense =
                service.record_input(&date, &amount, &category, description.as_deref())?;
            println!(
                "Recorded expense: {} {} in {}",
                expense.date, expense.amount, category
            );
            println!("  ID: {}", expense.id);
        }
    }

    Ok(())
}

/// Today's date in the `YYYY-MM-DD` form reports sort by
pub(crate) fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
