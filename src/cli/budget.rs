//! Budget CLI commands

use clap::Subcommand;

use crate::error::TallyResult;
use crate::services::{BudgetService, CategoryService};
use crate::storage::Store;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set (or replace) the monthly limit for a category
    Set {
        /// Month (YYYY-MM)
        month: String,
        /// Category name (case-sensitive)
        category: String,
        /// Spending limit (e.g., "300.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// List the limits set for a month
    List {
        /// Month (YYYY-MM)
        month: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(store: &Store, cmd: BudgetCommands) -> TallyResult<()> {
    let service = BudgetService::new(store);

    match cmd {
        BudgetCommands::Set {
            month,
            category,
            amount,
        } => {
            let budget = service.set_budget_input(&month, &category, &amount)?;
            println!(
                "Budget for {} in {}: {}",
                category, budget.month, budget.limit_amount
            );
        }

        BudgetCommands::List { month } => {
            let budgets = service.list_for_month(&month)?;
            if budgets.is_empty() {
                println!("No budgets defined for {}.", month);
                return Ok(());
            }

            let categories = CategoryService::new(store);
            println!("Budgets for {}:", month);
            for budget in budgets {
                let name = categories
                    .get(budget.category_id)?
                    .map(|c| c.name)
                    .unwrap_or_else(|| budget.category_id.to_string());
                println!("  {:<30} {:>12}", name, budget.limit_amount);
            }
        }
    }

    Ok(())
}
