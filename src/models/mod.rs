//! Core data models for Tally
//!
//! Categories, expenses and monthly budgets, plus the `Money` and id
//! newtypes they are built from.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use budget::{Budget, BudgetStatus};
pub use category::Category;
pub use expense::Expense;
pub use ids::{CategoryId, ExpenseId};
pub use money::Money;
