//! Tally - personal expense tracker with monthly category budgets
//!
//! This library provides the core functionality for the `tally` command line
//! tool: categories, dated expenses and per-month spending limits kept in a
//! SQLite database, plus reports computed from that data.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory paths and user settings
//! - `error`: Custom error types
//! - `logging`: Diagnostic output setup
//! - `models`: Core data models (categories, expenses, budgets, money)
//! - `storage`: SQLite storage layer and schema bootstrap
//! - `services`: Validation and business logic
//! - `reports`: Totals by category, budget vs actual, expense ledger
//! - `display`: Terminal rendering
//! - `export`: CSV and paginated document export
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust
//! use tally::reports::ReportEngine;
//! use tally::services::{BudgetService, CategoryService, ExpenseService};
//! use tally::storage::Store;
//!
//! let store = Store::open_in_memory()?;
//! CategoryService::new(&store).add("Food")?;
//! BudgetService::new(&store).set_budget_input("2025-01", "Food", "300")?;
//! ExpenseService::new(&store).record_input("2025-01-15", "320.50", "Food", None)?;
//!
//! let report = ReportEngine::new(&store).budget_vs_actual("2025-01")?;
//! assert_eq!(report.over_budget().count(), 1);
//! # Ok::<(), tally::TallyError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::TallyError;
