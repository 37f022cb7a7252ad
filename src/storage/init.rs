//! Storage initialization
//!
//! Handles first-run setup: writing the schema file the store is
//! bootstrapped from, and optionally loading demonstration data.

use crate::config::paths::TallyPaths;
use crate::error::TallyResult;
use crate::models::Money;
use crate::services::{BudgetService, CategoryService, ExpenseService};

use super::schema::write_bundled_schema;
use super::Store;

/// Demonstration categories, in creation order
const DEMO_CATEGORIES: &[&str] = &["Groceries", "Transport", "Leisure"];

/// Demonstration budgets: (month, category, limit in cents)
const DEMO_BUDGETS: &[(&str, &str, i64)] = &[
    ("2025-01", "Groceries", 30000),
    ("2025-01", "Transport", 10000),
];

/// Demonstration expenses: (date, amount in cents, category, description)
const DEMO_EXPENSES: &[(&str, i64, &str, &str)] = &[
    ("2025-01-10", 5050, "Groceries", "Supermarket"),
    ("2025-01-15", 27000, "Groceries", "Restaurant dinner"),
    ("2025-01-12", 2000, "Transport", "Fuel"),
];

/// Initialize storage for a fresh installation
///
/// Creates the data directory and writes the bundled schema unless a schema
/// file already exists. Returns true if a schema file was written.
pub fn initialize_storage(paths: &TallyPaths) -> TallyResult<bool> {
    paths.ensure_directories()?;
    let written = write_bundled_schema(&paths.schema_file())?;
    if written {
        tracing::info!(path = %paths.schema_file().display(), "schema file written");
    }
    Ok(written)
}

/// Load demonstration data into an empty store
///
/// Does nothing if any category exists. Returns true if data was loaded.
pub fn seed_demo_data(store: &Store) -> TallyResult<bool> {
    if store.categories().count()? > 0 {
        tracing::debug!("store already has categories, skipping demo data");
        return Ok(false);
    }

    let categories = CategoryService::new(store);
    for name in DEMO_CATEGORIES {
        categories.add(name)?;
    }

    let budgets = BudgetService::new(store);
    for (month, category, cents) in DEMO_BUDGETS {
        budgets.set_budget(month, category, Money::from_cents(*cents))?;
    }

    let expenses = ExpenseService::new(store);
    for (date, cents, category, description) in DEMO_EXPENSES {
        expenses.record(date, Money::from_cents(*cents), category, Some(*description))?;
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage_writes_schema() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(initialize_storage(&paths).unwrap());
        assert!(paths.is_initialized());
        assert!(!initialize_storage(&paths).unwrap());

        Store::open(&paths).unwrap();
    }

    #[test]
    fn test_seed_demo_data_once() {
        let store = Store::open_in_memory().unwrap();

        assert!(seed_demo_data(&store).unwrap());
        assert!(!seed_demo_data(&store).unwrap());

        assert_eq!(store.categories().count().unwrap(), 3);
        assert_eq!(store.budgets().count().unwrap(), 2);
        assert_eq!(store.expenses().count().unwrap(), 3);
    }

    #[test]
    fn test_seed_skipped_when_categories_exist() {
        let store = Store::open_in_memory().unwrap();
        CategoryService::new(&store).add("Rent").unwrap();

        assert!(!seed_demo_data(&store).unwrap());
        assert_eq!(store.expenses().count().unwrap(), 0);
    }
}
