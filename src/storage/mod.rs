//! Storage layer for Tally
//!
//! A single SQLite connection holds the three related tables. Each table is
//! reached through a lightweight repository that borrows the connection.
//! Foreign keys are switched on for every connection, so writes that bypass
//! the service layer's validation are still rejected by the store.

pub mod budgets;
pub mod categories;
pub mod expenses;
pub mod init;
pub mod schema;

pub use budgets::{BudgetRepository, UpsertOutcome};
pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use init::{initialize_storage, seed_demo_data};
pub use schema::BUNDLED_SCHEMA;

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::config::paths::TallyPaths;
use crate::error::TallyResult;

/// Main storage handle that provides access to all repositories
pub struct Store {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Store {
    /// Open the database under the configured data directory
    ///
    /// The schema is read from `schema.sql` next to the database. If it is
    /// missing this fails with `SchemaMissing` before any table is touched.
    pub fn open(paths: &TallyPaths) -> TallyResult<Self> {
        let schema = schema::load_schema(&paths.schema_file())?;
        paths.ensure_directories()?;
        Self::open_with_schema(&paths.database_file(), &schema)
    }

    /// Open (or create) a database file and apply the given schema
    pub fn open_with_schema(db_path: &Path, schema_sql: &str) -> TallyResult<Self> {
        let conn = Connection::open(db_path)?;
        bootstrap(&conn, schema_sql)?;
        tracing::debug!(path = %db_path.display(), "opened store");

        Ok(Self {
            conn,
            path: Some(db_path.to_path_buf()),
        })
    }

    /// Open a private in-memory store using the bundled schema
    pub fn open_in_memory() -> TallyResult<Self> {
        let conn = Connection::open_in_memory()?;
        bootstrap(&conn, BUNDLED_SCHEMA)?;
        Ok(Self { conn, path: None })
    }

    /// Location of the database file, if it is file backed
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Category table access
    pub fn categories(&self) -> CategoryRepository<'_> {
        CategoryRepository::new(&self.conn)
    }

    /// Expense table access
    pub fn expenses(&self) -> ExpenseRepository<'_> {
        ExpenseRepository::new(&self.conn)
    }

    /// Budget table access
    pub fn budgets(&self) -> BudgetRepository<'_> {
        BudgetRepository::new(&self.conn)
    }

    /// Raw connection for read-only report queries
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn bootstrap(conn: &Connection, schema_sql: &str) -> TallyResult<()> {
    conn.pragma_update(None, "foreign_keys", true)?;
    conn.execute_batch(schema_sql)?;
    Ok(())
}
