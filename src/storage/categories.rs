//! Category repository
//!
//! Categories are append-only: there is no update or delete.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::TallyResult;
use crate::models::{Category, CategoryId};

/// Repository for category persistence
pub struct CategoryRepository<'a> {
    conn: &'a Connection,
}

impl<'a> CategoryRepository<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a category and return it with its assigned id
    ///
    /// The name is stored as given; a duplicate violates the UNIQUE
    /// constraint and surfaces as `IntegrityViolation`.
    pub fn insert(&self, name: &str) -> TallyResult<Category> {
        self.conn
            .execute("INSERT INTO categories (name) VALUES (?1)", params![name])?;
        let id = CategoryId::from_raw(self.conn.last_insert_rowid());
        Ok(Category::new(id, name))
    }

    /// Get a category by id
    pub fn get(&self, id: CategoryId) -> TallyResult<Option<Category>> {
        let category = self
            .conn
            .query_row(
                "SELECT id, name FROM categories WHERE id = ?1",
                params![id],
                map_category,
            )
            .optional()?;
        Ok(category)
    }

    /// Get a category by exact, case-sensitive name
    pub fn get_by_name(&self, name: &str) -> TallyResult<Option<Category>> {
        let category = self
            .conn
            .query_row(
                "SELECT id, name FROM categories WHERE name = ?1",
                params![name],
                map_category,
            )
            .optional()?;
        Ok(category)
    }

    /// Get all categories in insertion order
    pub fn get_all(&self) -> TallyResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories ORDER BY id")?;
        let categories = stmt
            .query_map([], map_category)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    /// Number of stored categories
    pub fn count(&self) -> TallyResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn map_category(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

#[cfg(test)]
mod tests {
    use crate::error::TallyError;
    use crate::storage::Store;

    #[test]
    fn test_insert_and_get() {
        let store = Store::open_in_memory().unwrap();
        let repo = store.categories();

        let food = repo.insert("Food").unwrap();
        let transport = repo.insert("Transport").unwrap();
        assert!(food.id < transport.id);

        assert_eq!(repo.get(food.id).unwrap(), Some(food.clone()));
        assert_eq!(repo.get_by_name("Transport").unwrap(), Some(transport));
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let store = Store::open_in_memory().unwrap();
        store.categories().insert("Food").unwrap();

        assert!(store.categories().get_by_name("food").unwrap().is_none());
        assert!(store.categories().get_by_name("Food ").unwrap().is_none());
    }

    #[test]
    fn test_unique_name_enforced_by_store() {
        let store = Store::open_in_memory().unwrap();
        store.categories().insert("Food").unwrap();

        let err = store.categories().insert("Food").unwrap_err();
        assert!(matches!(err, TallyError::IntegrityViolation(_)));
        assert_eq!(store.categories().count().unwrap(), 1);
    }

    #[test]
    fn test_get_all_in_insertion_order() {
        let store = Store::open_in_memory().unwrap();
        for name in ["Rent", "Food", "Books"] {
            store.categories().insert(name).unwrap();
        }

        let names: Vec<_> = store
            .categories()
            .get_all()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Rent", "Food", "Books"]);
    }
}
