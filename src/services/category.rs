//! Category service
//!
//! Creates and looks up spending categories.

use crate::error::{TallyError, TallyResult};
use crate::models::{Category, CategoryId};
use crate::storage::Store;

/// Service for category management
pub struct CategoryService<'a> {
    store: &'a Store,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Create a new category
    ///
    /// The name is trimmed first. Blank names fail with `EmptyName`, names
    /// already taken fail with `DuplicateCategory`.
    pub fn add(&self, name: &str) -> TallyResult<Category> {
        let name = Category::normalize_name(name)?;

        if self.store.categories().get_by_name(name)?.is_some() {
            return Err(TallyError::DuplicateCategory(name.to_string()));
        }

        let category = self.store.categories().insert(name)?;
        tracing::info!(id = %category.id, name = %category.name, "category created");

        Ok(category)
    }

    /// Find a category by exact, case-sensitive name
    pub fn find_by_name(&self, name: &str) -> TallyResult<Option<Category>> {
        self.store.categories().get_by_name(name)
    }

    /// Find a category by name, failing with `UnknownCategory` if absent
    pub fn resolve(&self, name: &str) -> TallyResult<Category> {
        self.find_by_name(name)?
            .ok_or_else(|| TallyError::UnknownCategory(name.to_string()))
    }

    /// Get a category by id
    pub fn get(&self, id: CategoryId) -> TallyResult<Option<Category>> {
        self.store.categories().get(id)
    }

    /// List all categories in creation order
    pub fn list(&self) -> TallyResult<Vec<Category>> {
        self.store.categories().get_all()
    }
}
