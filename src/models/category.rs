//! Category model
//!
//! A category is a named spending bucket. Names are unique and categories are
//! never renamed or removed once created.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use crate::error::{TallyError, TallyResult};

/// A spending category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Surrogate key assigned by the store
    pub id: CategoryId,

    /// Category name (trimmed, non-empty, unique)
    pub name: String,
}

impl Category {
    /// Create a category value from a stored row
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Normalize a user-supplied name, rejecting blank input
    pub fn normalize_name(name: &str) -> TallyResult<&str> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TallyError::EmptyName);
        }
        Ok(trimmed)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
