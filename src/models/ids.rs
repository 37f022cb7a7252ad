//! Strongly-typed ID wrappers for all entity types
//!
//! The store hands out surrogate integer keys. Wrapping them in newtypes
//! prevents accidentally mixing up IDs from different tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw row id
            pub const fn from_raw(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl rusqlite::ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
                self.0.to_sql()
            }
        }

        impl rusqlite::types::FromSql for $name {
            fn column_result(
                value: rusqlite::types::ValueRef<'_>,
            ) -> rusqlite::types::FromSqlResult<Self> {
                i64::column_result(value).map(Self)
            }
        }
    };
}

define_id!(CategoryId, "cat-");
define_id!(ExpenseId, "exp-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(CategoryId::from_raw(7).to_string(), "cat-7");
        assert_eq!(ExpenseId::from_raw(12).to_string(), "exp-12");
    }

    #[test]
    fn test_id_ordering_follows_insertion() {
        assert!(CategoryId::from_raw(1) < CategoryId::from_raw(2));
    }

    #[test]
    fn test_id_serialization() {
        let id = CategoryId::from_raw(3);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "3");
        let deserialized: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
