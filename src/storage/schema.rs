//! Schema definition loading
//!
//! The store is bootstrapped from a schema file in the data directory.
//! A copy of the schema ships inside the binary so `tally init` can write it
//! out and tests can build in-memory stores.

use std::path::Path;

use crate::error::{TallyError, TallyResult};

/// The schema definition bundled with this build
pub const BUNDLED_SCHEMA: &str = include_str!("../../sql/schema.sql");

/// Read the schema definition from disk
///
/// A missing file is reported as `SchemaMissing`, which callers treat as a
/// fatal startup condition.
pub fn load_schema(path: &Path) -> TallyResult<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => TallyError::SchemaMissing(path.display().to_string()),
        _ => TallyError::Io(format!("Failed to read {}: {}", path.display(), e)),
    })
}

/// Write the bundled schema to `path` unless a file is already there
///
/// Returns true if the file was written.
pub fn write_bundled_schema(path: &Path) -> TallyResult<bool> {
    if path.exists() {
        return Ok(false);
    }
    std::fs::write(path, BUNDLED_SCHEMA)
        .map_err(|e| TallyError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
    Ok(true)
}
