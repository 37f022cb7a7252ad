//! Export functionality for Tally
//!
//! Writes reports to CSV files and to paginated text documents.

pub mod csv;
pub mod document;

pub use self::csv::{export_report_csv, write_report_csv};
pub use document::{export_report_document, render_document, DocumentLayout};
