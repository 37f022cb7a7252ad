//! Display formatting for terminal output
//!
//! Renders categories and report rows for the console.

pub mod category;
pub mod report;

pub use category::format_category_list;
pub use report::format_report;
