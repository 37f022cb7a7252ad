//! CSV Export functionality
//!
//! Amounts are written as plain two-decimal numbers with no currency symbol
//! so spreadsheets read them as numbers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{TallyError, TallyResult};
use crate::reports::TabularReport;

/// Write a report as CSV: one header record, then one record per row
pub fn write_report_csv<W: Write>(report: &dyn TabularReport, writer: W) -> TallyResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer.write_record(report.headers())?;
    for row in report.table_rows("") {
        csv_writer.write_record(&row)?;
    }

    csv_writer
        .flush()
        .map_err(|e| TallyError::Export(e.to_string()))?;
    Ok(())
}

/// Write a report as CSV to a file
pub fn export_report_csv(report: &dyn TabularReport, path: &Path) -> TallyResult<()> {
    let file = File::create(path).map_err(|e| {
        TallyError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    write_report_csv(report, BufWriter::new(file))?;
    tracing::info!(path = %path.display(), "report exported to CSV");
    Ok(())
}
