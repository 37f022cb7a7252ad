//! Paginated document export
//!
//! Renders a report as a fixed-width text document split into pages. Every
//! page repeats the title and column header and ends with a page number.
//! Pages are separated by a form feed so printers start each on a new sheet.

use std::path::Path;

use crate::display::report::separator;
use crate::error::{TallyError, TallyResult};
use crate::reports::TabularReport;

/// Lines used by the page header: title, date, blank, columns, rule
const HEADER_LINES: usize = 5;
/// Lines used by the page footer: blank, page number
const FOOTER_LINES: usize = 2;
/// Smallest page that still fits at least one row
const MIN_PAGE_LENGTH: usize = HEADER_LINES + FOOTER_LINES + 1;

const COLUMN_GAP: &str = "  ";

/// Page geometry and labels for document rendering
#[derive(Debug, Clone)]
pub struct DocumentLayout {
    /// Total lines per page, header and footer included
    pub page_length: usize,
    /// Generation date shown under the title
    pub generated_on: String,
    /// Currency symbol for amounts
    pub currency_symbol: String,
}

impl DocumentLayout {
    /// Layout stamped with today's date
    pub fn new(page_length: usize, currency_symbol: impl Into<String>) -> Self {
        Self {
            page_length,
            generated_on: chrono::Local::now().format("%Y-%m-%d").to_string(),
            currency_symbol: currency_symbol.into(),
        }
    }

    fn rows_per_page(&self) -> usize {
        self.page_length.max(MIN_PAGE_LENGTH) - HEADER_LINES - FOOTER_LINES
    }
}

/// Render a report as paginated text
pub fn render_document(report: &dyn TabularReport, layout: &DocumentLayout) -> String {
    let headers: Vec<String> = report.headers().iter().map(|h| h.to_string()).collect();
    let rows = report.table_rows(&layout.currency_symbol);
    let widths = column_widths(&headers, &rows);

    let body: Vec<String> = if report.is_empty() {
        vec![report.empty_message()]
    } else {
        let mut lines: Vec<String> = rows.iter().map(|row| format_line(row, &widths)).collect();
        if let Some(summary) = report.summary(&layout.currency_symbol) {
            lines.push(String::new());
            lines.push(summary);
        }
        lines
    };
    let header_line = format_line(&headers, &widths);
    let rule = separator(header_line.chars().count());

    let chunks: Vec<&[String]> = body.chunks(layout.rows_per_page()).collect();
    let page_count = chunks.len();

    chunks
        .iter()
        .enumerate()
        .map(|(i, lines)| {
            let mut page = String::new();
            page.push_str(&report.title());
            page.push('\n');
            page.push_str(&format!("Generated {}\n\n", layout.generated_on));
            page.push_str(&header_line);
            page.push('\n');
            page.push_str(&rule);
            page.push('\n');
            for line in lines.iter() {
                page.push_str(line);
                page.push('\n');
            }
            page.push('\n');
            page.push_str(&format!("Page {} of {}\n", i + 1, page_count));
            page
        })
        .collect::<Vec<_>>()
        .join("\u{000C}")
}

/// Render a report and write it to `path`
pub fn export_report_document(
    report: &dyn TabularReport,
    layout: &DocumentLayout,
    path: &Path,
) -> TallyResult<()> {
    let document = render_document(report, layout);
    std::fs::write(path, document).map_err(|e| {
        TallyError::Export(format!("Failed to write {}: {}", path.display(), e))
    })?;
    tracing::info!(path = %path.display(), "report exported to document");
    Ok(())
}

fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    line.trim_end().to_string()
}
