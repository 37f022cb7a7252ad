//! CLI commands for reports
//!
//! Prints reports to the terminal, or exports them to CSV and to a
//! paginated document.

use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::{Settings, TallyPaths};
use crate::display::format_report;
use crate::error::TallyResult;
use crate::export::{export_report_csv, export_report_document, DocumentLayout};
use crate::reports::{ReportEngine, TabularReport};
use crate::storage::Store;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Total spending per category
    Totals {
        #[command(flatten)]
        output: ReportOutput,
    },

    /// Monthly spending compared with budgets
    Budget {
        /// Month (YYYY-MM)
        month: String,

        #[command(flatten)]
        output: ReportOutput,
    },

    /// Every expense in date order
    #[command(alias = "expenses")]
    Ledger {
        #[command(flatten)]
        output: ReportOutput,
    },
}

/// Where a report goes besides the terminal
///
/// Relative paths are placed in the reports directory.
#[derive(clap::Args, Debug, Default)]
pub struct ReportOutput {
    /// Export to CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Export to a paginated text document
    #[arg(long)]
    pub document: Option<PathBuf>,
}

/// Handle report commands
pub fn handle_report_command(
    store: &Store,
    paths: &TallyPaths,
    settings: &Settings,
    cmd: ReportCommands,
) -> TallyResult<()> {
    let engine = ReportEngine::new(store);
    let target = OutputTarget { paths, settings };

    match cmd {
        ReportCommands::Totals { output } => target.emit(&engine.totals_by_category()?, output),
        ReportCommands::Budget { month, output } => {
            target.emit(&engine.budget_vs_actual(&month)?, output)
        }
        ReportCommands::Ledger { output } => {
            target.emit(&engine.chronological_ledger()?, output)
        }
    }
}

struct OutputTarget<'a> {
    paths: &'a TallyPaths,
    settings: &'a Settings,
}

impl OutputTarget<'_> {
    fn emit(&self, report: &dyn TabularReport, output: ReportOutput) -> TallyResult<()> {
        if output.csv.is_none() && output.document.is_none() {
            print!("{}", format_report(report, &self.settings.currency_symbol));
            return Ok(());
        }

        if let Some(path) = output.csv {
            let path = self.resolve(&path);
            export_report_csv(report, &path)?;
            println!("Report exported to: {}", path.display());
        }

        if let Some(path) = output.document {
            let path = self.resolve(&path);
            let layout = DocumentLayout::new(
                self.settings.page_length,
                self.settings.currency_symbol.clone(),
            );
            export_report_document(report, &layout, &path)?;
            println!("Report document written to: {}", path.display());
        }

        Ok(())
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        resolve_export_path(&self.paths.reports_dir(), path)
    }
}

/// Place relative export paths under the reports directory
pub(crate) fn resolve_export_path(reports_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        reports_dir.join(path)
    }
}
