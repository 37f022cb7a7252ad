//! Interactive menu
//!
//! A numbered menu over any line-oriented input and output. A failed
//! operation prints its error and returns to the menu; only a failure of
//! the terminal itself ends the session.

use std::io::{BufRead, Write};

use crate::cli::expense::today;
use crate::config::Settings;
use crate::display::format_report;
use crate::error::TallyResult;
use crate::reports::{ReportEngine, TabularReport};
use crate::services::{BudgetService, CategoryService, ExpenseService};
use crate::storage::Store;

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddCategory,
    RecordExpense,
    SetBudget,
    Reports,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        Self::AddCategory,
        Self::RecordExpense,
        Self::SetBudget,
        Self::Reports,
        Self::Quit,
    ];

    /// Key the user types to pick this entry
    pub fn key(self) -> &'static str {
        match self {
            Self::AddCategory => "1",
            Self::RecordExpense => "2",
            Self::SetBudget => "3",
            Self::Reports => "4",
            Self::Quit => "5",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AddCategory => "Add category",
            Self::RecordExpense => "Record expense",
            Self::SetBudget => "Set monthly budget",
            Self::Reports => "View reports",
            Self::Quit => "Exit",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.into_iter().find(|choice| choice.key() == input)
    }
}

/// Report submenu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportChoice {
    TotalsByCategory,
    BudgetVsActual,
    Ledger,
    Back,
}

impl ReportChoice {
    pub const ALL: [ReportChoice; 4] = [
        Self::TotalsByCategory,
        Self::BudgetVsActual,
        Self::Ledger,
        Self::Back,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::TotalsByCategory => "1",
            Self::BudgetVsActual => "2",
            Self::Ledger => "3",
            Self::Back => "4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::TotalsByCategory => "Total spending by category",
            Self::BudgetVsActual => "Monthly spending vs budget",
            Self::Ledger => "All expenses by date",
            Self::Back => "Back to main menu",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.into_iter().find(|choice| choice.key() == input)
    }
}

/// What the loop does after an entry finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// One interactive session bound to a store
pub struct MenuSession<'a, R, W> {
    store: &'a Store,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new(store: &'a Store, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            store,
            settings,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> TallyResult<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "=== Expense Tracker ===")?;
            for choice in MenuChoice::ALL {
                writeln!(self.output, "{}. {}", choice.key(), choice.label())?;
            }

            let Some(line) = self.prompt("Choose an option: ")? else {
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };

            if self.dispatch(choice)? == Flow::Quit {
                break;
            }
        }

        writeln!(self.output, "Goodbye.")?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> TallyResult<Flow> {
        let result = match choice {
            MenuChoice::AddCategory => self.add_category(),
            MenuChoice::RecordExpense => self.record_expense(),
            MenuChoice::SetBudget => self.set_budget(),
            MenuChoice::Reports => self.reports(),
            MenuChoice::Quit => return Ok(Flow::Quit),
        };

        match result {
            Ok(flow) => Ok(flow),
            Err(err) => {
                if err.is_validation() {
                    tracing::debug!(error = %err, ?choice, "menu input rejected");
                } else {
                    tracing::warn!(error = %err, ?choice, "menu operation failed");
                }
                writeln!(self.output, "Error: {}", err)?;
                if err.is_not_found() {
                    writeln!(
                        self.output,
                        "Categories are matched exactly; add it first with option {}.",
                        MenuChoice::AddCategory.key()
                    )?;
                }
                Ok(Flow::Continue)
            }
        }
    }

    fn add_category(&mut self) -> TallyResult<Flow> {
        let Some(name) = self.prompt("Category name: ")? else {
            return Ok(Flow::Quit);
        };

        let category = CategoryService::new(self.store).add(&name)?;
        writeln!(self.output, "Category '{}' added.", category.name)?;
        Ok(Flow::Continue)
    }

    fn record_expense(&mut self) -> TallyResult<Flow> {
        let Some(date) = self.prompt("Date (YYYY-MM-DD, blank for today): ")? else {
            return Ok(Flow::Quit);
        };
        let date = if date.is_empty() { today() } else { date };

        let Some(amount) = self.prompt("Amount: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(category) = self.prompt("Category: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(description) = self.prompt("Description (optional): ")? else {
            return Ok(Flow::Quit);
        };

        let expense = ExpenseService::new(self.store).record_input(
            &date,
            &amount,
            &category,
            Some(description.as_str()),
        )?;
        writeln!(
            self.output,
            "Expense of {} recorded on {}.",
            expense
                .amount
                .format_with_symbol(&self.settings.currency_symbol),
            expense.date
        )?;
        Ok(Flow::Continue)
    }

    fn set_budget(&mut self) -> TallyResult<Flow> {
        let Some(month) = self.prompt("Month (YYYY-MM): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(category) = self.prompt("Category: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(amount) = self.prompt("Limit: ")? else {
            return Ok(Flow::Quit);
        };

        let budget = BudgetService::new(self.store).set_budget_input(&month, &category, &amount)?;
        writeln!(
            self.output,
            "Budget of {} set for '{}' in {}.",
            budget
                .limit_amount
                .format_with_symbol(&self.settings.currency_symbol),
            category,
            budget.month
        )?;
        Ok(Flow::Continue)
    }

    fn reports(&mut self) -> TallyResult<Flow> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "--- Reports ---")?;
            for choice in ReportChoice::ALL {
                writeln!(self.output, "{}. {}", choice.key(), choice.label())?;
            }

            let Some(line) = self.prompt("Choose a report: ")? else {
                return Ok(Flow::Quit);
            };

            let engine = ReportEngine::new(self.store);
            match ReportChoice::parse(&line) {
                Some(ReportChoice::TotalsByCategory) => {
                    self.show(&engine.totals_by_category()?)?;
                }
                Some(ReportChoice::BudgetVsActual) => {
                    let Some(month) = self.prompt("Month (YYYY-MM): ")? else {
                        return Ok(Flow::Quit);
                    };
                    self.show(&engine.budget_vs_actual(&month)?)?;
                }
                Some(ReportChoice::Ledger) => {
                    self.show(&engine.chronological_ledger()?)?;
                }
                Some(ReportChoice::Back) => return Ok(Flow::Continue),
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    fn show(&mut self, report: &dyn TabularReport) -> TallyResult<()> {
        write!(
            self.output,
            "{}",
            format_report(report, &self.settings.currency_symbol)
        )?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line, `None` at end of input
    fn prompt(&mut self, label: &str) -> TallyResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
