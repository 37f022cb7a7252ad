use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::cli::{
    handle_budget_command, handle_category_command, handle_expense_command,
    handle_report_command, MenuSession,
};
use tally::config::{Settings, TallyPaths};
use tally::logging::init_logger;
use tally::storage::{initialize_storage, seed_demo_data, Store};

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Personal expense tracker with monthly category budgets",
    long_about = "Tally records expenses against spending categories, keeps a \
                  monthly limit per category, and reports totals, budget \
                  overruns and a dated ledger of everything spent."
)]
struct Cli {
    /// Data directory (defaults to the platform data directory)
    #[arg(long, global = true, env = "TALLY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu
    Menu,

    /// Category management commands
    #[command(subcommand)]
    Category(tally::cli::CategoryCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(tally::cli::ExpenseCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(tally::cli::BudgetCommands),

    /// Report commands
    #[command(subcommand)]
    Report(tally::cli::ReportCommands),

    /// Initialize the data directory and write the schema file
    Init {
        /// Load demonstration categories, budgets and expenses
        #[arg(long)]
        demo: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => TallyPaths::with_base_dir(dir),
        None => TallyPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Tally - personal expense tracker");
        println!();
        println!("Run 'tally --help' for usage information.");
        println!("Run 'tally menu' to launch the interactive menu.");
        return Ok(());
    };

    match command {
        Commands::Init { demo } => run_init(&paths, &settings, demo)?,
        Commands::Config => show_config(&paths, &settings),
        Commands::Menu => {
            let store = Store::open(&paths)?;
            let stdin = std::io::stdin();
            MenuSession::new(&store, &settings, stdin.lock(), std::io::stdout()).run()?;
        }
        Commands::Category(cmd) => handle_category_command(&Store::open(&paths)?, cmd)?,
        Commands::Expense(cmd) => handle_expense_command(&Store::open(&paths)?, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&Store::open(&paths)?, cmd)?,
        Commands::Report(cmd) => {
            handle_report_command(&Store::open(&paths)?, &paths, &settings, cmd)?
        }
    }

    Ok(())
}

fn run_init(paths: &TallyPaths, settings: &Settings, demo: bool) -> Result<()> {
    println!("Initializing Tally at: {}", paths.base_dir().display());
    if !initialize_storage(paths)? {
        println!("Schema file already present, keeping it.");
    }
    if !paths.settings_file().exists() {
        settings.save(paths)?;
    }

    let store = Store::open(paths)?;
    if let Some(path) = store.path() {
        println!("Database: {}", path.display());
    }
    if demo {
        if seed_demo_data(&store)? {
            println!("Demo data loaded: Groceries, Transport and Leisure for 2025-01.");
        } else {
            println!("Categories already exist, demo data skipped.");
        }
    }

    println!("Initialization complete!");
    println!();
    println!("Run 'tally category add <name>' to create your first category.");
    Ok(())
}

fn show_config(paths: &TallyPaths, settings: &Settings) {
    println!("Tally Configuration");
    println!("===================");
    println!("Data directory:    {}", paths.base_dir().display());
    println!("Database:          {}", paths.database_file().display());
    println!("Schema:            {}", paths.schema_file().display());
    println!("Reports directory: {}", paths.reports_dir().display());
    println!("Initialized:       {}", paths.is_initialized());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Page length:     {}", settings.page_length);
}
