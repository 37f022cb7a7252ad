//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::{TallyError, TallyResult};
use crate::services::CategoryService;
use crate::storage::Store;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Create a new category
    #[command(alias = "create")]
    Add {
        /// Category name (surrounding whitespace is trimmed)
        name: String,
    },

    /// List all categories
    List,

    /// Show a category by exact name
    Show {
        /// Category name (case-sensitive)
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(store: &Store, cmd: CategoryCommands) -> TallyResult<()> {
    let service = CategoryService::new(store);

    match cmd {
        CategoryCommands::Add { name } => {
            let category = service.add(&name)?;
            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::List => {
            let categories = service.list()?;
            print!("{}", format_category_list(&categories));
        }

        CategoryCommands::Show { name } => {
            let category = service
                .find_by_name(&name)?
                .ok_or(TallyError::UnknownCategory(name))?;
            println!("Category: {}", category.name);
            println!("  ID: {}", category.id);
        }
    }

    Ok(())
}
