//! Category display formatting

use crate::models::Category;

/// Format a simple list of categories
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'tally category add <name>' to create one.\n"
            .to_string();
    }

    let id_width = categories
        .iter()
        .map(|c| c.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let mut output = String::new();
    output.push_str(&format!("{:<width$}  Name\n", "ID", width = id_width));
    for category in categories {
        output.push_str(&format!(
            "{:<width$}  {}\n",
            category.id.to_string(),
            category.name,
            width = id_width
        ));
    }

    output
}
