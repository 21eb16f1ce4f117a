//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::errors::PassmanError;
use crate::vault::Item;

/// Shown in place of a password when passwords are not revealed.
const MASK: &str = "********";

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Render a recoverable error: duplicates are warnings, the rest errors.
pub fn report(err: &PassmanError) {
    if err.is_already_exists() {
        warning(&err.to_string());
    } else {
        error(&err.to_string());
    }
}

/// Print a table of items (Name, Website, Login, Password).
///
/// Passwords are masked unless `reveal` is set.
pub fn print_items_table(items: &[&Item], reveal: bool) {
    if items.is_empty() {
        info("No items to show.");
        tip("Run `passman add <NAME>` to store a credential.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Website", "Login", "Password"]);

    for item in items {
        let password = if reveal {
            item.password.clone()
        } else {
            MASK.to_string()
        };
        table.add_row(vec![
            item.name.clone(),
            item.website.clone(),
            item.login.clone(),
            password,
        ]);
    }

    println!("{table}");
}

/// Print every field of one item, password included.
pub fn print_item(item: &Item) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec!["Name", item.name.as_str()]);
    table.add_row(vec!["Website", item.website.as_str()]);
    table.add_row(vec!["Login", item.login.as_str()]);
    table.add_row(vec!["Password", item.password.as_str()]);
    println!("{table}");
}
