//! `passman list` — display all items in a table.

use crate::cli::output;
use crate::cli::{Cli, Session};
use crate::errors::Result;
use crate::vault::Item;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let session = Session::open(cli)?;
    let vault = session.store.vault_of(&session.user)?;

    let items: Vec<&Item> = vault.list_items().iter().collect();

    output::info(&format!("{}'s vault — {} item(s)", session.user.name, items.len()));
    output::print_items_table(&items, session.ctx.settings.reveal_passwords);

    Ok(())
}
