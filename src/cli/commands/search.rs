//! `passman search` — list items whose name contains a substring.

use crate::cli::output;
use crate::cli::{Cli, Session};
use crate::errors::Result;

/// Execute the `search` command.
pub fn execute(cli: &Cli, query: &str) -> Result<()> {
    let session = Session::open(cli)?;
    let matches = session.store.vault_of(&session.user)?.search_by_name(query);

    output::info(&format!("{} match(es) for '{}'", matches.len(), query));
    output::print_items_table(&matches, session.ctx.settings.reveal_passwords);

    Ok(())
}
