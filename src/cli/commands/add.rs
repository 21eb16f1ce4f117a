//! `passman add` — store a new item in the vault.

use crate::cli::output;
use crate::cli::{collect_item, Cli, Session};
use crate::errors::Result;

/// Execute the `add` command.
pub fn execute(
    cli: &Cli,
    name: &str,
    website: Option<&str>,
    login: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    let mut session = Session::open(cli)?;

    if password.is_some() {
        output::warning("Password provided on command line — it may appear in shell history.");
    }

    let item = collect_item(
        name,
        website.map(str::to_string),
        login.map(str::to_string),
        password.map(str::to_string),
    )?;

    let vault = session.store.vault_of_mut(&session.user)?;
    vault.add_item(item)?;
    let count = vault.len();
    session.save()?;

    output::success(&format!(
        "Item '{}' added to {}'s vault ({} total)",
        name, session.user.name, count
    ));

    Ok(())
}
