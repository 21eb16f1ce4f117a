//! `passman delete` — remove an item from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{Cli, Session};
use crate::errors::{PassmanError, Result};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, name: &str, force: bool) -> Result<()> {
    let mut session = Session::open(cli)?;

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete item '{name}'?"))
            .default(false)
            .interact()
            .map_err(|e| PassmanError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    session
        .store
        .vault_of_mut(&session.user)?
        .remove_item(name)?;
    session.save()?;

    output::success(&format!("Deleted item '{name}'"));

    Ok(())
}
