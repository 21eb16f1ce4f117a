//! `passman remove-user` — delete an account together with its vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{prompt_password, resolve_user, Cli, Context};
use crate::errors::{PassmanError, Result};
use crate::store::Store;

/// Execute the `remove-user` command.
pub fn execute(cli: &Cli, force: bool) -> Result<()> {
    let ctx = Context::load(cli)?;
    let mut store = Store::load(&ctx.data_path)?;

    let name = resolve_user(cli)?;
    let password = prompt_password("Enter account password")?;

    // Verify before asking for confirmation so a typo fails fast.
    store.authenticate(&name, &password)?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove user '{name}' and every item in their vault?"))
            .default(false)
            .interact()
            .map_err(|e| PassmanError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    store.remove_user(&name, &password)?;
    store.save(&ctx.data_path)?;

    output::success(&format!("User '{name}' removed"));

    Ok(())
}
