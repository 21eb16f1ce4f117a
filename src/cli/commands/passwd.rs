//! `passman passwd` — change an account password.

use crate::cli::output;
use crate::cli::{prompt_new_password, prompt_password, resolve_user, Cli, Context};
use crate::errors::Result;
use crate::store::Store;

/// Execute the `passwd` command.
///
/// The new password comes from `PASSMAN_NEW_PASSWORD` when set, otherwise
/// from a confirmed prompt.
pub fn execute(cli: &Cli) -> Result<()> {
    let ctx = Context::load(cli)?;
    let mut store = Store::load(&ctx.data_path)?;

    let name = resolve_user(cli)?;

    output::info("Enter your current account password.");
    let old_password = prompt_password("Current password")?;
    store.authenticate(&name, &old_password)?;

    output::info("Choose your new account password.");
    let new_password =
        prompt_new_password("PASSMAN_NEW_PASSWORD", ctx.settings.min_password_len)?;

    store.change_password(&name, &old_password, &new_password)?;
    store.save(&ctx.data_path)?;

    output::success(&format!("Password changed for '{name}'"));

    Ok(())
}
