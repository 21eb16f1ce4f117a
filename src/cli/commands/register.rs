//! `passman register` — create an account with an empty vault.

use crate::cli::output;
use crate::cli::{prompt_new_password, resolve_user, Cli, Context};
use crate::errors::{PassmanError, Result};
use crate::store::Store;

/// Execute the `register` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let ctx = Context::load(cli)?;
    let mut store = Store::load(&ctx.data_path)?;

    let name = resolve_user(cli)?;

    // Fail before asking for a password nobody will use.
    if store.find_user_by_name(&name).is_some() {
        return Err(PassmanError::UserAlreadyExists(name));
    }

    let password = prompt_new_password("PASSMAN_PASSWORD", ctx.settings.min_password_len)?;
    store.register_user(&name, &password)?;
    store.save(&ctx.data_path)?;

    output::success(&format!(
        "Registered user '{}' ({} total)",
        name,
        store.user_count()
    ));
    output::tip(&format!("Run `passman add <NAME> --user {name}` to store a credential."));

    Ok(())
}
