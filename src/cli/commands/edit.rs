//! `passman edit` — replace an item's fields.
//!
//! Fields not given on the command line keep their current values; the
//! item is then replaced as a whole, at its original position.

use crate::cli::output;
use crate::cli::{validate_name, Cli, Session};
use crate::errors::{PassmanError, Result};
use crate::vault::Item;

/// Replacement values; `None` keeps the current field.
#[derive(Debug, Default)]
pub struct Changes<'a> {
    pub rename: Option<&'a str>,
    pub website: Option<&'a str>,
    pub login: Option<&'a str>,
    pub password: Option<&'a str>,
}

impl Changes<'_> {
    pub fn is_empty(&self) -> bool {
        self.rename.is_none()
            && self.website.is_none()
            && self.login.is_none()
            && self.password.is_none()
    }

    /// Merge the changes onto `current`.
    pub fn apply(&self, current: &Item) -> Item {
        Item::new(
            self.rename.unwrap_or(&current.name),
            self.website.unwrap_or(&current.website),
            self.login.unwrap_or(&current.login),
            self.password.unwrap_or(&current.password),
        )
    }
}

/// Execute the `edit` command.
pub fn execute(cli: &Cli, name: &str, changes: &Changes<'_>) -> Result<()> {
    if changes.is_empty() {
        return Err(PassmanError::CommandFailed(
            "nothing to change — pass --rename, --website, --login or --password".into(),
        ));
    }
    if let Some(new_name) = changes.rename {
        validate_name("item", new_name)?;
    }
    if changes.password.is_some() {
        output::warning("Password provided on command line — it may appear in shell history.");
    }

    let mut session = Session::open(cli)?;
    let vault = session.store.vault_of_mut(&session.user)?;

    let current = vault
        .get_item_by_name(name)
        .ok_or_else(|| PassmanError::ItemNotFound(name.to_string()))?;
    let replacement = changes.apply(current);
    let new_name = replacement.name.clone();

    vault.edit_item(name, replacement)?;
    session.save()?;

    if new_name == name {
        output::success(&format!("Item '{name}' updated"));
    } else {
        output::success(&format!("Item '{name}' updated and renamed to '{new_name}'"));
    }

    Ok(())
}
