//! `passman get` — print a single item, password included.

use crate::cli::output;
use crate::cli::{Cli, Session};
use crate::errors::{PassmanError, Result};

/// Execute the `get` command.
pub fn execute(cli: &Cli, name: &str) -> Result<()> {
    let session = Session::open(cli)?;

    let item = session
        .store
        .vault_of(&session.user)?
        .get_item_by_name(name)
        .ok_or_else(|| PassmanError::ItemNotFound(name.to_string()))?;

    output::print_item(item);

    Ok(())
}
