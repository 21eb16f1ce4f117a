//! `passman menu` — the interactive loop.
//!
//! Top level: Register / Login / Remove user / Exit.  After a login the
//! vault menu drives item operations for that user.  The store is loaded
//! once on entry and saved once when the loop ends, including when a
//! prompt fails (e.g. stdin closed).

use dialoguer::{Confirm, Select};

use crate::cli::output;
use crate::cli::{
    collect_item, prompt_item_password, prompt_new_password, prompt_password, prompt_text,
    validate_name, Cli, Context,
};
use crate::errors::{PassmanError, Result};
use crate::store::Store;
use crate::vault::{Item, User};

const MAIN_CHOICES: &[&str] = &["Register", "Login", "Remove user", "Exit"];

const VAULT_CHOICES: &[&str] = &[
    "Add item",
    "Show item",
    "Edit item",
    "Delete item",
    "Search items",
    "List items",
    "Change password",
    "Logout",
];

/// Execute the `menu` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let ctx = Context::load(cli)?;
    let mut store = Store::load(&ctx.data_path)?;

    output::info(&format!(
        "Passman — {} user(s) in {}",
        store.user_count(),
        ctx.data_path.display()
    ));

    let outcome = main_loop(&mut store, &ctx);

    store.save(&ctx.data_path)?;
    output::success("Saved.");

    outcome
}

fn main_loop(store: &mut Store, ctx: &Context) -> Result<()> {
    loop {
        let result = match choose("Passman", MAIN_CHOICES)? {
            0 => register(store, ctx),
            1 => login(store, ctx),
            2 => remove_user(store),
            _ => return Ok(()),
        };
        recover(result)?;
    }
}

fn register(store: &mut Store, ctx: &Context) -> Result<()> {
    let name = prompt_text("Enter your username", None)?;
    validate_name("user", &name)?;
    if store.find_user_by_name(&name).is_some() {
        return Err(PassmanError::UserAlreadyExists(name));
    }

    let password = prompt_new_password("PASSMAN_PASSWORD", ctx.settings.min_password_len)?;
    store.register_user(&name, &password)?;
    output::success(&format!("Registered user: {name}"));
    Ok(())
}

fn login(store: &mut Store, ctx: &Context) -> Result<()> {
    let name = prompt_text("Enter your username", None)?;
    let password = prompt_password("Enter account password")?;
    let user = store.authenticate(&name, &password)?;
    output::success(&format!("Logged in as {name}"));

    vault_loop(store, ctx, &user)
}

fn remove_user(store: &mut Store) -> Result<()> {
    let name = prompt_text("Enter your username", None)?;
    let password = prompt_password("Enter account password")?;
    store.authenticate(&name, &password)?;

    if !confirm(&format!("Remove user '{name}' and their vault?"))? {
        output::info("Cancelled.");
        return Ok(());
    }

    store.remove_user(&name, &password)?;
    output::success(&format!("User {name} removed"));
    Ok(())
}

fn vault_loop(store: &mut Store, ctx: &Context, user: &User) -> Result<()> {
    let reveal = ctx.settings.reveal_passwords;
    loop {
        let prompt = format!("{}'s vault", user.name);
        let result = match choose(&prompt, VAULT_CHOICES)? {
            0 => add_item(store, user),
            1 => show_item(store, user),
            2 => edit_item(store, user),
            3 => delete_item(store, user),
            4 => search_items(store, user, reveal),
            5 => {
                let items: Vec<&Item> = store.vault_of(user)?.list_items().iter().collect();
                output::print_items_table(&items, reveal);
                Ok(())
            }
            6 => change_password(store, ctx, user),
            _ => {
                output::info(&format!("Logged out {}", user.name));
                return Ok(());
            }
        };
        recover(result)?;
    }
}

fn add_item(store: &mut Store, user: &User) -> Result<()> {
    let name = prompt_text("Item name", None)?;
    validate_name("item", &name)?;
    if store.vault_of(user)?.contains(&name) {
        return Err(PassmanError::ItemAlreadyExists(name));
    }

    let item = collect_item(&name, None, None, None)?;
    store.vault_of_mut(user)?.add_item(item)?;
    output::success(&format!("Item '{name}' added"));
    Ok(())
}

fn show_item(store: &Store, user: &User) -> Result<()> {
    let name = prompt_text("Item name", None)?;
    let item = store
        .vault_of(user)?
        .get_item_by_name(&name)
        .ok_or(PassmanError::ItemNotFound(name))?;
    output::print_item(item);
    Ok(())
}

fn edit_item(store: &mut Store, user: &User) -> Result<()> {
    let name = prompt_text("Item name", None)?;
    let current = store
        .vault_of(user)?
        .get_item_by_name(&name)
        .cloned()
        .ok_or_else(|| PassmanError::ItemNotFound(name.clone()))?;

    output::tip("Press enter to keep the current value.");
    let new_name = prompt_text("Name", Some(current.name.as_str()))?;
    validate_name("item", &new_name)?;
    let website = prompt_text("Website", Some(current.website.as_str()))?;
    let login = prompt_text("Login", Some(current.login.as_str()))?;
    let password = if confirm("Change the password?")? {
        prompt_item_password(&new_name)?
    } else {
        current.password.clone()
    };

    store
        .vault_of_mut(user)?
        .edit_item(&name, Item::new(new_name, website, login, password))?;
    output::success(&format!("Item '{name}' updated"));
    Ok(())
}

fn delete_item(store: &mut Store, user: &User) -> Result<()> {
    let name = prompt_text("Item name", None)?;
    if !store.vault_of(user)?.contains(&name) {
        return Err(PassmanError::ItemNotFound(name));
    }
    if !confirm(&format!("Delete item '{name}'?"))? {
        output::info("Cancelled.");
        return Ok(());
    }

    store.vault_of_mut(user)?.remove_item(&name)?;
    output::success(&format!("Deleted item '{name}'"));
    Ok(())
}

fn search_items(store: &Store, user: &User, reveal: bool) -> Result<()> {
    let query = prompt_text("Search", None)?;
    let matches = store.vault_of(user)?.search_by_name(&query);
    output::print_items_table(&matches, reveal);
    Ok(())
}

fn change_password(store: &mut Store, ctx: &Context, user: &User) -> Result<()> {
    let old_password = prompt_password("Current password")?;
    store.authenticate(&user.name, &old_password)?;

    let new_password =
        prompt_new_password("PASSMAN_NEW_PASSWORD", ctx.settings.min_password_len)?;
    store.change_password(&user.name, &old_password, &new_password)?;
    output::success("Password changed");
    Ok(())
}

// ---------------------------------------------------------------------------
// Prompt plumbing
// ---------------------------------------------------------------------------

fn choose(prompt: &str, items: &[&str]) -> Result<usize> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(|e| PassmanError::CommandFailed(format!("menu prompt: {e}")))
}

fn confirm(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| PassmanError::CommandFailed(format!("confirm prompt: {e}")))
}

/// Render domain errors and keep looping; prompt and I/O failures end the
/// menu.
fn recover(result: Result<()>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e @ (PassmanError::CommandFailed(_) | PassmanError::Io(_))) => Err(e),
        Err(e) => {
            output::report(&e);
            Ok(())
        }
    }
}
