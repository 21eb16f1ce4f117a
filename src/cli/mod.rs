//! CLI module — Clap argument parser, prompts, output helpers, and command
//! implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{PassmanError, Result};
use crate::store::Store;
use crate::vault::{Item, User};

/// Longest accepted user or item name.
const MAX_NAME_LEN: usize = 256;

/// Passman CLI: local password vault.
#[derive(Parser)]
#[command(name = "passman", about = "Local password vault", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Account to use (prompted when omitted)
    #[arg(short, long, env = "PASSMAN_USER", global = true)]
    pub user: Option<String>,

    /// Data file (default: data.dat, or `data_file` in .passman.toml)
    #[arg(long, env = "PASSMAN_DATA_FILE", global = true)]
    pub data_file: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Register a new account with an empty vault
    Register,

    /// Remove an account and its vault
    RemoveUser {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Change an account password
    Passwd,

    /// Add an item to the vault
    Add {
        /// Item name (e.g. email)
        name: String,
        /// Website the credential belongs to (prompted when omitted)
        #[arg(short, long)]
        website: Option<String>,
        /// Login used on the website (prompted when omitted)
        #[arg(short, long)]
        login: Option<String>,
        /// Item password (omit for a hidden prompt)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Show one item, including its password
    Get {
        /// Item name
        name: String,
    },

    /// Edit an item (unspecified fields keep their values)
    Edit {
        /// Current item name
        name: String,
        /// New item name
        #[arg(long)]
        rename: Option<String>,
        /// New website
        #[arg(short, long)]
        website: Option<String>,
        /// New login
        #[arg(short, long)]
        login: Option<String>,
        /// New password
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Delete an item
    Delete {
        /// Item name
        name: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Search items whose name contains QUERY
    Search {
        /// Case-sensitive substring (empty matches everything)
        #[arg(default_value = "")]
        query: String,
    },

    /// List all items in the vault
    List,

    /// Interactive menu
    Menu,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Settings and the resolved data file path for one invocation.
pub struct Context {
    pub settings: Settings,
    pub data_path: PathBuf,
}

impl Context {
    /// Load `.passman.toml` from the working directory and resolve the
    /// data file, honouring `--data-file`.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let settings = Settings::load(&cwd)?;
        let data_path = settings.data_path(&cwd, cli.data_file.as_deref());
        Ok(Self {
            settings,
            data_path,
        })
    }
}

/// An authenticated user and the loaded store they belong to.
pub struct Session {
    pub ctx: Context,
    pub store: Store,
    pub user: User,
}

impl Session {
    /// Load the store, then authenticate the `--user` account.
    pub fn open(cli: &Cli) -> Result<Self> {
        let ctx = Context::load(cli)?;
        let store = Store::load(&ctx.data_path)?;
        let name = resolve_user(cli)?;
        let password = prompt_password("Enter account password")?;
        let user = store.authenticate(&name, &password)?;
        Ok(Self { ctx, store, user })
    }

    /// Persist the store back to the data file.
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.ctx.data_path)
    }
}

/// The account name from `--user` / `PASSMAN_USER`, or an interactive prompt.
pub fn resolve_user(cli: &Cli) -> Result<String> {
    let name = match &cli.user {
        Some(u) => u.clone(),
        None => prompt_text("Enter your username", None)?,
    };
    validate_name("user", &name)?;
    Ok(name)
}

/// Get an existing password, trying in order:
/// 1. `PASSMAN_PASSWORD` env var (scripts/CI)
/// 2. Interactive hidden prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password(prompt: &str) -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSMAN_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| PassmanError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new account password with confirmation.
///
/// Respects `env_var` for scripted usage and enforces `min_len`.
pub fn prompt_new_password(env_var: &str, min_len: usize) -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(env_var) {
        if !pw.is_empty() {
            check_password_len(&pw, min_len)?;
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose account password")
            .with_confirmation(
                "Confirm account password",
                "Passwords do not match, try again",
            )
            .interact()
            .map_err(|e| PassmanError::CommandFailed(format!("password prompt: {e}")))?;

        if let Err(e) = check_password_len(&password, min_len) {
            output::warning(&format!("{e}. Try again."));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

/// Prompt for a line of text, with an optional pre-filled default.
pub fn prompt_text(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input = dialoguer::Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true);
    if let Some(d) = default {
        input = input.default(d.to_string());
    }
    input
        .interact_text()
        .map_err(|e| PassmanError::CommandFailed(format!("input prompt: {e}")))
}

/// Prompt for an item password (hidden, may be empty).
pub fn prompt_item_password(item_name: &str) -> Result<String> {
    dialoguer::Password::new()
        .with_prompt(format!("Enter password for {item_name}"))
        .allow_empty_password(true)
        .interact()
        .map_err(|e| PassmanError::CommandFailed(format!("password prompt: {e}")))
}

/// Build an item from the given fields, prompting for any that are missing.
pub fn collect_item(
    name: &str,
    website: Option<String>,
    login: Option<String>,
    password: Option<String>,
) -> Result<Item> {
    validate_name("item", name)?;
    let website = match website {
        Some(w) => w,
        None => prompt_text("Website", None)?,
    };
    let login = match login {
        Some(l) => l,
        None => prompt_text("Login", None)?,
    };
    let password = match password {
        Some(p) => p,
        None => prompt_item_password(name)?,
    };
    Ok(Item::new(name, website, login, password))
}

/// Validate a user or item name.
///
/// Must not be blank, must not contain control characters, and must be
/// at most 256 bytes long.
pub fn validate_name(kind: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PassmanError::InvalidInput(format!(
            "{kind} name cannot be empty"
        )));
    }

    if name.len() > MAX_NAME_LEN {
        return Err(PassmanError::InvalidInput(format!(
            "{kind} name cannot exceed {MAX_NAME_LEN} characters"
        )));
    }

    if name.chars().any(char::is_control) {
        return Err(PassmanError::InvalidInput(format!(
            "{kind} name contains control characters"
        )));
    }

    Ok(())
}

fn check_password_len(password: &str, min_len: usize) -> Result<()> {
    if password.chars().count() < min_len {
        return Err(PassmanError::InvalidInput(format!(
            "password must be at least {min_len} characters"
        )));
    }
    Ok(())
}
