//! High-level account operations used by CLI commands.
//!
//! `Store` owns every user and the vault each one owns.  The user name is
//! the map key, so lookups, uniqueness and removal all go through it.
//! A failing operation never leaves a partial change behind.

use std::collections::BTreeMap;
use std::path::Path;

use super::format;
use crate::errors::{PassmanError, Result};
use crate::vault::{User, Vault};

/// A user together with the vault they own.
#[derive(Debug)]
struct Account {
    user: User,
    vault: Vault,
}

/// The full user → vault table.
///
/// Load one with `Store::load`, mutate it through the account methods and
/// the vaults returned by `vault_of_mut`, then persist with `Store::save`.
#[derive(Debug, Default)]
pub struct Store {
    accounts: BTreeMap<String, Account>,
}

impl Store {
    // ------------------------------------------------------------------
    // Construction and persistence
    // ------------------------------------------------------------------

    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the store persisted at `path`.
    ///
    /// A missing file yields an empty store.  A file that exists but cannot
    /// be parsed is `CorruptData`; nothing is guessed or repaired.
    pub fn load(path: &Path) -> Result<Self> {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no data file, starting empty");
                return Ok(Self::new());
            }
            Err(e) => return Err(e.into()),
        };
        let store = format::decode(&data)?;

        tracing::debug!(
            path = %path.display(),
            users = store.user_count(),
            "data file loaded"
        );
        Ok(store)
    }

    /// Serialize the whole store to `path`, replacing prior content.
    ///
    /// The write goes through a temp file + rename, so a crash leaves
    /// either the old file or the new one, never a torn one.
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = format::encode(self)?;
        format::write_atomic(path, &bytes)?;

        tracing::debug!(
            path = %path.display(),
            users = self.user_count(),
            bytes = bytes.len(),
            "data file saved"
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Account operations
    // ------------------------------------------------------------------

    /// Look a user up by name.
    pub fn find_user_by_name(&self, name: &str) -> Option<&User> {
        self.accounts.get(name).map(|a| &a.user)
    }

    /// Create a user with an empty vault. Fails if the name is taken.
    pub fn register_user(&mut self, name: &str, password: &str) -> Result<User> {
        if self.find_user_by_name(name).is_some() {
            return Err(PassmanError::UserAlreadyExists(name.to_string()));
        }

        let user = User::new(name, password);
        self.insert_account(user.clone(), Vault::new());

        tracing::info!(user = %name, "user registered");
        Ok(user)
    }

    /// Check a name/password pair and return the matching user.
    ///
    /// An unknown name is `InvalidUsername`; a known name with the wrong
    /// password is `InvalidPassword`.
    pub fn authenticate(&self, name: &str, password: &str) -> Result<User> {
        self.verified(name, password).map(|a| a.user.clone())
    }

    /// Delete a user and their vault after verifying the password.
    pub fn remove_user(&mut self, name: &str, password: &str) -> Result<()> {
        self.verified(name, password)?;
        self.accounts.remove(name);

        tracing::info!(user = %name, "user removed");
        Ok(())
    }

    /// Replace a user's password after verifying the current one.
    pub fn change_password(
        &mut self,
        name: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<()> {
        self.verified(name, old_password)?;
        if let Some(account) = self.accounts.get_mut(name) {
            account.user.set_password(new_password);
        }

        tracing::info!(user = %name, "password changed");
        Ok(())
    }

    /// The vault owned by `user`.
    ///
    /// Only fails if the user was never in this store or has since been
    /// removed.
    pub fn vault_of(&self, user: &User) -> Result<&Vault> {
        self.accounts
            .get(&user.name)
            .map(|a| &a.vault)
            .ok_or_else(|| PassmanError::InvalidUsername(user.name.clone()))
    }

    /// Mutable access to the vault owned by `user`.
    pub fn vault_of_mut(&mut self, user: &User) -> Result<&mut Vault> {
        self.accounts
            .get_mut(&user.name)
            .map(|a| &mut a.vault)
            .ok_or_else(|| PassmanError::InvalidUsername(user.name.clone()))
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// All user names, sorted.
    pub fn user_names(&self) -> Vec<&str> {
        self.accounts.keys().map(String::as_str).collect()
    }

    /// Number of registered users.
    pub fn user_count(&self) -> usize {
        self.accounts.len()
    }

    /// Every user with their vault, sorted by user name.
    pub fn accounts(&self) -> impl Iterator<Item = (&User, &Vault)> {
        self.accounts.values().map(|a| (&a.user, &a.vault))
    }

    /// Insert a decoded account. Returns `false` (and changes nothing) if
    /// the name is already present.
    pub(crate) fn insert_account(&mut self, user: User, vault: Vault) -> bool {
        if self.accounts.contains_key(&user.name) {
            return false;
        }
        self.accounts.insert(user.name.clone(), Account { user, vault });
        true
    }

    fn verified(&self, name: &str, password: &str) -> Result<&Account> {
        let account = self
            .accounts
            .get(name)
            .ok_or_else(|| PassmanError::InvalidUsername(name.to_string()))?;

        if !account.user.verify_password(password) {
            tracing::debug!(user = %name, "password verification failed");
            return Err(PassmanError::InvalidPassword);
        }
        Ok(account)
    }
}
