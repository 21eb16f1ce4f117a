//! Account identity.
//!
//! A `User` is identified by its name alone: equality and hashing ignore
//! the password, so the name must be unique inside one store.  The store
//! uses the name directly as its map key.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

/// A registered account.
#[derive(Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique account name.
    pub name: String,

    /// Account password, stored as given.
    password: String,
}

impl User {
    /// Build a user. Uniqueness is checked by the store, not here.
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive password check.
    ///
    /// Compares in constant time so the check does not leak how many
    /// leading bytes matched.
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password.as_bytes().ct_eq(candidate.as_bytes()).into()
    }

    /// Replace the stored password.
    pub(crate) fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

// Never print the password.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
