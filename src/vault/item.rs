//! A named credential record stored inside a vault.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One credential: the site, the login used there, and its password.
///
/// Items compare equal when their names match; the other fields are
/// payload.  Use [`Item::same_fields`] to compare full contents.
#[derive(Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique name within the owning vault (e.g. "email").
    pub name: String,
    pub website: String,
    pub login: String,
    pub password: String,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        website: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            website: website.into(),
            login: login.into(),
            password: password.into(),
        }
    }

    /// Returns `true` if all four fields are identical.
    pub fn same_fields(&self, other: &Item) -> bool {
        self.name == other.name
            && self.website == other.website
            && self.login == other.login
            && self.password == other.password
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Item {}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("name", &self.name)
            .field("website", &self.website)
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
