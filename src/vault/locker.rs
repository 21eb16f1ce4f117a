//! `Vault` — the ordered item collection owned by one user.
//!
//! Items keep their insertion order (listing and search report them in
//! that order) and names are unique within a vault.  Every method that
//! fails leaves the vault exactly as it was.

use serde::{Deserialize, Serialize};

use super::item::Item;
use crate::errors::{PassmanError, Result};

/// An ordered, name-unique sequence of items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vault {
    items: Vec<Item>,
}

impl Vault {
    /// Create an empty vault.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vault from stored items, rejecting duplicate names.
    ///
    /// Returns the first duplicated name on failure.
    pub(crate) fn from_items(items: Vec<Item>) -> std::result::Result<Self, String> {
        let mut vault = Self::new();
        for item in items {
            if vault.contains(&item.name) {
                return Err(item.name);
            }
            vault.items.push(item);
        }
        Ok(vault)
    }

    /// Append an item. Fails if the name is already taken.
    pub fn add_item(&mut self, item: Item) -> Result<()> {
        if self.contains(&item.name) {
            return Err(PassmanError::ItemAlreadyExists(item.name));
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove the item called `name`, keeping the others in order.
    pub fn remove_item(&mut self, name: &str) -> Result<Item> {
        let idx = self
            .position(name)
            .ok_or_else(|| PassmanError::ItemNotFound(name.to_string()))?;
        Ok(self.items.remove(idx))
    }

    /// First item whose name equals `name`.
    pub fn get_item_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Replace all four fields of the item called `target` in place.
    ///
    /// A rename onto a name held by a different item is rejected with
    /// `ItemAlreadyExists`; the vault never holds two items with one name.
    pub fn edit_item(&mut self, target: &str, replacement: Item) -> Result<()> {
        let idx = self
            .position(target)
            .ok_or_else(|| PassmanError::ItemNotFound(target.to_string()))?;

        if replacement.name != target && self.contains(&replacement.name) {
            return Err(PassmanError::ItemAlreadyExists(replacement.name));
        }

        self.items[idx] = replacement;
        Ok(())
    }

    /// All items whose name contains `query` (case-sensitive), in vault
    /// order. An empty query matches everything.
    pub fn search_by_name(&self, query: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|i| i.name.contains(query))
            .collect()
    }

    /// All items in vault order.
    pub fn list_items(&self) -> &[Item] {
        &self.items
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|i| i.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vault {
        let mut v = Vault::new();
        v.add_item(Item::new("email", "mail.com", "alice", "secret"))
            .unwrap();
        v.add_item(Item::new("bank", "bank.com", "alice01", "b4nk"))
            .unwrap();
        v.add_item(Item::new("work-email", "corp.com", "a.smith", "w0rk"))
            .unwrap();
        v
    }

    fn names(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn add_then_get_returns_identical_fields() {
        let mut v = Vault::new();
        let item = Item::new("email", "mail.com", "alice", "secret");
        v.add_item(item.clone()).unwrap();

        let got = v.get_item_by_name("email").unwrap();
        assert!(got.same_fields(&item));
    }

    #[test]
    fn add_duplicate_fails_and_leaves_vault_unchanged() {
        let mut v = sample();
        let before: Vec<Item> = v.list_items().to_vec();

        let err = v
            .add_item(Item::new("bank", "evil.com", "mallory", "x"))
            .unwrap_err();
        assert!(matches!(err, PassmanError::ItemAlreadyExists(ref n) if n == "bank"));

        assert_eq!(v.len(), before.len());
        for (a, b) in v.list_items().iter().zip(&before) {
            assert!(a.same_fields(b));
        }
    }

    #[test]
    fn list_preserves_insertion_order() {
        let v = sample();
        let order: Vec<&str> = v.list_items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(order, ["email", "bank", "work-email"]);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut v = sample();
        let removed = v.remove_item("bank").unwrap();
        assert_eq!(removed.login, "alice01");

        let order: Vec<&str> = v.list_items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(order, ["email", "work-email"]);
    }

    #[test]
    fn remove_missing_is_not_found() {
        let mut v = sample();
        let err = v.remove_item("nope").unwrap_err();
        assert!(matches!(err, PassmanError::ItemNotFound(_)));
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn get_missing_is_none() {
        assert!(sample().get_item_by_name("Email").is_none());
    }

    #[test]
    fn edit_replaces_fields_in_place() {
        let mut v = sample();
        v.edit_item("email", Item::new("email", "mail.com", "alice", "secret2"))
            .unwrap();

        let item = v.get_item_by_name("email").unwrap();
        assert_eq!(item.website, "mail.com");
        assert_eq!(item.login, "alice");
        assert_eq!(item.password, "secret2");
        assert_eq!(v.list_items()[0].name, "email");
    }

    #[test]
    fn edit_can_rename_keeping_position() {
        let mut v = sample();
        v.edit_item("bank", Item::new("savings", "bank.com", "alice01", "b4nk"))
            .unwrap();

        assert!(v.get_item_by_name("bank").is_none());
        assert_eq!(v.list_items()[1].name, "savings");
    }

    #[test]
    fn edit_rejects_rename_collision() {
        let mut v = sample();
        let err = v
            .edit_item("bank", Item::new("email", "x", "y", "z"))
            .unwrap_err();
        assert!(matches!(err, PassmanError::ItemAlreadyExists(ref n) if n == "email"));

        // Nothing changed.
        assert_eq!(v.get_item_by_name("bank").unwrap().website, "bank.com");
        assert_eq!(v.get_item_by_name("email").unwrap().website, "mail.com");
    }

    #[test]
    fn edit_missing_is_not_found() {
        let mut v = sample();
        let err = v
            .edit_item("ghost", Item::new("ghost", "", "", ""))
            .unwrap_err();
        assert!(matches!(err, PassmanError::ItemNotFound(_)));
    }

    #[test]
    fn search_is_case_sensitive_substring() {
        let v = sample();
        assert_eq!(names(&v.search_by_name("email")), ["email", "work-email"]);
        assert_eq!(names(&v.search_by_name("an")), ["bank"]);
        assert!(v.search_by_name("EMAIL").is_empty());
    }

    #[test]
    fn empty_search_matches_all_in_order() {
        let v = sample();
        assert_eq!(names(&v.search_by_name("")), ["email", "bank", "work-email"]);
    }

    #[test]
    fn from_items_rejects_duplicates() {
        let items = vec![
            Item::new("a", "", "", ""),
            Item::new("b", "", "", ""),
            Item::new("a", "", "", ""),
        ];
        assert_eq!(Vault::from_items(items).unwrap_err(), "a");
    }
}
