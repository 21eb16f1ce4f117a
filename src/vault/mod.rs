//! Vault module — the identity and record model.
//!
//! This module provides:
//! - `User`, the account identity keyed by name (`user`)
//! - `Item`, one credential record (`item`)
//! - `Vault`, the ordered item collection a user owns (`locker`)
//!
//! Everything here is pure data; persistence lives in `crate::store`.

pub mod item;
pub mod locker;
pub mod user;

pub use item::Item;
pub use locker::Vault;
pub use user::User;
