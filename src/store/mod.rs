//! Store module — the persisted user → vault table.
//!
//! This module provides:
//! - Binary data file format with a SHA-256 checksum (`format`)
//! - `Store`, with account lookup, registration and load/save (`registry`)

pub mod format;
pub mod registry;

pub use format::{StoreHeader, CURRENT_VERSION};
pub use registry::Store;
