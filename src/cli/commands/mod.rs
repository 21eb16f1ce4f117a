//! One module per subcommand; each exposes an `execute` entry point.

pub mod add;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod get;
pub mod list;
pub mod menu;
pub mod passwd;
pub mod register;
pub mod remove_user;
pub mod search;
