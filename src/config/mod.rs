//! Configuration — project settings from `.passman.toml`.

pub mod settings;

pub use settings::Settings;
