use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PassmanError, Result};

/// Project-level configuration, loaded from `.passman.toml`.
///
/// Every field has a sensible default so Passman works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path of the data file, relative to the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Minimum length of an account password chosen at register time.
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,

    /// Show item passwords in `list` and `search` tables.
    #[serde(default)]
    pub reveal_passwords: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_data_file() -> String {
    "data.dat".to_string()
}

fn default_min_password_len() -> usize {
    8
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            min_password_len: default_min_password_len(),
            reveal_passwords: false,
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".passman.toml";

    /// Load settings from `<dir>/.passman.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassmanError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Resolve the data file path.
    ///
    /// `override_path` (from `--data-file`) wins over the configured value.
    /// Relative paths are joined onto `dir`.
    pub fn data_path(&self, dir: &Path, override_path: Option<&str>) -> PathBuf {
        let raw = Path::new(override_path.unwrap_or(&self.data_file));
        if raw.is_absolute() {
            raw.to_path_buf()
        } else {
            dir.join(raw)
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
