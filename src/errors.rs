use thiserror::Error;

/// All errors that can occur in Passman.
#[derive(Debug, Error)]
pub enum PassmanError {
    // --- Account errors ---
    #[error("User '{0}' already exists")]
    UserAlreadyExists(String),

    #[error("Invalid username '{0}' — register first")]
    InvalidUsername(String),

    #[error("Invalid password")]
    InvalidPassword,

    // --- Vault errors ---
    #[error("Item '{0}' already exists in this vault")]
    ItemAlreadyExists(String),

    #[error("Item '{0}' not found")]
    ItemNotFound(String),

    // --- Store errors ---
    #[error("Data file is corrupt: {0}")]
    CorruptData(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Command failed: {0}")]
    CommandFailed(String),
}

impl PassmanError {
    /// Returns `true` for the duplicate-name conditions (user or item).
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::UserAlreadyExists(_) | Self::ItemAlreadyExists(_))
    }
}

/// Convenience type alias for Passman results.
pub type Result<T> = std::result::Result<T, PassmanError>;
