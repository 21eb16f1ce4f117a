//! Binary data file format and checksum verification.
//!
//! A data file (conventionally `data.dat`) has this layout:
//!
//! ```text
//! [PMAN: 4 bytes][version: 1 byte][header_len: 4 bytes LE][header JSON][accounts JSON][SHA-256: 32 bytes]
//! ```
//!
//! - **Magic** (`PMAN`): identifies the file as a Passman store.
//! - **Version**: format version (currently `1`).
//! - **Header length**: little-endian u32 telling us where the header
//!   JSON ends and the accounts JSON begins.
//! - **Header JSON**: serialized `StoreHeader`.
//! - **Accounts JSON**: serialized `Vec<StoredAccount>`.
//! - **SHA-256**: 32-byte digest over header + accounts bytes.  It catches
//!   truncation and bit rot; it is not a secret and offers no tamper
//!   protection.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::registry::Store;
use crate::errors::{PassmanError, Result};
use crate::vault::{Item, User, Vault};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Magic bytes at the start of every data file.
const MAGIC: &[u8; 4] = b"PMAN";

/// Current binary format version.
pub const CURRENT_VERSION: u8 = 1;

/// Size of the digest appended to the file.
const DIGEST_LEN: usize = 32;

/// Fixed-size prefix: 4 (magic) + 1 (version) + 4 (header_len).
const PREFIX_LEN: usize = 9;

// ---------------------------------------------------------------------------
// Serialized shapes
// ---------------------------------------------------------------------------

/// Metadata stored at the beginning of a data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreHeader {
    /// Format version (mirrors the prefix byte).
    pub version: u8,

    /// When the file was written.
    pub saved_at: DateTime<Utc>,

    /// Number of accounts in the body; checked on read.
    pub user_count: usize,
}

/// One user and the items of their vault, in vault order.
#[derive(Serialize, Deserialize)]
pub struct StoredAccount {
    pub user: User,
    pub items: Vec<Item>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Serialize the whole store into the binary envelope.
///
/// Accounts are written sorted by user name so identical stores produce
/// identical bodies.
pub fn encode(store: &Store) -> Result<Vec<u8>> {
    let accounts: Vec<StoredAccount> = store
        .accounts()
        .map(|(user, vault)| StoredAccount {
            user: user.clone(),
            items: vault.list_items().to_vec(),
        })
        .collect();

    let header = StoreHeader {
        version: CURRENT_VERSION,
        saved_at: Utc::now(),
        user_count: accounts.len(),
    };

    let header_bytes = serde_json::to_vec(&header)
        .map_err(|e| PassmanError::SerializationError(format!("header: {e}")))?;
    let accounts_bytes = serde_json::to_vec(&accounts)
        .map_err(|e| PassmanError::SerializationError(format!("accounts: {e}")))?;

    let digest = compute_digest(&header_bytes, &accounts_bytes);

    let header_len = u32::try_from(header_bytes.len()).map_err(|_| {
        PassmanError::SerializationError(format!(
            "header length {} exceeds u32::MAX",
            header_bytes.len()
        ))
    })?;
    let total = PREFIX_LEN + header_bytes.len() + accounts_bytes.len() + DIGEST_LEN;
    let mut buf = Vec::with_capacity(total);

    buf.extend_from_slice(MAGIC); // 4 bytes
    buf.push(CURRENT_VERSION); // 1 byte
    buf.extend_from_slice(&header_len.to_le_bytes()); // 4 bytes LE
    buf.extend_from_slice(&header_bytes); // header JSON
    buf.extend_from_slice(&accounts_bytes); // accounts JSON
    buf.extend_from_slice(&digest); // 32 bytes

    Ok(buf)
}

/// Parse a binary envelope back into a store.
///
/// Every structural problem (bad magic, wrong version, short file,
/// digest mismatch, bad JSON, duplicate names) is `CorruptData`.
pub fn decode(data: &[u8]) -> Result<Store> {
    if data.len() < PREFIX_LEN + DIGEST_LEN {
        return Err(corrupt("file too small to be a data file"));
    }

    // --- Parse the fixed-size prefix ---

    if &data[0..4] != MAGIC {
        return Err(corrupt("missing PMAN magic bytes"));
    }

    let version = data[4];
    if version != CURRENT_VERSION {
        return Err(corrupt(format!(
            "unsupported version {version}, expected {CURRENT_VERSION}"
        )));
    }

    let header_len_u32 = u32::from_le_bytes(
        data[5..9]
            .try_into()
            .map_err(|_| corrupt("bad header length"))?,
    );
    let header_len = usize::try_from(header_len_u32).map_err(|_| {
        corrupt(format!(
            "header length {header_len_u32} exceeds platform address space"
        ))
    })?;

    let header_end = PREFIX_LEN
        .checked_add(header_len)
        .filter(|end| end + DIGEST_LEN <= data.len())
        .ok_or_else(|| corrupt("header length exceeds file size"))?;

    // --- Split into sections and verify the digest ---

    let header_bytes = &data[PREFIX_LEN..header_end];
    let accounts_end = data.len() - DIGEST_LEN;
    let accounts_bytes = &data[header_end..accounts_end];
    let stored_digest = &data[accounts_end..];

    if compute_digest(header_bytes, accounts_bytes).as_slice() != stored_digest {
        return Err(corrupt("checksum mismatch — file truncated or damaged"));
    }

    // --- Deserialize ---

    let header: StoreHeader =
        serde_json::from_slice(header_bytes).map_err(|e| corrupt(format!("header JSON: {e}")))?;

    let accounts: Vec<StoredAccount> = serde_json::from_slice(accounts_bytes)
        .map_err(|e| corrupt(format!("accounts JSON: {e}")))?;

    if header.user_count != accounts.len() {
        return Err(corrupt(format!(
            "header lists {} users but body holds {}",
            header.user_count,
            accounts.len()
        )));
    }

    let mut store = Store::new();
    for account in accounts {
        let owner = account.user.name.clone();
        let vault = Vault::from_items(account.items).map_err(|dup| {
            corrupt(format!("duplicate item '{dup}' in vault of '{owner}'"))
        })?;
        if !store.insert_account(account.user, vault) {
            return Err(corrupt(format!("duplicate user '{owner}'")));
        }
    }

    Ok(store)
}

/// Write bytes to `path` **atomically**.
///
/// 1. Create a uniquely named temp file in the same directory (owner-only,
///    never reusing or following an existing path).
/// 2. Write and flush it to disk.
/// 3. Rename the temp file over the target path.
///
/// The rename ensures readers never see a half-written file.  On any
/// failure the temp file is removed when it is dropped.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".passman-")
        .suffix(".tmp")
        .tempfile_in(parent)?;

    // Owner-only: the file holds plaintext passwords.  tempfile already
    // creates with 0600 on Unix; this pins it before any byte is written.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }

    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    tmp.persist(path).map_err(|e| PassmanError::Io(e.error))?;

    Ok(())
}

/// SHA-256 over header + accounts bytes.
pub fn compute_digest(header_bytes: &[u8], accounts_bytes: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(header_bytes);
    hasher.update(accounts_bytes);

    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

fn corrupt(msg: impl Into<String>) -> PassmanError {
    PassmanError::CorruptData(msg.into())
}
