//! Session storage for persisting the session token between runs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    /// API root the token was issued by.
    pub root: String,
    pub token: String,
    pub saved_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn new(root: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            token: token.into(),
            saved_at: Utc::now(),
        }
    }
}

/// Get the session file path.
fn session_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "openlaw").context("Could not determine data directory")?;
    Ok(dirs.data_dir().join("session.json"))
}

/// Save a session to the default location.
pub fn save_session(session: &StoredSession) -> Result<()> {
    save_to(&session_path()?, session)
}

/// Load the session from the default location, if one was saved.
pub fn load_session() -> Result<Option<StoredSession>> {
    load_from(&session_path()?)
}

/// Remove the saved session. Returns false if there was none.
pub fn clear_session() -> Result<bool> {
    clear_at(&session_path()?)
}

fn save_to(path: &Path, session: &StoredSession) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create data directory")?;
    }

    let json = serde_json::to_string_pretty(session)?;
    fs::write(path, &json).context("Failed to write session file")?;

    // Set restrictive permissions (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}

fn load_from(path: &Path) -> Result<Option<StoredSession>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path).context("Failed to read session file")?;
    let stored = serde_json::from_str(&json).context("Invalid session file")?;
    Ok(Some(stored))
}

fn clear_at(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path).context("Failed to remove session file")?;
    Ok(true)
}
