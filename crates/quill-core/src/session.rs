//! Persisted login session.
//!
//! The API authenticates with a bearer token handed out at login. The token
//! and the account it belongs to are cached at ${QUILL_HOME}/session.json so
//! a restarted client resumes the session without logging in again.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quill_types::User;
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// A logged-in session: the bearer token plus the account it was issued to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    /// Returns the path to the session file.
    pub fn cache_path() -> PathBuf {
        paths::session_path()
    }

    /// Loads the persisted session, if any.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn load() -> Result<Option<Self>> {
        Self::load_from(&Self::cache_path())
    }

    /// Loads a session from a specific path.
    /// Returns None if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session from {}", path.display()))?;

        let session = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session from {}", path.display()))?;

        Ok(Some(session))
    }

    /// Saves the session to the default path with restricted permissions (0600).
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::cache_path())
    }

    /// Saves the session to a specific path.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize session")?;

        // Write with restricted permissions
        #[cfg(unix)]
        {
            use std::fs::OpenOptions;
            use std::io::Write;
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(path)
                .with_context(|| format!("Failed to open {} for writing", path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        Ok(())
    }

    /// Removes the persisted session. Returns whether one existed.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn clear() -> Result<bool> {
        Self::clear_at(&Self::cache_path())
    }

    /// Removes a session file at a specific path. Returns whether one existed.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn clear_at(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)
            .with_context(|| format!("Failed to remove session at {}", path.display()))?;
        Ok(true)
    }
}

/// Returns a masked version of a token for display (first 12 chars + ...).
pub fn mask_token(token: &str) -> String {
    if token.len() <= 16 {
        return "***".to_string();
    }
    format!("{}...", &token[..12])
}

#[cfg(test)]
mod tests {
    use quill_types::UserId;

    use super::*;

    fn sample_session() -> Session {
        Session {
            token: "eyJhbGciOiJIUzI1NiJ9.sample.signature".to_string(),
            user: User {
                id: UserId::from("665f1c2e9b1d8e0012ab0001"),
                username: "mara".to_string(),
                email: "mara@example.com".to_string(),
                avatar: None,
                bio: None,
            },
        }
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        sample_session().save_to(&path).unwrap();
        let loaded = Session::load_from(&path).unwrap().unwrap();
        assert_eq!(loaded.token, sample_session().token);
        assert_eq!(loaded.user.username, "mara");
    }

    #[test]
    fn test_load_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Session::load_from(&dir.path().join("session.json"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_clear_reports_presence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        assert!(!Session::clear_at(&path).unwrap());
        sample_session().save_to(&path).unwrap();
        assert!(Session::clear_at(&path).unwrap());
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        sample_session().save_to(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("short"), "***");
        assert_eq!(
            mask_token("eyJhbGciOiJIUzI1NiJ9abcdef"),
            "eyJhbGciOiJI..."
        );
    }
}
