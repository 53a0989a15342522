//! File Credential Store
//!
//! JSON file persistence for the session credential - the engine's
//! analog of the browser's local storage. Reads and writes go through
//! `tokio::fs` so the store never blocks the runtime.

use crate::domain::credential::Credential;
use crate::domain::repository::CredentialStore;
use crate::error::SessionResult;
use std::path::PathBuf;

/// Credential persistence in a single JSON file
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Store the credential at the given path (parent dirs are created
    /// on first save)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> SessionResult<Option<Credential>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let credential: Credential = serde_json::from_str(&raw)?;
        Ok(Some(credential))
    }

    async fn save(&self, credential: &Credential) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_string_pretty(credential)?;
        tokio::fs::write(&self.path, raw).await?;
        tracing::debug!(path = %self.path.display(), "Credential saved");
        Ok(())
    }

    async fn clear(&self) -> SessionResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
