//! Persisted Credential
//!
//! The unit the client keeps across reloads: the opaque session token
//! the server issued plus the last known profile snapshot. The snapshot
//! lets the UI paint immediately on restore while the profile is
//! re-validated against `/api/user`.

use crate::domain::user::UserProfile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque bearer token issued at sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a token string; empty tokens are rejected
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    /// Tokens are credentials; render them redacted
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[redacted:{}]", self.0.len())
    }
}

/// The persisted session credential
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub session_id: SessionToken,
    pub user: UserProfile,
}

impl Credential {
    pub fn new(session_id: SessionToken, user: UserProfile) -> Self {
        Self { session_id, user }
    }
}
