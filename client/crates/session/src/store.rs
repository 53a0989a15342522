//! Session Store
//!
//! The injected, explicitly scoped session context. Holds the active
//! credential behind a lock, owns the shared [`TokenSlot`] the API
//! client reads, and broadcasts every profile change on a watch
//! channel so dependent components subscribe instead of reaching into
//! ambient state.

use crate::domain::credential::{Credential, SessionToken};
use crate::domain::user::UserProfile;
use crate::error::{SessionError, SessionResult};
use platform::http::TokenSlot;
use rust_decimal::Decimal;
use tokio::sync::{RwLock, watch};

/// Watch-broadcast session context
pub struct SessionStore {
    state: RwLock<Option<Credential>>,
    token_slot: TokenSlot,
    tx: watch::Sender<Option<UserProfile>>,
}

impl SessionStore {
    /// Create an empty store wired to the API client's token slot
    pub fn new(token_slot: TokenSlot) -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            state: RwLock::new(None),
            token_slot,
            tx,
        }
    }

    /// Subscribe to profile changes (None = signed out)
    pub fn subscribe(&self) -> watch::Receiver<Option<UserProfile>> {
        self.tx.subscribe()
    }

    /// Current profile snapshot, if signed in
    pub async fn current_user(&self) -> Option<UserProfile> {
        self.state.read().await.as_ref().map(|c| c.user.clone())
    }

    /// Current session token, if signed in
    pub async fn token(&self) -> Option<SessionToken> {
        self.state
            .read()
            .await
            .as_ref()
            .map(|c| c.session_id.clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_some()
    }

    /// Install a credential (sign-in / restore)
    pub async fn install(&self, credential: Credential) {
        self.token_slot.set(credential.session_id.as_str());
        let user = credential.user.clone();
        *self.state.write().await = Some(credential);
        tracing::info!(user_id = %user.id, username = %user.username, "Session installed");
        let _ = self.tx.send(Some(user));
    }

    /// Replace the profile snapshot (server refresh)
    pub async fn apply_profile(&self, user: UserProfile) -> SessionResult<()> {
        self.update_profile(|current| *current = user).await
    }

    /// Optimistically add a reward to the displayed balance
    pub async fn credit_balance(&self, amount: Decimal) -> SessionResult<()> {
        self.update_profile(|user| user.credit(amount)).await
    }

    /// Optimistically subtract from the displayed balance
    pub async fn debit_balance(&self, amount: Decimal) -> SessionResult<()> {
        self.update_profile(|user| user.debit(amount)).await
    }

    /// Patch the profile in place and notify subscribers
    pub async fn update_profile<F>(&self, patch: F) -> SessionResult<()>
    where
        F: FnOnce(&mut UserProfile),
    {
        let mut state = self.state.write().await;
        let credential = state.as_mut().ok_or(SessionError::Unauthenticated)?;
        patch(&mut credential.user);
        let user = credential.user.clone();
        drop(state);
        let _ = self.tx.send(Some(user));
        Ok(())
    }

    /// Clear the session and notify dependents (sign-out teardown)
    pub async fn teardown(&self) {
        let had_session = self.state.write().await.take().is_some();
        self.token_slot.clear();
        if had_session {
            tracing::info!("Session cleared");
        }
        let _ = self.tx.send(None);
    }
}
