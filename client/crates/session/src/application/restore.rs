//! Restore Session Use Case
//!
//! Runs once on load: read the persisted credential, install it so the
//! API client carries the token, then validate against `/api/user`.
//! A rejected token tears the stale session back down.

use crate::domain::repository::{AuthGateway, CredentialStore};
use crate::error::{SessionError, SessionResult};
use crate::store::SessionStore;
use platform::http::HttpError;
use std::sync::Arc;

/// Restore Session Use Case
pub struct RestoreSessionUseCase<G, C>
where
    G: AuthGateway,
    C: CredentialStore,
{
    gateway: Arc<G>,
    credentials: Arc<C>,
    store: Arc<SessionStore>,
}

impl<G, C> RestoreSessionUseCase<G, C>
where
    G: AuthGateway,
    C: CredentialStore,
{
    pub fn new(gateway: Arc<G>, credentials: Arc<C>, store: Arc<SessionStore>) -> Self {
        Self {
            gateway,
            credentials,
            store,
        }
    }

    /// Returns true when a session was restored
    pub async fn execute(&self) -> SessionResult<bool> {
        let credential = match self.credentials.load().await {
            Ok(Some(credential)) => credential,
            Ok(None) => return Ok(false),
            Err(e) => {
                // A corrupt file must not brick the load; clear and move on
                e.log();
                self.credentials.clear().await?;
                return Ok(false);
            }
        };

        self.store.install(credential).await;

        match self.gateway.current_user().await {
            Ok(user) => {
                self.store.apply_profile(user).await?;
                tracing::info!("Session restored");
                Ok(true)
            }
            Err(SessionError::Transport(HttpError::Status { status: 401, .. })) => {
                tracing::info!("Stored session rejected by server, clearing");
                self.store.teardown().await;
                self.credentials.clear().await?;
                Ok(false)
            }
            Err(e) => {
                // Network trouble: keep the cached profile so the shell
                // still paints; the next authorized call will re-check
                e.log();
                Ok(true)
            }
        }
    }
}
