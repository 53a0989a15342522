//! Sign Out Use Case

use crate::domain::repository::{AuthGateway, CredentialStore};
use crate::error::SessionResult;
use crate::store::SessionStore;
use std::sync::Arc;

/// Sign Out Use Case
///
/// The server call is best effort: local teardown happens regardless,
/// so a dead token never traps a member in a signed-in shell.
pub struct SignOutUseCase<G, C>
where
    G: AuthGateway,
    C: CredentialStore,
{
    gateway: Arc<G>,
    credentials: Arc<C>,
    store: Arc<SessionStore>,
}

impl<G, C> SignOutUseCase<G, C>
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

    pub async fn execute(&self) -> SessionResult<()> {
        if let Err(e) = self.gateway.logout().await {
            e.log();
        }

        self.store.teardown().await;
        self.credentials.clear().await?;

        tracing::info!("Member signed out");
        Ok(())
    }
}
