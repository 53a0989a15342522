//! Sign In Use Case

use crate::domain::repository::{AuthGateway, CredentialStore, LoginCredentials};
use crate::error::{SessionError, SessionResult};
use crate::store::SessionStore;
use std::sync::Arc;

/// Sign In Use Case
pub struct SignInUseCase<G, C>
where
    G: AuthGateway,
    C: CredentialStore,
{
    gateway: Arc<G>,
    credentials: Arc<C>,
    store: Arc<SessionStore>,
}

impl<G, C> SignInUseCase<G, C>
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

    pub async fn execute(&self, input: LoginCredentials) -> SessionResult<()> {
        if input.username.trim().is_empty() || input.password.is_empty() {
            return Err(SessionError::Validation(
                "Please enter your username and password".to_string(),
            ));
        }

        let credential = self.gateway.login(&input).await?;

        self.store.install(credential.clone()).await;
        self.credentials.save(&credential).await?;

        tracing::info!(username = %credential.user.username, "Member signed in");
        Ok(())
    }
}
