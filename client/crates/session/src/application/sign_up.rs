//! Sign Up Use Case

use crate::domain::repository::{AuthGateway, CredentialStore, RegisterData};
use crate::domain::user::{validate_email, validate_username};
use crate::error::{SessionError, SessionResult};
use crate::store::SessionStore;
use std::sync::Arc;

/// Sign Up Use Case
pub struct SignUpUseCase<G, C>
where
    G: AuthGateway,
    C: CredentialStore,
{
    gateway: Arc<G>,
    credentials: Arc<C>,
    store: Arc<SessionStore>,
}

impl<G, C> SignUpUseCase<G, C>
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

    pub async fn execute(&self, input: RegisterData) -> SessionResult<()> {
        validate_username(&input.username).map_err(SessionError::Validation)?;
        validate_email(&input.email).map_err(SessionError::Validation)?;
        if input.password.len() < 8 {
            return Err(SessionError::Validation(
                "Password must be at least 8 characters".to_string(),
            ));
        }
        if input.password != input.confirm_password {
            return Err(SessionError::Validation(
                "Passwords do not match".to_string(),
            ));
        }

        let credential = self.gateway.register(&input).await?;

        self.store.install(credential.clone()).await;
        self.credentials.save(&credential).await?;

        tracing::info!(
            username = %credential.user.username,
            referred = input.referred_by.is_some(),
            "Member registered"
        );
        Ok(())
    }
}
