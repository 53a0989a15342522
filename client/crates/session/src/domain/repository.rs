//! Gateway Traits
//!
//! Interfaces to the auth API and the credential persistence.
//! Implementations are in the infrastructure layer.

use crate::domain::credential::Credential;
use crate::domain::user::UserProfile;
use crate::error::SessionResult;
use kernel::id::UserId;

/// Credentials for an existing member
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Registration form data
#[derive(Debug, Clone)]
pub struct RegisterData {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Referring member, when the visitor followed a referral link
    pub referred_by: Option<UserId>,
}

/// Auth API gateway trait
#[trait_variant::make(AuthGateway: Send)]
pub trait LocalAuthGateway {
    /// POST /api/auth/login
    async fn login(&self, credentials: &LoginCredentials) -> SessionResult<Credential>;

    /// POST /api/auth/register
    async fn register(&self, data: &RegisterData) -> SessionResult<Credential>;

    /// POST /api/auth/logout (best effort; the token may already be dead)
    async fn logout(&self) -> SessionResult<()>;

    /// GET /api/user - validate the current token and refresh the profile
    async fn current_user(&self) -> SessionResult<UserProfile>;
}

/// Credential persistence trait (the localStorage analog)
#[trait_variant::make(CredentialStore: Send)]
pub trait LocalCredentialStore {
    /// Read the persisted credential, if any
    async fn load(&self) -> SessionResult<Option<Credential>>;

    /// Persist the credential for the next load
    async fn save(&self, credential: &Credential) -> SessionResult<()>;

    /// Remove the persisted credential
    async fn clear(&self) -> SessionResult<()>;
}
