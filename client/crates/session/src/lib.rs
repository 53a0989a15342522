//! Session Module
//!
//! The authenticated-member context of the client engine.
//!
//! Clean Architecture structure:
//! - `domain/` - Member profile, credential, gateway traits
//! - `application/` - Use cases (sign in/up/out, restore)
//! - `infra/` - HTTP auth gateway, file-backed credential store
//! - `store` - The injected, watch-broadcast session context
//!
//! ## Lifecycle
//! - On load: [`application::restore::RestoreSessionUseCase`] reads the
//!   persisted credential and validates it against the server
//! - On sign-out: the store clears itself, the token slot, and the
//!   credential file, and notifies every subscriber
//! - Balance changes are optimistic patches only; the server stays the
//!   authority and explicit cache invalidation re-reads it

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;
pub mod store;

// Re-exports for convenience
pub use domain::credential::{Credential, SessionToken};
pub use presentation::avatar::AvatarView;
pub use domain::user::{UserProfile, UserRole};
pub use error::{SessionError, SessionResult};
pub use infra::file::FileCredentialStore;
pub use infra::http::HttpAuthGateway;
pub use store::SessionStore;

#[cfg(test)]
mod tests;
