//! Community Chat Module
//!
//! The real-time channel hook and the chat read model.
//!
//! The transport itself (the socket) is an external collaborator: the
//! UI host supplies something implementing
//! [`domain::transport::EventTransport`] plus an inbound event stream,
//! and the hook buffers what arrives. Components read the buffer as a
//! filtered feed and merge it with the cached history - an
//! append-and-reconcile read model, not a subscription callback model.

pub mod application;
pub mod domain;
pub mod error;
pub mod hook;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::message::{ChannelName, ChatChannel, ChatMessage, builtin_channels};
pub use domain::reconcile::reconcile_messages;
pub use domain::transport::{ClientEvent, EventTransport, ServerEvent};
pub use error::{ChatError, ChatResult};
pub use hook::ChannelHook;
pub use infra::http::HttpChatGateway;

#[cfg(test)]
mod tests;
