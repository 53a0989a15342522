//! Real-Time Transport Port
//!
//! The socket itself is the UI host's concern; the engine sees an
//! opaque sender plus a stream of typed inbound events.

use crate::domain::message::ChatMessage;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Events the client sends over the channel
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    #[serde(rename_all = "camelCase")]
    Chat { channel_id: String, content: String },
}

/// An inbound event: a type tag plus whatever payload came with it
///
/// Unknown event types stay in the buffer untouched; the filter in
/// the hook is how components pick out what they understand.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub payload: Value,
}

impl ServerEvent {
    /// The chat message carried by a `chat` event, if well-formed
    pub fn chat_message(&self) -> Option<ChatMessage> {
        if self.kind != "chat" {
            return None;
        }
        serde_json::from_value(self.payload.get("message")?.clone()).ok()
    }
}

/// Outbound half of the persistent connection
pub trait EventTransport: Send + Sync {
    /// Whether the connection is currently open
    fn is_open(&self) -> bool;

    /// Queue one event; false when the connection is not open
    fn try_send(&self, event: &ClientEvent) -> bool;
}
