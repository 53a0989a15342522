//! Real-Time Channel Hook
//!
//! Buffers inbound events by arrival order and exposes them as a
//! filtered feed. Sending never queues: when the connection is not
//! open, `send` reports failure and the caller surfaces the notice.

use crate::domain::message::{ChannelName, ChatMessage};
use crate::domain::transport::{ClientEvent, EventTransport, ServerEvent};
use crate::error::{ChatError, ChatResult};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// The hook components read the live feed through
pub struct ChannelHook {
    transport: Arc<dyn EventTransport>,
    buffer: Arc<Mutex<Vec<ServerEvent>>>,
    pump: JoinHandle<()>,
}

impl ChannelHook {
    /// Wire the hook to a transport and its inbound event stream.
    ///
    /// The pump task ends when the stream closes and is aborted when
    /// the hook is dropped.
    pub fn attach(
        transport: Arc<dyn EventTransport>,
        mut events: mpsc::Receiver<ServerEvent>,
    ) -> Self {
        let buffer: Arc<Mutex<Vec<ServerEvent>>> = Arc::new(Mutex::new(Vec::new()));

        let sink = buffer.clone();
        let pump = tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                tracing::trace!(kind = %event.kind, "Event buffered");
                sink.lock().expect("event buffer poisoned").push(event);
            }
            tracing::debug!("Inbound event stream ended");
        });

        Self {
            transport,
            buffer,
            pump,
        }
    }

    /// Whether the connection is currently open
    pub fn is_connected(&self) -> bool {
        self.transport.is_open()
    }

    /// Send one event; false when the connection is not open
    pub fn send(&self, event: ClientEvent) -> bool {
        if !self.transport.is_open() {
            return false;
        }
        self.transport.try_send(&event)
    }

    /// Send a chat message to a channel
    pub fn send_chat(&self, channel: &ChannelName, content: &str) -> ChatResult<()> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let sent = self.send(ClientEvent::Chat {
            channel_id: channel.as_str().to_string(),
            content: content.to_string(),
        });
        if !sent {
            tracing::warn!(channel = %channel, "Send failed, connection not open");
            return Err(ChatError::ConnectionLost);
        }
        Ok(())
    }

    /// Pure filter over the buffered event log
    pub fn events_by_type(&self, kind: &str) -> Vec<ServerEvent> {
        self.buffer
            .lock()
            .expect("event buffer poisoned")
            .iter()
            .filter(|e| e.kind == kind)
            .cloned()
            .collect()
    }

    /// Buffered chat messages for one channel, in arrival order
    pub fn chat_messages(&self, channel: &ChannelName) -> Vec<ChatMessage> {
        self.events_by_type("chat")
            .iter()
            .filter_map(|e| e.chat_message())
            .filter(|m| m.channel == channel.as_str())
            .collect()
    }
}

impl Drop for ChannelHook {
    fn drop(&mut self) {
        self.pump.abort();
    }
}
