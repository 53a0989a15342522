//! Message View Model
//!
//! Avatar color and initial are pure functions of the sender, so the
//! same member renders identically everywhere.

use crate::domain::message::ChatMessage;
use platform::hash::{AVATAR_COLOR_COUNT, color_index, initial};

/// One rendered message row
#[derive(Debug, Clone, PartialEq)]
pub struct MessageView {
    pub username: String,
    pub content: String,
    /// Index into the UI host's avatar palette
    pub color_index: usize,
    /// Avatar fallback initial
    pub initial: char,
}

impl MessageView {
    pub fn from_message(message: &ChatMessage) -> Self {
        Self {
            color_index: color_index(&message.username, AVATAR_COLOR_COUNT),
            initial: initial(&message.username),
            username: message.username.clone(),
            content: message.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kernel::id::{MessageId, UserId};

    fn message(username: &str) -> ChatMessage {
        ChatMessage {
            id: MessageId::new(1),
            user_id: UserId::new(7),
            username: username.to_string(),
            channel: "general".to_string(),
            content: "hello".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_same_sender_same_presentation() {
        let a = MessageView::from_message(&message("TrafficKing"));
        let b = MessageView::from_message(&message("TrafficKing"));
        assert_eq!(a.color_index, b.color_index);
        assert_eq!(a.initial, 'T');
        assert!(a.color_index < AVATAR_COLOR_COUNT);
    }
}
