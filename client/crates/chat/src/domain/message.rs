//! Chat Messages and Channels

use crate::error::ChatError;
use chrono::{DateTime, Utc};
use kernel::id::{MessageId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One message in a channel, as the API and the live feed deliver it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: MessageId,
    pub user_id: UserId,
    pub username: String,
    pub channel: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Validated channel name (lowercase words and dashes)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ChannelName(String);

impl ChannelName {
    pub fn new(name: impl Into<String>) -> Result<Self, ChatError> {
        let name = name.into();
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if valid {
            Ok(Self(name))
        } else {
            Err(ChatError::InvalidChannel(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// "# name", as the channel list renders it
    pub fn display_name(&self) -> String {
        format!("# {}", self.0)
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A channel with its sidebar metadata
#[derive(Debug, Clone)]
pub struct ChatChannel {
    pub name: ChannelName,
    pub description: String,
}

/// The community's channel roster
pub fn builtin_channels() -> Vec<ChatChannel> {
    [
        ("general", "General discussion for all members"),
        ("cpa-strategies", "Discussion about cpa strategies"),
        ("landing-pages", "Discussion about landing pages"),
        ("traffic-sources", "Discussion about traffic sources"),
        ("newbie-help", "Discussion about newbie help"),
        ("success-stories", "Discussion about success stories"),
        ("offers-discussion", "Discussion about offers discussion"),
    ]
    .into_iter()
    .map(|(name, description)| ChatChannel {
        name: ChannelName::new(name).expect("roster names are valid"),
        description: description.to_string(),
    })
    .collect()
}

/// Substring search over the roster, as the sidebar filter does
pub fn search_channels(channels: &[ChatChannel], term: &str) -> Vec<ChatChannel> {
    let term = term.to_lowercase();
    channels
        .iter()
        .filter(|c| c.name.as_str().contains(&term))
        .cloned()
        .collect()
}
