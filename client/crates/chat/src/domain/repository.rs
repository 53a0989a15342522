//! Gateway Traits

use crate::domain::message::{ChannelName, ChatMessage};
use crate::error::ChatResult;

/// Channel history gateway trait
#[trait_variant::make(HistoryGateway: Send)]
pub trait LocalHistoryGateway {
    /// GET /api/chat/{channel} - messages in creation order
    async fn history(&self, channel: &ChannelName) -> ChatResult<Vec<ChatMessage>>;
}
