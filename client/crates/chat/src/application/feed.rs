//! Channel Feed Use Case
//!
//! The merged view of one channel: cached history plus whatever the
//! live buffer holds, reconciled into a single ordered feed.

use crate::domain::message::{ChannelName, ChatMessage};
use crate::domain::reconcile::reconcile_messages;
use crate::domain::repository::HistoryGateway;
use crate::hook::ChannelHook;
use cache::{FetchCache, QueryKey};
use kernel::error::app_error::{AppError, AppResult};
use std::sync::Arc;

fn history_key(channel: &ChannelName) -> QueryKey {
    QueryKey::new(format!("/api/chat/{}", channel))
}

/// Channel Feed Use Case
pub struct ChannelFeedUseCase<G>
where
    G: HistoryGateway,
{
    gateway: Arc<G>,
    cache: Arc<FetchCache>,
    hook: Arc<ChannelHook>,
}

impl<G> ChannelFeedUseCase<G>
where
    G: HistoryGateway,
{
    pub fn new(gateway: Arc<G>, cache: Arc<FetchCache>, hook: Arc<ChannelHook>) -> Self {
        Self {
            gateway,
            cache,
            hook,
        }
    }

    /// The merged, deduplicated, time-ordered feed for one channel
    pub async fn messages(&self, channel: &ChannelName) -> AppResult<Vec<ChatMessage>> {
        let history: Vec<ChatMessage> = self
            .cache
            .fetch(&history_key(channel), || async {
                let messages = self
                    .gateway
                    .history(channel)
                    .await
                    .map_err(AppError::from)?;
                Ok(serde_json::to_value(messages)?)
            })
            .await?;

        let live = self.hook.chat_messages(channel);
        Ok(reconcile_messages(history, live))
    }
}
