//! HTTP Chat History Gateway

use crate::domain::message::{ChannelName, ChatMessage};
use crate::domain::repository::HistoryGateway;
use crate::error::ChatResult;
use platform::http::ApiClient;
use std::sync::Arc;

/// Channel history over the platform REST API
#[derive(Clone)]
pub struct HttpChatGateway {
    api: Arc<ApiClient>,
}

impl HttpChatGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

impl HistoryGateway for HttpChatGateway {
    async fn history(&self, channel: &ChannelName) -> ChatResult<Vec<ChatMessage>> {
        let value = self.api.get_json(&format!("/api/chat/{}", channel)).await?;
        Ok(serde_json::from_value(value)?)
    }
}
