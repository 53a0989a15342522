//! Unit tests for the chat crate

use crate::application::feed::ChannelFeedUseCase;
use crate::domain::message::{ChannelName, ChatMessage};
use crate::domain::repository::HistoryGateway;
use crate::domain::transport::{ClientEvent, EventTransport, ServerEvent};
use crate::error::{ChatError, ChatResult};
use crate::hook::ChannelHook;
use cache::FetchCache;
use chrono::{Duration, Utc};
use kernel::id::{MessageId, UserId};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::mpsc;

fn message(id: i64, channel: &str, minutes: i64, content: &str) -> ChatMessage {
    ChatMessage {
        id: MessageId::new(id),
        user_id: UserId::new(7),
        username: "TrafficKing".to_string(),
        channel: channel.to_string(),
        content: content.to_string(),
        created_at: Utc::now() + Duration::minutes(minutes),
    }
}

fn chat_event(message: &ChatMessage) -> ServerEvent {
    serde_json::from_value(serde_json::json!({
        "type": "chat",
        "message": message,
    }))
    .unwrap()
}

#[derive(Default)]
struct FakeTransport {
    open: AtomicBool,
    sent: StdMutex<Vec<String>>,
}

impl EventTransport for FakeTransport {
    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    fn try_send(&self, event: &ClientEvent) -> bool {
        self.sent
            .lock()
            .unwrap()
            .push(serde_json::to_string(event).unwrap());
        true
    }
}

async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_send_disabled_while_disconnected() {
    let transport = Arc::new(FakeTransport::default());
    let (_tx, rx) = mpsc::channel(16);
    let hook = ChannelHook::attach(transport.clone(), rx);
    let general = ChannelName::new("general").unwrap();

    assert!(!hook.is_connected());
    let err = hook.send_chat(&general, "hello").unwrap_err();
    assert!(matches!(err, ChatError::ConnectionLost));
    assert!(transport.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_send_chat_over_open_connection() {
    let transport = Arc::new(FakeTransport::default());
    transport.open.store(true, Ordering::SeqCst);
    let (_tx, rx) = mpsc::channel(16);
    let hook = ChannelHook::attach(transport.clone(), rx);
    let general = ChannelName::new("general").unwrap();

    // Whitespace-only input never leaves the client
    assert!(matches!(
        hook.send_chat(&general, "   ").unwrap_err(),
        ChatError::EmptyMessage
    ));

    hook.send_chat(&general, "  hello  ").unwrap();
    let sent = transport.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0],
        r#"{"type":"chat","channelId":"general","content":"hello"}"#
    );
}

#[tokio::test]
async fn test_buffer_filters_by_type_and_channel() {
    let transport = Arc::new(FakeTransport::default());
    let (tx, rx) = mpsc::channel(16);
    let hook = ChannelHook::attach(transport, rx);

    tx.send(chat_event(&message(1, "general", 0, "in general")))
        .await
        .unwrap();
    tx.send(chat_event(&message(2, "newbie-help", 0, "elsewhere")))
        .await
        .unwrap();
    tx.send(serde_json::from_value(serde_json::json!({"type": "presence", "online": 4})).unwrap())
        .await
        .unwrap();
    settle().await;

    assert_eq!(hook.events_by_type("chat").len(), 2);
    assert_eq!(hook.events_by_type("presence").len(), 1);
    assert_eq!(hook.events_by_type("typing").len(), 0);

    let general = ChannelName::new("general").unwrap();
    let in_general = hook.chat_messages(&general);
    assert_eq!(in_general.len(), 1);
    assert_eq!(in_general[0].content, "in general");
}

#[derive(Default)]
struct FakeHistory {
    calls: AtomicUsize,
}

impl HistoryGateway for FakeHistory {
    async fn history(&self, _channel: &ChannelName) -> ChatResult<Vec<ChatMessage>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![
            message(1, "general", 0, "first"),
            message(2, "general", 1, "second"),
        ])
    }
}

#[tokio::test]
async fn test_feed_merges_history_and_live_without_duplicates() {
    let transport = Arc::new(FakeTransport::default());
    let (tx, rx) = mpsc::channel(16);
    let hook = Arc::new(ChannelHook::attach(transport, rx));
    let gateway = Arc::new(FakeHistory::default());
    let cache = Arc::new(FetchCache::new());
    let feed = ChannelFeedUseCase::new(gateway.clone(), cache, hook);
    let general = ChannelName::new("general").unwrap();

    // Live feed redelivers message 2 and adds message 3
    tx.send(chat_event(&message(2, "general", 1, "second (live copy)")))
        .await
        .unwrap();
    tx.send(chat_event(&message(3, "general", 2, "third")))
        .await
        .unwrap();
    settle().await;

    let merged = feed.messages(&general).await.unwrap();
    let ids: Vec<i64> = merged.iter().map(|m| m.id.value()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    // The historical copy wins the shared id
    assert_eq!(merged[1].content, "second");

    // History came through the cache; a second read does not refetch
    feed.messages(&general).await.unwrap();
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
}
