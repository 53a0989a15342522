//! Message Reconciliation
//!
//! Channel views read from two sources: the fetched history and the
//! live event buffer. This is the single merge point: deduplicate by
//! message id (history wins), then order by creation time ascending.

use crate::domain::message::ChatMessage;
use std::collections::HashSet;

/// Merge history and live messages into one feed
pub fn reconcile_messages(
    history: Vec<ChatMessage>,
    live: Vec<ChatMessage>,
) -> Vec<ChatMessage> {
    let mut seen: HashSet<i64> = history.iter().map(|m| m.id.value()).collect();
    let mut merged = history;

    for message in live {
        if seen.insert(message.id.value()) {
            merged.push(message);
        }
    }

    merged.sort_by_key(|m| m.created_at);
    merged
}
