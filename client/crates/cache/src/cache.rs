//! Fetch cache implementation
//!
//! Entries settle exactly once per flight. Concurrent readers of the
//! same key share one in-flight request through a watch channel; the
//! fetcher closure of every duplicate caller is dropped unused.

use crate::key::QueryKey;
use kernel::error::app_error::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{Mutex, watch};

/// Outcome of a settled flight, shared between waiters
type Settled = Result<Value, Arc<AppError>>;

/// Settlement broadcast: `None` while in flight
type Settlement = Option<Settled>;

enum Entry {
    /// A fetch is running; waiters subscribe to the settlement
    InFlight {
        flight: u64,
        rx: watch::Receiver<Settlement>,
    },
    /// Settled result, value or error alike ("fetch once")
    Ready(Settled),
}

/// Observable state of one cached read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Never fetched (or invalidated since)
    Idle,
    /// Fetch in flight
    Loading,
    /// Settled with a value
    Ready,
    /// Settled with an error; stays failed until invalidated
    Failed,
}

/// Request-keyed response cache with in-flight deduplication
#[derive(Default)]
pub struct FetchCache {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    entries: HashMap<QueryKey, Entry>,
    next_flight: u64,
}

impl FetchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read through the cache.
    ///
    /// Returns the cached value when one exists, joins the in-flight
    /// request when one is running, and otherwise runs `fetcher` and
    /// caches its outcome. Errors settle the entry too: later callers
    /// get the same error back without a network round-trip.
    pub async fn fetch<T, F, Fut>(&self, key: &QueryKey, fetcher: F) -> AppResult<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<Value>>,
    {
        let mut fetcher = Some(fetcher);

        loop {
            let mut waiter = {
                let mut inner = self.inner.lock().await;
                match inner.entries.get(key) {
                    Some(Entry::Ready(settled)) => {
                        let settled = settled.clone();
                        drop(inner);
                        return materialize(settled);
                    }
                    Some(Entry::InFlight { rx, .. }) => {
                        if rx.has_changed().is_err() {
                            // The leader was dropped before settling;
                            // reclaim the key and lead a fresh flight.
                            inner.entries.remove(key);
                            continue;
                        }
                        rx.clone()
                    }
                    None => {
                        let flight = inner.next_flight;
                        inner.next_flight += 1;
                        let (tx, rx) = watch::channel(None);
                        inner
                            .entries
                            .insert(key.clone(), Entry::InFlight { flight, rx });
                        drop(inner);

                        let fetcher = fetcher.take().expect("fetcher consumed twice");
                        return self.lead(key, flight, tx, fetcher).await;
                    }
                }
            };

            // Join the existing flight
            loop {
                if let Some(settled) = waiter.borrow().clone() {
                    return materialize(settled);
                }
                if waiter.changed().await.is_err() {
                    // Flight died without settling; go around and
                    // either reclaim the key or join a newer flight.
                    break;
                }
            }
        }
    }

    /// Run the fetch as the flight leader and settle the entry.
    async fn lead<T, F, Fut>(
        &self,
        key: &QueryKey,
        flight: u64,
        tx: watch::Sender<Settlement>,
        fetcher: F,
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<Value>>,
    {
        tracing::debug!(key = %key, "Cache miss, fetching");
        let settled: Settled = fetcher().await.map_err(Arc::new);

        let mut inner = self.inner.lock().await;
        // Only settle the entry if this flight still owns the key.
        // Invalidation mid-flight removes the entry; a later fetch may
        // already own a fresh flight under the same key.
        let owns = matches!(
            inner.entries.get(key),
            Some(Entry::InFlight { flight: f, .. }) if *f == flight
        );
        if owns {
            inner
                .entries
                .insert(key.clone(), Entry::Ready(settled.clone()));
        } else {
            tracing::debug!(key = %key, "Flight superseded, result not cached");
        }
        drop(inner);

        // Waiters get the outcome either way
        let _ = tx.send(Some(settled.clone()));
        materialize(settled)
    }

    /// Drop one cached read
    pub async fn invalidate(&self, key: &QueryKey) {
        let mut inner = self.inner.lock().await;
        if inner.entries.remove(key).is_some() {
            tracing::debug!(key = %key, "Cache entry invalidated");
        }
    }

    /// Drop every cached read under a path prefix
    ///
    /// `invalidate_prefix("/api/transactions").await` drops the bare
    /// list key and every parameterized variant.
    pub async fn invalidate_prefix(&self, prefix: &str) {
        let mut inner = self.inner.lock().await;
        let before = inner.entries.len();
        inner.entries.retain(|key, _| !key.matches_prefix(prefix));
        let dropped = before - inner.entries.len();
        if dropped > 0 {
            tracing::debug!(prefix = prefix, dropped = dropped, "Cache prefix invalidated");
        }
    }

    /// Drop everything (sign-out teardown)
    pub async fn clear(&self) {
        let mut inner = self.inner.lock().await;
        let dropped = inner.entries.len();
        inner.entries.clear();
        tracing::debug!(dropped = dropped, "Cache cleared");
    }

    /// Loading flag for one key
    pub async fn is_loading(&self, key: &QueryKey) -> bool {
        self.status(key).await == QueryStatus::Loading
    }

    /// Observable status for one key
    pub async fn status(&self, key: &QueryKey) -> QueryStatus {
        let inner = self.inner.lock().await;
        match inner.entries.get(key) {
            None => QueryStatus::Idle,
            Some(Entry::InFlight { .. }) => QueryStatus::Loading,
            Some(Entry::Ready(Ok(_))) => QueryStatus::Ready,
            Some(Entry::Ready(Err(_))) => QueryStatus::Failed,
        }
    }

    /// Current cached value for one key, without fetching
    pub async fn peek<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let inner = self.inner.lock().await;
        match inner.entries.get(key) {
            Some(Entry::Ready(Ok(value))) => serde_json::from_value(value.clone()).ok(),
            _ => None,
        }
    }
}

fn materialize<T: DeserializeOwned>(settled: Settled) -> AppResult<T> {
    match settled {
        Ok(value) => Ok(serde_json::from_value(value)?),
        Err(err) => Err(replay(&err)),
    }
}

/// Rebuild an owned error from the shared settled one.
///
/// `AppError` carries a boxed source and is not `Clone`; the replayed
/// error preserves kind, message, and action, which is everything the
/// UI renders.
fn replay(err: &Arc<AppError>) -> AppError {
    let mut out = AppError::new(err.kind(), err.message().to_string());
    if let Some(action) = err.action() {
        out = out.with_action(action.to_string());
    }
    out
}
