//! Unit tests for the fetch cache

use crate::{FetchCache, QueryKey, QueryStatus};
use kernel::error::app_error::AppError;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn offers_key() -> QueryKey {
    QueryKey::new("/api/offers").with_param("active", "true")
}

#[tokio::test]
async fn test_fetch_miss_then_hit() {
    let cache = FetchCache::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let key = offers_key();

    let c = calls.clone();
    let first: Vec<String> = cache
        .fetch(&key, || async move {
            c.fetch_add(1, Ordering::SeqCst);
            Ok(json!(["Crypto Wallet Signup"]))
        })
        .await
        .unwrap();
    assert_eq!(first, vec!["Crypto Wallet Signup".to_string()]);

    // Second read must not invoke the fetcher
    let c = calls.clone();
    let second: Vec<String> = cache
        .fetch(&key, || async move {
            c.fetch_add(1, Ordering::SeqCst);
            Ok(Value::Null)
        })
        .await
        .unwrap();
    assert_eq!(second, first);
    assert_eq!(calls.load(Ordering::SeqCst), 1, "cache hit skips the fetcher");
    assert_eq!(cache.status(&key).await, QueryStatus::Ready);
}

#[tokio::test]
async fn test_errors_settle_and_are_not_retried() {
    let cache = FetchCache::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let key = QueryKey::new("/api/transactions");

    let c = calls.clone();
    let first: Result<Vec<String>, _> = cache
        .fetch(&key, || async move {
            c.fetch_add(1, Ordering::SeqCst);
            Err(AppError::service_unavailable("Could not reach the server"))
        })
        .await;
    assert!(first.is_err());

    // The failure is cached; no auto-retry
    let c = calls.clone();
    let second: Result<Vec<String>, _> = cache
        .fetch(&key, || async move {
            c.fetch_add(1, Ordering::SeqCst);
            Ok(Value::Null)
        })
        .await;
    let err = second.unwrap_err();
    assert_eq!(err.status_code(), 503);
    assert_eq!(err.message(), "Could not reach the server");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.status(&key).await, QueryStatus::Failed);

    // Invalidation is the only path back
    cache.invalidate(&key).await;
    assert_eq!(cache.status(&key).await, QueryStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_fetches_are_deduplicated() {
    let cache = Arc::new(FetchCache::new());
    let calls = Arc::new(AtomicUsize::new(0));
    let key = offers_key();

    let mut handles = Vec::new();
    for _ in 0..4 {
        let cache = cache.clone();
        let calls = calls.clone();
        let key = key.clone();
        handles.push(tokio::spawn(async move {
            let n: i64 = cache
                .fetch(&key, || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    Ok(json!(7))
                })
                .await
                .unwrap();
            n
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), 7);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1, "one flight for one key");
}

#[tokio::test]
async fn test_invalidate_forces_refetch() {
    let cache = FetchCache::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let key = QueryKey::new("/api/user");

    for expected in [1usize, 1, 2] {
        if expected == 2 {
            cache.invalidate(&key).await;
        }
        let c = calls.clone();
        let _: Value = cache
            .fetch(&key, || async move {
                c.fetch_add(1, Ordering::SeqCst);
                Ok(json!({"balance": "12.50"}))
            })
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), expected);
    }
}

#[tokio::test]
async fn test_invalidate_prefix_scopes_by_path() {
    let cache = FetchCache::new();
    let bare = QueryKey::new("/api/offers");
    let filtered = QueryKey::new("/api/offers").with_param("active", "true");
    let other = QueryKey::new("/api/transactions");

    for key in [&bare, &filtered, &other] {
        let _: Value = cache.fetch(key, || async { Ok(json!([])) }).await.unwrap();
    }

    cache.invalidate_prefix("/api/offers").await;

    assert_eq!(cache.status(&bare).await, QueryStatus::Idle);
    assert_eq!(cache.status(&filtered).await, QueryStatus::Idle);
    assert_eq!(cache.status(&other).await, QueryStatus::Ready);
}

#[tokio::test(start_paused = true)]
async fn test_invalidation_during_flight_discards_result() {
    let cache = Arc::new(FetchCache::new());
    let key = QueryKey::new("/api/user");

    let flight = {
        let cache = cache.clone();
        let key = key.clone();
        tokio::spawn(async move {
            let v: Value = cache
                .fetch(&key, || async {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    Ok(json!({"balance": "10.00"}))
                })
                .await
                .unwrap();
            v
        })
    };

    // Let the flight start, then invalidate underneath it
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(cache.status(&key).await, QueryStatus::Loading);
    cache.invalidate(&key).await;

    // The caller still receives its value...
    assert_eq!(flight.await.unwrap(), json!({"balance": "10.00"}));
    // ...but the superseded result is not cached
    assert_eq!(cache.status(&key).await, QueryStatus::Idle);
}

#[tokio::test]
async fn test_peek_and_loading_flags() {
    let cache = FetchCache::new();
    let key = QueryKey::new("/api/referrals");

    assert_eq!(cache.peek::<Value>(&key).await, None);
    assert!(!cache.is_loading(&key).await);

    let _: Value = cache
        .fetch(&key, || async { Ok(json!([{"id": 1}])) })
        .await
        .unwrap();

    assert_eq!(cache.peek::<Value>(&key).await, Some(json!([{"id": 1}])));
    assert!(!cache.is_loading(&key).await);
}

#[tokio::test]
async fn test_clear_drops_everything() {
    let cache = FetchCache::new();
    let a = QueryKey::new("/api/offers");
    let b = QueryKey::new("/api/chat/general");

    for key in [&a, &b] {
        let _: Value = cache.fetch(key, || async { Ok(json!([])) }).await.unwrap();
    }

    cache.clear().await;
    assert_eq!(cache.status(&a).await, QueryStatus::Idle);
    assert_eq!(cache.status(&b).await, QueryStatus::Idle);
}
