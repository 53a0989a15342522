//! Application Layer - Use Cases
//!
//! Each use case pairs a gateway with the shared fetch cache and,
//! where balances move, the session store for the optimistic patch.

pub mod admin;
pub mod dashboard;
pub mod leaderboard;
pub mod offers;
pub mod referrals;
pub mod vip;
pub mod wallet;

use cache::{FetchCache, QueryKey};
use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;

use crate::error::ExchangeResult;

/// Read a typed gateway response through the JSON fetch cache
pub(crate) async fn cached<T, F, Fut>(
    cache: &FetchCache,
    key: &QueryKey,
    fetch: F,
) -> AppResult<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = ExchangeResult<T>>,
{
    cache
        .fetch(key, || async move {
            let value = fetch().await.map_err(AppError::from)?;
            Ok(serde_json::to_value(value)?)
        })
        .await
}
