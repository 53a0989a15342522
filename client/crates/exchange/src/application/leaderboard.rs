//! Leaderboard Use Case

use crate::application::cached;
use crate::domain::leaderboard::{LeaderboardEntry, LeaderboardPeriod, rank_of};
use crate::domain::repository::LeaderboardGateway;
use cache::{FetchCache, QueryKey};
use kernel::error::app_error::AppResult;
use kernel::id::UserId;
use std::sync::Arc;

fn leaderboard_key(period: LeaderboardPeriod) -> QueryKey {
    QueryKey::new("/api/leaderboard").with_param("period", period.as_str())
}

/// Leaderboard Use Case
pub struct LeaderboardUseCase<G>
where
    G: LeaderboardGateway,
{
    gateway: Arc<G>,
    cache: Arc<FetchCache>,
}

impl<G> LeaderboardUseCase<G>
where
    G: LeaderboardGateway,
{
    pub fn new(gateway: Arc<G>, cache: Arc<FetchCache>) -> Self {
        Self { gateway, cache }
    }

    /// Ranked members for one period (cached per period)
    pub async fn entries(&self, period: LeaderboardPeriod) -> AppResult<Vec<LeaderboardEntry>> {
        cached(&self.cache, &leaderboard_key(period), || async {
            self.gateway.leaderboard(period).await
        })
        .await
    }

    /// The viewing member's 1-based rank in the period, if ranked
    pub async fn rank(
        &self,
        period: LeaderboardPeriod,
        user_id: UserId,
    ) -> AppResult<Option<usize>> {
        let entries = self.entries(period).await?;
        Ok(rank_of(&entries, user_id))
    }
}
