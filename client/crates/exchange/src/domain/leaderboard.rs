//! Leaderboard

use kernel::id::UserId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ranking window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardPeriod {
    Daily,
    Weekly,
    Monthly,
    Alltime,
}

impl LeaderboardPeriod {
    /// Query-parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaderboardPeriod::Daily => "daily",
            LeaderboardPeriod::Weekly => "weekly",
            LeaderboardPeriod::Monthly => "monthly",
            LeaderboardPeriod::Alltime => "alltime",
        }
    }
}

/// One ranked member
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: UserId,
    pub username: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub clicks_given: u32,
    pub clicks_received: u32,
}

/// 1-based rank of a member within the list, if present
pub fn rank_of(entries: &[LeaderboardEntry], user_id: UserId) -> Option<usize> {
    entries.iter().position(|e| e.id == user_id).map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_query_values() {
        assert_eq!(LeaderboardPeriod::Daily.as_str(), "daily");
        assert_eq!(LeaderboardPeriod::Alltime.as_str(), "alltime");
    }

    #[test]
    fn test_rank_of() {
        let entries: Vec<LeaderboardEntry> = (1..=3)
            .map(|i| LeaderboardEntry {
                id: UserId::new(i),
                username: format!("member{}", i),
                balance: Decimal::ZERO,
                clicks_given: 0,
                clicks_received: 0,
            })
            .collect();

        assert_eq!(rank_of(&entries, UserId::new(1)), Some(1));
        assert_eq!(rank_of(&entries, UserId::new(3)), Some(3));
        assert_eq!(rank_of(&entries, UserId::new(9)), None);
    }
}
