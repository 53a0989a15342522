//! Dashboard Summary
//!
//! The derived numbers and the recent-activity feed the dashboard home
//! renders. Pure projection over data the other use cases already
//! fetched, so it is tested without any gateway.

use crate::domain::referral::Referral;
use crate::domain::transaction::Transaction;
use chrono::{DateTime, Utc};
use kernel::id::TransactionId;
use rust_decimal::Decimal;
use session::domain::user::UserProfile;

/// One line in the recent-activity feed
#[derive(Debug, Clone)]
pub struct ActivityItem {
    pub id: TransactionId,
    pub label: &'static str,
    pub description: String,
    pub amount: Decimal,
    pub at: DateTime<Utc>,
}

/// The dashboard-home stat block
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub balance: Decimal,
    pub clicks_given: u32,
    pub clicks_received: u32,
    pub referral_count: usize,
    pub referral_earnings: Decimal,
    pub recent_activity: Vec<ActivityItem>,
}

/// How many activity lines the dashboard shows
const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Build the dashboard projection
pub fn build_summary(
    user: &UserProfile,
    transactions: &[Transaction],
    referrals: &[Referral],
) -> DashboardSummary {
    let mut recent: Vec<&Transaction> = transactions.iter().collect();
    recent.sort_by_key(|t| std::cmp::Reverse(t.created_at));

    let recent_activity = recent
        .into_iter()
        .take(RECENT_ACTIVITY_LIMIT)
        .map(|t| ActivityItem {
            id: t.id,
            label: t.kind.label(),
            description: if t.description.is_empty() {
                t.kind.label().to_string()
            } else {
                t.description.clone()
            },
            amount: t.amount,
            at: t.created_at,
        })
        .collect();

    DashboardSummary {
        balance: user.balance,
        clicks_given: user.clicks_given,
        clicks_received: user.clicks_received,
        referral_count: referrals.len(),
        referral_earnings: referrals.iter().map(|r| r.earnings).sum(),
        recent_activity,
    }
}
