//! Referrals

use kernel::id::UserId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A member recruited through the referral link
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    pub id: UserId,
    pub username: String,
    /// Commission earned from this referral so far
    #[serde(with = "rust_decimal::serde::float")]
    pub earnings: Decimal,
}

/// Build the shareable referral link for a member's code
pub fn referral_link(base_url: &str, referral_code: &str) -> String {
    format!(
        "{}/register?ref={}",
        base_url.trim_end_matches('/'),
        referral_code
    )
}

/// Total commission across all referrals
pub fn total_earnings(referrals: &[Referral]) -> Decimal {
    referrals.iter().map(|r| r.earnings).sum()
}
