//! Wallet Transactions
//!
//! Append-only history of everything that moved a member's balance.

use chrono::{DateTime, Utc};
use kernel::id::{TransactionId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What moved the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    ClickReward,
    ReferralCommission,
    Withdrawal,
    AdminAdjustment,
    VipPurchase,
    /// Kinds this client version does not know yet
    #[serde(other)]
    Other,
}

impl TransactionKind {
    /// Label the activity feed shows
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::ClickReward => "Click reward",
            TransactionKind::ReferralCommission => "Referral commission",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::AdminAdjustment => "Balance adjustment",
            TransactionKind::VipPurchase => "VIP purchase",
            TransactionKind::Other => "Account activity",
        }
    }
}

/// One wallet movement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_wire_names() {
        let t: Transaction = serde_json::from_str(
            r#"{
                "id": 1,
                "userId": 7,
                "type": "click_reward",
                "amount": 0.5,
                "createdAt": "2025-06-01T12:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(t.kind, TransactionKind::ClickReward);
        assert_eq!(t.amount, Decimal::new(5, 1));
    }

    #[test]
    fn test_unknown_kind_is_tolerated() {
        let t: Transaction = serde_json::from_str(
            r#"{
                "id": 2,
                "userId": 7,
                "type": "loyalty_bonus",
                "amount": 1.0,
                "createdAt": "2025-06-01T12:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(t.kind, TransactionKind::Other);
        assert_eq!(t.kind.label(), "Account activity");
    }
}
