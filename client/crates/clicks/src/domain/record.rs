//! Click Record
//!
//! The submission the server receives once per completed task, and
//! the receipt it answers with.

use kernel::id::{ClickId, OfferId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payload of POST /api/clicks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickRecord {
    pub offer_id: OfferId,
    /// Seconds of verified engagement
    pub duration: u32,
    pub verified: bool,
}

/// Server acknowledgment of a verified click
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickReceipt {
    #[serde(default)]
    pub id: Option<ClickId>,
    /// Reward credited server-side, when the API reports it
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub reward: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_shape() {
        let record = ClickRecord {
            offer_id: OfferId::new(3),
            duration: 60,
            verified: true,
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"offerId":3,"duration":60,"verified":true}"#
        );
    }

    #[test]
    fn test_receipt_tolerates_sparse_responses() {
        let receipt: ClickReceipt = serde_json::from_str("{}").unwrap();
        assert!(receipt.id.is_none());
        assert!(receipt.reward.is_none());

        let receipt: ClickReceipt =
            serde_json::from_str(r#"{"id": 11, "reward": 0.5}"#).unwrap();
        assert_eq!(receipt.id.unwrap().value(), 11);
        assert_eq!(receipt.reward.unwrap(), Decimal::new(5, 1));
    }
}
