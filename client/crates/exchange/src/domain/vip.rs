//! VIP Membership

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// VIP plan identifiers the purchase endpoint accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VipPlanId {
    Monthly,
    Quarterly,
    Yearly,
}

/// One purchasable plan
#[derive(Debug, Clone)]
pub struct VipPlan {
    pub id: VipPlanId,
    pub title: &'static str,
    pub price: Decimal,
    pub duration_days: u32,
}

/// The plan roster the membership page offers
pub fn plans() -> Vec<VipPlan> {
    vec![
        VipPlan {
            id: VipPlanId::Monthly,
            title: "Monthly VIP",
            price: Decimal::new(1000, 2),
            duration_days: 30,
        },
        VipPlan {
            id: VipPlanId::Quarterly,
            title: "Quarterly VIP",
            price: Decimal::new(2500, 2),
            duration_days: 90,
        },
        VipPlan {
            id: VipPlanId::Yearly,
            title: "Yearly VIP",
            price: Decimal::new(8000, 2),
            duration_days: 365,
        },
    ]
}

/// Look up a plan by its id
pub fn plan(id: VipPlanId) -> VipPlan {
    plans()
        .into_iter()
        .find(|p| p.id == id)
        .expect("every plan id has a roster entry")
}

/// Wire shape of GET /api/vip/status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VipStatus {
    pub vip_member: bool,
    #[serde(default)]
    pub vip_expiry: Option<DateTime<Utc>>,
    #[serde(default)]
    pub benefits: Option<Vec<String>>,
}
