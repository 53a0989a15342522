//! Gateway Traits

use crate::domain::record::{ClickReceipt, ClickRecord};
use crate::error::ClickResult;

/// Click verification gateway trait
#[trait_variant::make(ClickGateway: Send)]
pub trait LocalClickGateway {
    /// POST /api/clicks - submit a verified engagement
    async fn submit(&self, record: &ClickRecord) -> ClickResult<ClickReceipt>;
}
