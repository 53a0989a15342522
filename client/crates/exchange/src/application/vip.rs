//! VIP Membership Use Case

use crate::application::cached;
use crate::domain::repository::VipGateway;
use crate::domain::vip::{VipPlanId, VipStatus, plan};
use crate::error::ExchangeError;
use cache::{FetchCache, QueryKey};
use chrono::{Duration, Utc};
use kernel::error::app_error::AppResult;
use session::store::SessionStore;
use std::sync::Arc;

fn status_key() -> QueryKey {
    QueryKey::new("/api/vip/status")
}

/// VIP Membership Use Case
pub struct VipMembershipUseCase<G>
where
    G: VipGateway,
{
    gateway: Arc<G>,
    cache: Arc<FetchCache>,
    session: Arc<SessionStore>,
}

impl<G> VipMembershipUseCase<G>
where
    G: VipGateway,
{
    pub fn new(gateway: Arc<G>, cache: Arc<FetchCache>, session: Arc<SessionStore>) -> Self {
        Self {
            gateway,
            cache,
            session,
        }
    }

    pub async fn status(&self) -> AppResult<VipStatus> {
        cached(&self.cache, &status_key(), || async {
            self.gateway.status().await
        })
        .await
    }

    /// Buy a plan with the earned balance
    pub async fn purchase(&self, plan_id: VipPlanId) -> AppResult<VipStatus> {
        let user = self
            .session
            .current_user()
            .await
            .ok_or(ExchangeError::Unauthenticated)?;

        let plan = plan(plan_id);
        if user.balance < plan.price {
            return Err(ExchangeError::InsufficientBalance { needed: plan.price }.into());
        }

        self.gateway.purchase(plan_id).await?;

        // Optimistic patch: price leaves the balance, membership turns on
        let expiry = Utc::now() + Duration::days(plan.duration_days as i64);
        self.session
            .update_profile(|profile| {
                profile.debit(plan.price);
                profile.vip_member = true;
                profile.vip_expiry = Some(expiry);
            })
            .await
            .map_err(|_| ExchangeError::Unauthenticated)?;

        self.cache.invalidate(&status_key()).await;
        self.cache.invalidate_prefix("/api/transactions").await;

        tracing::info!(plan = ?plan_id, price = %plan.price, "VIP plan purchased");

        // Re-read so the page shows the server's expiry, not our guess
        self.status().await
    }
}
