//! Referral Overview Use Case

use crate::application::cached;
use crate::domain::referral::{Referral, referral_link, total_earnings};
use crate::domain::repository::ReferralGateway;
use crate::error::ExchangeError;
use cache::{FetchCache, QueryKey};
use kernel::error::app_error::AppResult;
use rust_decimal::Decimal;
use session::store::SessionStore;
use std::sync::Arc;

fn referrals_key() -> QueryKey {
    QueryKey::new("/api/referrals")
}

/// Everything the referrals page needs
#[derive(Debug, Clone)]
pub struct ReferralOverview {
    pub referrals: Vec<Referral>,
    pub link: String,
    pub total_earnings: Decimal,
}

/// Referral Overview Use Case
pub struct ReferralOverviewUseCase<G>
where
    G: ReferralGateway,
{
    gateway: Arc<G>,
    cache: Arc<FetchCache>,
    session: Arc<SessionStore>,
    /// Site origin referral links point at
    base_url: String,
}

impl<G> ReferralOverviewUseCase<G>
where
    G: ReferralGateway,
{
    pub fn new(
        gateway: Arc<G>,
        cache: Arc<FetchCache>,
        session: Arc<SessionStore>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            cache,
            session,
            base_url: base_url.into(),
        }
    }

    pub async fn overview(&self) -> AppResult<ReferralOverview> {
        let user = self
            .session
            .current_user()
            .await
            .ok_or(ExchangeError::Unauthenticated)?;

        let referrals: Vec<Referral> = cached(&self.cache, &referrals_key(), || async {
            self.gateway.referrals().await
        })
        .await?;

        Ok(ReferralOverview {
            link: referral_link(&self.base_url, &user.referral_code),
            total_earnings: total_earnings(&referrals),
            referrals,
        })
    }
}
