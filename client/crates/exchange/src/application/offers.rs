//! Offer Browsing and Posting Use Cases

use crate::application::cached;
use crate::domain::offer::{NewOffer, Offer};
use crate::domain::repository::OfferGateway;
use crate::error::ExchangeError;
use cache::{FetchCache, QueryKey};
use kernel::error::app_error::AppResult;
use kernel::id::UserId;
use std::sync::Arc;

fn active_offers_key() -> QueryKey {
    QueryKey::new("/api/offers").with_param("active", "true")
}

fn owner_offers_key(owner: UserId) -> QueryKey {
    QueryKey::new("/api/offers").with_param("userId", owner.to_string())
}

/// Browse Offers Use Case
pub struct BrowseOffersUseCase<G>
where
    G: OfferGateway,
{
    gateway: Arc<G>,
    cache: Arc<FetchCache>,
}

impl<G> BrowseOffersUseCase<G>
where
    G: OfferGateway,
{
    pub fn new(gateway: Arc<G>, cache: Arc<FetchCache>) -> Self {
        Self { gateway, cache }
    }

    /// Active offers, filtered by target country ("All" shows everything)
    pub async fn active_offers(&self, country_filter: &str) -> AppResult<Vec<Offer>> {
        let offers: Vec<Offer> = cached(&self.cache, &active_offers_key(), || async {
            self.gateway.list_active().await
        })
        .await?;

        Ok(offers
            .into_iter()
            .filter(|offer| offer.country_matches(country_filter))
            .collect())
    }

    /// Offers the given member posted (dashboard "my offers" list)
    pub async fn offers_by(&self, owner: UserId) -> AppResult<Vec<Offer>> {
        cached(&self.cache, &owner_offers_key(owner), || async {
            self.gateway.list_by_owner(owner).await
        })
        .await
    }
}

/// Post Offer Use Case
pub struct PostOfferUseCase<G>
where
    G: OfferGateway,
{
    gateway: Arc<G>,
    cache: Arc<FetchCache>,
}

impl<G> PostOfferUseCase<G>
where
    G: OfferGateway,
{
    pub fn new(gateway: Arc<G>, cache: Arc<FetchCache>) -> Self {
        Self { gateway, cache }
    }

    pub async fn execute(&self, form: NewOffer) -> AppResult<Offer> {
        form.validate().map_err(ExchangeError::Validation)?;

        let offer = self.gateway.post_offer(&form).await?;

        // Every offer list is stale now
        self.cache.invalidate_prefix("/api/offers").await;

        tracing::info!(offer_id = %offer.id, title = %offer.title, "Offer posted");
        Ok(offer)
    }
}
