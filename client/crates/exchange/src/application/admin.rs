//! Admin Console Use Case
//!
//! The operations behind the admin screens. Every call re-checks the
//! admin role locally; the server enforces it authoritatively.

use crate::application::cached;
use crate::domain::offer::Offer;
use crate::domain::repository::{AdminGateway, OfferPatch, UserPatch};
use crate::domain::transaction::Transaction;
use crate::domain::withdrawal::{Withdrawal, WithdrawalStatus};
use crate::error::ExchangeError;
use cache::{FetchCache, QueryKey};
use kernel::error::app_error::AppResult;
use kernel::id::{OfferId, UserId, WithdrawalId};
use rust_decimal::Decimal;
use session::domain::user::UserProfile;
use session::store::SessionStore;
use std::sync::Arc;

fn admin_key(resource: &str) -> QueryKey {
    QueryKey::new(format!("/api/admin/{}", resource))
}

/// Admin Console Use Case
pub struct AdminConsoleUseCase<G>
where
    G: AdminGateway,
{
    gateway: Arc<G>,
    cache: Arc<FetchCache>,
    session: Arc<SessionStore>,
}

impl<G> AdminConsoleUseCase<G>
where
    G: AdminGateway,
{
    pub fn new(gateway: Arc<G>, cache: Arc<FetchCache>, session: Arc<SessionStore>) -> Self {
        Self {
            gateway,
            cache,
            session,
        }
    }

    async fn require_admin(&self) -> Result<(), ExchangeError> {
        match self.session.current_user().await {
            Some(user) if user.is_admin() => Ok(()),
            Some(_) => Err(ExchangeError::Forbidden),
            None => Err(ExchangeError::Unauthenticated),
        }
    }

    pub async fn users(&self) -> AppResult<Vec<UserProfile>> {
        self.require_admin().await?;
        cached(&self.cache, &admin_key("users"), || async {
            self.gateway.list_users().await
        })
        .await
    }

    pub async fn offers(&self) -> AppResult<Vec<Offer>> {
        self.require_admin().await?;
        cached(&self.cache, &admin_key("offers"), || async {
            self.gateway.list_offers().await
        })
        .await
    }

    pub async fn transactions(&self) -> AppResult<Vec<Transaction>> {
        self.require_admin().await?;
        cached(&self.cache, &admin_key("transactions"), || async {
            self.gateway.list_transactions().await
        })
        .await
    }

    pub async fn withdrawals(&self) -> AppResult<Vec<Withdrawal>> {
        self.require_admin().await?;
        cached(&self.cache, &admin_key("withdrawals"), || async {
            self.gateway.list_withdrawals().await
        })
        .await
    }

    pub async fn update_user(&self, user: UserId, patch: UserPatch) -> AppResult<()> {
        self.require_admin().await?;
        self.gateway.update_user(user, &patch).await?;
        self.cache.invalidate_prefix("/api/admin/users").await;
        tracing::info!(user_id = %user, "User updated");
        Ok(())
    }

    pub async fn update_offer(&self, offer: OfferId, patch: OfferPatch) -> AppResult<()> {
        self.require_admin().await?;
        self.gateway.update_offer(offer, &patch).await?;
        self.cache.invalidate_prefix("/api/admin/offers").await;
        tracing::info!(offer_id = %offer, "Offer updated");
        Ok(())
    }

    pub async fn delete_offer(&self, offer: OfferId) -> AppResult<()> {
        self.require_admin().await?;
        self.gateway.delete_offer(offer).await?;
        self.cache.invalidate_prefix("/api/admin/offers").await;
        tracing::info!(offer_id = %offer, "Offer deleted");
        Ok(())
    }

    pub async fn set_withdrawal_status(
        &self,
        withdrawal: WithdrawalId,
        status: WithdrawalStatus,
    ) -> AppResult<()> {
        self.require_admin().await?;
        self.gateway
            .set_withdrawal_status(withdrawal, status)
            .await?;
        self.cache.invalidate_prefix("/api/admin/withdrawals").await;
        tracing::info!(withdrawal_id = %withdrawal, status = ?status, "Withdrawal status set");
        Ok(())
    }

    /// Adjust a member's balance from the raw form fields.
    ///
    /// The amount arrives as the text the admin typed; a non-numeric
    /// amount or a blank reason is a form-level validation failure.
    pub async fn adjust_balance(
        &self,
        user: UserId,
        amount_text: &str,
        reason: &str,
    ) -> AppResult<()> {
        self.require_admin().await?;

        let amount: Decimal = amount_text.trim().parse().map_err(|_| {
            ExchangeError::Validation("Please enter a valid number for the amount".to_string())
        })?;
        if amount == Decimal::ZERO {
            return Err(
                ExchangeError::Validation("Adjustment amount cannot be zero".to_string()).into(),
            );
        }
        if reason.trim().is_empty() {
            return Err(ExchangeError::Validation(
                "Please provide a reason for the balance modification".to_string(),
            )
            .into());
        }

        self.gateway
            .adjust_balance(user, amount, reason.trim())
            .await?;

        self.cache.invalidate_prefix("/api/admin/users").await;
        self.cache.invalidate_prefix("/api/admin/transactions").await;

        tracing::info!(user_id = %user, amount = %amount, "Balance adjusted");
        Ok(())
    }
}
