//! HTTP Exchange Gateway
//!
//! One client implements every market gateway trait; the routes match
//! the REST API surface one to one.

use crate::domain::leaderboard::{LeaderboardEntry, LeaderboardPeriod};
use crate::domain::offer::{NewOffer, Offer};
use crate::domain::referral::Referral;
use crate::domain::repository::{
    AdminGateway, LeaderboardGateway, OfferGateway, OfferPatch, ReferralGateway, UserPatch,
    VipGateway, WalletGateway,
};
use crate::domain::transaction::Transaction;
use crate::domain::vip::{VipPlanId, VipStatus};
use crate::domain::withdrawal::{Withdrawal, WithdrawalRequest, WithdrawalStatus};
use crate::error::ExchangeResult;
use kernel::id::{OfferId, UserId, WithdrawalId};
use platform::http::ApiClient;
use reqwest::Method;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use session::domain::user::UserProfile;
use std::sync::Arc;

/// Market gateway over the platform REST API
#[derive(Clone)]
pub struct HttpExchangeGateway {
    api: Arc<ApiClient>,
}

impl HttpExchangeGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> ExchangeResult<T> {
    Ok(serde_json::from_value(value)?)
}

impl OfferGateway for HttpExchangeGateway {
    async fn list_active(&self) -> ExchangeResult<Vec<Offer>> {
        decode(self.api.get_json("/api/offers?active=true").await?)
    }

    async fn list_by_owner(&self, owner: UserId) -> ExchangeResult<Vec<Offer>> {
        decode(
            self.api
                .get_json(&format!("/api/offers?userId={}", owner))
                .await?,
        )
    }

    async fn post_offer(&self, offer: &NewOffer) -> ExchangeResult<Offer> {
        decode(
            self.api
                .send_json(Method::POST, "/api/offers", offer)
                .await?,
        )
    }
}

impl WalletGateway for HttpExchangeGateway {
    async fn transactions(&self) -> ExchangeResult<Vec<Transaction>> {
        decode(self.api.get_json("/api/transactions").await?)
    }

    async fn request_withdrawal(&self, request: &WithdrawalRequest) -> ExchangeResult<Withdrawal> {
        decode(
            self.api
                .send_json(Method::POST, "/api/withdrawals", request)
                .await?,
        )
    }
}

impl ReferralGateway for HttpExchangeGateway {
    async fn referrals(&self) -> ExchangeResult<Vec<Referral>> {
        decode(self.api.get_json("/api/referrals").await?)
    }
}

impl VipGateway for HttpExchangeGateway {
    async fn status(&self) -> ExchangeResult<VipStatus> {
        decode(self.api.get_json("/api/vip/status").await?)
    }

    async fn purchase(&self, plan: VipPlanId) -> ExchangeResult<()> {
        self.api
            .send_json(Method::POST, "/api/vip/purchase", &json!({ "plan": plan }))
            .await?;
        Ok(())
    }
}

impl LeaderboardGateway for HttpExchangeGateway {
    async fn leaderboard(&self, period: LeaderboardPeriod) -> ExchangeResult<Vec<LeaderboardEntry>> {
        decode(
            self.api
                .get_json(&format!("/api/leaderboard?period={}", period.as_str()))
                .await?,
        )
    }
}

impl AdminGateway for HttpExchangeGateway {
    async fn list_users(&self) -> ExchangeResult<Vec<UserProfile>> {
        decode(self.api.get_json("/api/admin/users").await?)
    }

    async fn list_offers(&self) -> ExchangeResult<Vec<Offer>> {
        decode(self.api.get_json("/api/admin/offers").await?)
    }

    async fn list_transactions(&self) -> ExchangeResult<Vec<Transaction>> {
        decode(self.api.get_json("/api/admin/transactions").await?)
    }

    async fn list_withdrawals(&self) -> ExchangeResult<Vec<Withdrawal>> {
        decode(self.api.get_json("/api/admin/withdrawals").await?)
    }

    async fn update_user(&self, user: UserId, patch: &UserPatch) -> ExchangeResult<()> {
        self.api
            .send_json(Method::PATCH, &format!("/api/admin/users/{}", user), patch)
            .await?;
        Ok(())
    }

    async fn update_offer(&self, offer: OfferId, patch: &OfferPatch) -> ExchangeResult<()> {
        self.api
            .send_json(
                Method::PATCH,
                &format!("/api/admin/offers/{}", offer),
                patch,
            )
            .await?;
        Ok(())
    }

    async fn delete_offer(&self, offer: OfferId) -> ExchangeResult<()> {
        self.api
            .send_empty(Method::DELETE, &format!("/api/admin/offers/{}", offer))
            .await?;
        Ok(())
    }

    async fn set_withdrawal_status(
        &self,
        withdrawal: WithdrawalId,
        status: WithdrawalStatus,
    ) -> ExchangeResult<()> {
        self.api
            .send_json(
                Method::PATCH,
                &format!("/api/admin/withdrawals/{}", withdrawal),
                &json!({ "status": status }),
            )
            .await?;
        Ok(())
    }

    async fn adjust_balance(
        &self,
        user: UserId,
        amount: Decimal,
        reason: &str,
    ) -> ExchangeResult<()> {
        #[derive(serde::Serialize)]
        struct AdjustBody<'a> {
            #[serde(with = "rust_decimal::serde::float")]
            amount: Decimal,
            reason: &'a str,
        }

        self.api
            .send_json(
                Method::POST,
                &format!("/api/admin/users/{}/balance", user),
                &AdjustBody { amount, reason },
            )
            .await?;
        Ok(())
    }
}
