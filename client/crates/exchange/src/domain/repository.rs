//! Gateway Traits
//!
//! Interfaces to the market surfaces of the REST API. The HTTP
//! implementation lives in the infrastructure layer; tests use
//! in-memory fakes.

use crate::domain::leaderboard::{LeaderboardEntry, LeaderboardPeriod};
use crate::domain::offer::{NewOffer, Offer};
use crate::domain::referral::Referral;
use crate::domain::transaction::Transaction;
use crate::domain::vip::{VipPlanId, VipStatus};
use crate::domain::withdrawal::{Withdrawal, WithdrawalRequest, WithdrawalStatus};
use crate::error::ExchangeResult;
use kernel::id::{OfferId, UserId, WithdrawalId};
use rust_decimal::Decimal;
use serde::Serialize;
use session::domain::user::{UserProfile, UserRole};

/// Offer listing and posting
#[trait_variant::make(OfferGateway: Send)]
pub trait LocalOfferGateway {
    /// GET /api/offers?active=true
    async fn list_active(&self) -> ExchangeResult<Vec<Offer>>;

    /// GET /api/offers?userId={id}
    async fn list_by_owner(&self, owner: UserId) -> ExchangeResult<Vec<Offer>>;

    /// POST /api/offers
    async fn post_offer(&self, offer: &NewOffer) -> ExchangeResult<Offer>;
}

/// Wallet reads and the payout request
#[trait_variant::make(WalletGateway: Send)]
pub trait LocalWalletGateway {
    /// GET /api/transactions
    async fn transactions(&self) -> ExchangeResult<Vec<Transaction>>;

    /// POST /api/withdrawals
    async fn request_withdrawal(&self, request: &WithdrawalRequest) -> ExchangeResult<Withdrawal>;
}

/// Referral program reads
#[trait_variant::make(ReferralGateway: Send)]
pub trait LocalReferralGateway {
    /// GET /api/referrals
    async fn referrals(&self) -> ExchangeResult<Vec<Referral>>;
}

/// VIP membership
#[trait_variant::make(VipGateway: Send)]
pub trait LocalVipGateway {
    /// GET /api/vip/status
    async fn status(&self) -> ExchangeResult<VipStatus>;

    /// POST /api/vip/purchase
    async fn purchase(&self, plan: VipPlanId) -> ExchangeResult<()>;
}

/// Leaderboard reads
#[trait_variant::make(LeaderboardGateway: Send)]
pub trait LocalLeaderboardGateway {
    /// GET /api/leaderboard?period={period}
    async fn leaderboard(&self, period: LeaderboardPeriod) -> ExchangeResult<Vec<LeaderboardEntry>>;
}

/// Partial update for a member (admin console)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vip_member: Option<bool>,
}

/// Partial update for an offer (admin console)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub epc: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_clicks_per_day: Option<u32>,
}

/// Admin console operations
#[trait_variant::make(AdminGateway: Send)]
pub trait LocalAdminGateway {
    /// GET /api/admin/users
    async fn list_users(&self) -> ExchangeResult<Vec<UserProfile>>;

    /// GET /api/admin/offers
    async fn list_offers(&self) -> ExchangeResult<Vec<Offer>>;

    /// GET /api/admin/transactions
    async fn list_transactions(&self) -> ExchangeResult<Vec<Transaction>>;

    /// GET /api/admin/withdrawals
    async fn list_withdrawals(&self) -> ExchangeResult<Vec<Withdrawal>>;

    /// PATCH /api/admin/users/{id}
    async fn update_user(&self, user: UserId, patch: &UserPatch) -> ExchangeResult<()>;

    /// PATCH /api/admin/offers/{id}
    async fn update_offer(&self, offer: OfferId, patch: &OfferPatch) -> ExchangeResult<()>;

    /// DELETE /api/admin/offers/{id}
    async fn delete_offer(&self, offer: OfferId) -> ExchangeResult<()>;

    /// PATCH /api/admin/withdrawals/{id}
    async fn set_withdrawal_status(
        &self,
        withdrawal: WithdrawalId,
        status: WithdrawalStatus,
    ) -> ExchangeResult<()>;

    /// POST /api/admin/users/{id}/balance
    async fn adjust_balance(
        &self,
        user: UserId,
        amount: Decimal,
        reason: &str,
    ) -> ExchangeResult<()>;
}
