//! Exchange Module
//!
//! The market surfaces of the click exchange: offers, the wallet
//! (transactions and withdrawals), referrals, VIP membership, the
//! leaderboard, and the admin console operations.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, validation, gateway traits
//! - `application/` - Cache-aware use cases
//! - `infra/` - The HTTP gateway over the platform REST API

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use domain::leaderboard::{LeaderboardEntry, LeaderboardPeriod};
pub use domain::offer::{NewOffer, Offer};
pub use domain::referral::Referral;
pub use domain::transaction::{Transaction, TransactionKind};
pub use domain::vip::{VipPlan, VipPlanId, VipStatus};
pub use domain::withdrawal::{
    Withdrawal, WithdrawalMethod, WithdrawalRequest, WithdrawalStatus,
};
pub use error::{ExchangeError, ExchangeResult};
pub use infra::http::HttpExchangeGateway;
