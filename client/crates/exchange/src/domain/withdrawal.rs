//! Withdrawals
//!
//! Form validation for the payout request and the admin-side view of
//! pending withdrawals. The platform floor for a payout is 50.00.

use chrono::{DateTime, Utc};
use kernel::id::{UserId, WithdrawalId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Minimum payout the platform processes
pub fn min_withdrawal() -> Decimal {
    Decimal::new(50, 0)
}

/// Supported payout rails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithdrawalMethod {
    Paypal,
    Bitcoin,
    BankTransfer,
}

impl WithdrawalMethod {
    pub fn label(&self) -> &'static str {
        match self {
            WithdrawalMethod::Paypal => "PayPal",
            WithdrawalMethod::Bitcoin => "Bitcoin",
            WithdrawalMethod::BankTransfer => "Bank transfer",
        }
    }
}

/// Admin-visible lifecycle of a withdrawal request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithdrawalStatus {
    Pending,
    Approved,
    Rejected,
}

/// Payout request form
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub method: WithdrawalMethod,
    /// PayPal email, BTC address, or bank account reference
    pub address: String,
    pub terms: bool,
}

impl WithdrawalRequest {
    /// Validate the form against the member's current balance
    pub fn validate(&self, balance: Decimal) -> Result<(), String> {
        if self.amount < min_withdrawal() {
            return Err(format!(
                "Minimum withdrawal amount is {}",
                min_withdrawal()
            ));
        }
        if self.amount > balance {
            return Err("Withdrawal amount exceeds your balance".to_string());
        }
        if self.address.trim().is_empty() {
            return Err("Please enter a payout address".to_string());
        }
        if !self.terms {
            return Err("Please accept the withdrawal terms".to_string());
        }
        Ok(())
    }
}

/// A recorded withdrawal, as the wallet and admin lists show it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    pub id: WithdrawalId,
    pub user_id: UserId,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub method: WithdrawalMethod,
    #[serde(default)]
    pub address: String,
    pub status: WithdrawalStatus,
    pub created_at: DateTime<Utc>,
}
