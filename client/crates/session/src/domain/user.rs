//! Member Profile
//!
//! The signed-in member as the API reports them. The client never
//! computes the balance authoritatively; [`UserProfile::credit`] and
//! [`UserProfile::debit`] are optimistic display patches applied while
//! the relevant cache keys are re-fetched.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Member role on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Member,
    Admin,
}

/// Member profile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub clicks_received: u32,
    pub clicks_given: u32,
    pub referral_code: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub vip_member: bool,
    #[serde(default)]
    pub vip_expiry: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub daily_login_streak: u32,
}

fn default_active() -> bool {
    true
}

impl UserProfile {
    /// Optimistically add a reward to the displayed balance
    pub fn credit(&mut self, amount: Decimal) {
        self.balance += amount;
    }

    /// Optimistically subtract from the displayed balance
    pub fn debit(&mut self, amount: Decimal) {
        self.balance -= amount;
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// VIP membership currently in force
    pub fn is_vip_active(&self, now: DateTime<Utc>) -> bool {
        self.vip_member
            && match self.vip_expiry {
                Some(expiry) => expiry > now,
                None => true,
            }
    }
}

/// Validate a username the way the registration form does
pub fn validate_username(username: &str) -> Result<(), String> {
    let trimmed = username.trim();
    if trimmed.len() < 3 {
        return Err("Username must be at least 3 characters".to_string());
    }
    if trimmed.len() > 20 {
        return Err("Username must be at most 20 characters".to_string());
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err("Username may only contain letters, numbers and underscores".to_string());
    }
    Ok(())
}

/// Minimal plausibility check for an email address
pub fn validate_email(email: &str) -> Result<(), String> {
    let trimmed = email.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err("Please enter a valid email address".to_string()),
    }
}
