//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities. The platform API
//! identifies every entity with a numeric id, so the wrapper is a
//! thin phantom-typed `i64` that serializes transparently.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// let id = UserId::new(7);
/// assert_eq!(id.value(), 7);
/// ```
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    value: i64,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Wrap a raw id received from the API
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying numeric id
    pub const fn value(&self) -> i64 {
        self.value
    }
}

// Manual impls: derives would bound `T`, but the phantom carries no data.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for member ids
    pub struct User;

    /// Marker for offer ids
    pub struct Offer;

    /// Marker for verified-click record ids
    pub struct Click;

    /// Marker for chat message ids
    pub struct Message;

    /// Marker for wallet transaction ids
    pub struct Transaction;

    /// Marker for withdrawal request ids
    pub struct Withdrawal;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type OfferId = Id<markers::Offer>;
pub type ClickId = Id<markers::Click>;
pub type MessageId = Id<markers::Message>;
pub type TransactionId = Id<markers::Transaction>;
pub type WithdrawalId = Id<markers::Withdrawal>;
