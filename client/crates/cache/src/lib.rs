//! Data-Fetch Cache
//!
//! Request-keyed cache for REST reads, shared by every page-level
//! component. One global policy, chosen for predictability over
//! freshness:
//!
//! - **fetch once**: a settled result (value *or* error) is returned
//!   to every later caller without touching the network
//! - **never auto-refetch**: no focus/interval refetching; staleness
//!   is infinite until someone invalidates
//! - **never auto-retry**: a failed fetch is a terminal notice; the
//!   only way back is explicit invalidation
//!
//! Mutations call [`FetchCache::invalidate_prefix`] for the read keys
//! they affect (e.g. a successful withdrawal invalidates
//! `/api/transactions`), which is what makes the no-refetch policy
//! acceptable: balances are re-read explicitly after every mutation
//! that could change them.

pub mod cache;
pub mod key;

pub use cache::{FetchCache, QueryStatus};
pub use key::QueryKey;

#[cfg(test)]
mod tests;
