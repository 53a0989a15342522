//! Domain Layer - Member identity and credential
//!
//! This layer contains:
//! - The member profile entity and roles
//! - The persisted credential value object
//! - Gateway traits (interfaces)

pub mod credential;
pub mod repository;
pub mod user;
