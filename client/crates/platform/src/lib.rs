//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Bearer-authenticated REST transport ([`http::ApiClient`])
//! - Deterministic identity mappings for avatars ([`hash`])

pub mod hash;
pub mod http;
