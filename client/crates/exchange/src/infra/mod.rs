//! Infrastructure Layer
//!
//! HTTP gateway over the platform REST API.

pub mod http;
