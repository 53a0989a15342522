//! Infrastructure Layer
//!
//! HTTP auth gateway and file-backed credential persistence.

pub mod file;
pub mod http;
