//! Application Layer - Use Cases
//!
//! Sign-in, sign-up, sign-out, and the on-load restore.

pub mod restore;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
