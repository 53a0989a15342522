//! Presentation Layer
//!
//! View models the UI host renders.

pub mod view;
