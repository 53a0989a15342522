//! Presentation Layer

pub mod view;
