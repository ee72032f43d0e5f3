//! Shared module - value types used by every feature

pub mod models;

pub use models::*;
