//! Common test utilities for disjoint-forest
//!
//! Shared fixtures and a naive reference model for integration and
//! property tests.

mod fixtures;
mod model;

pub use fixtures::*;
pub use model::*;
