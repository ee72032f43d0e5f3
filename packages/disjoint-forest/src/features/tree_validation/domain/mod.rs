//! Domain types for tree validation

mod verdict;

pub use verdict::TreeVerdict;
