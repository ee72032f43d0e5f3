//! Feature modules
//!
//! - `disjoint_set`: union-find engine (dense and keyed forests)
//! - `tree_validation`: tree check for undirected graphs built on the dense forest

pub mod disjoint_set;
pub mod tree_validation;
