//! Infrastructure layer for tree validation

pub mod validator;

pub use validator::{is_valid_tree, GraphTreeValidator};
