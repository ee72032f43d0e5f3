//! # Graph Tree Validation
//!
//! Decides whether an undirected graph on vertices `0..n` is a single
//! connected, acyclic tree, using a dense [`UnionFind`](crate::UnionFind)
//! for cycle detection.
//!
//! ## Usage
//! ```
//! use disjoint_forest::{Edge, GraphTreeValidator, TreeVerdict};
//!
//! let validator = GraphTreeValidator::default();
//! let edges = [Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)];
//!
//! let verdict = validator.validate(4, &edges).unwrap();
//! assert_eq!(verdict, TreeVerdict::Cycle { edge_index: 2, edge: Edge::new(2, 0) });
//!
//! // Malformed input is an error, not "false"
//! assert!(validator.is_valid_tree(3, &[Edge::new(0, 1), Edge::new(1, 5)]).is_err());
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{GraphInput, InputFormat};
pub use domain::TreeVerdict;
pub use infrastructure::{is_valid_tree, GraphTreeValidator};
