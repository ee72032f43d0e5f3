//! # Disjoint-Set Forest
//!
//! Union-Find with path compression and union by rank, in two key domains:
//! - [`UnionFind`]: dense indices `0..n`, tracks the live number of sets
//! - [`DisjointSetForest`]: arbitrary `Eq + Hash` keys, interned onto a `UnionFind`
//!
//! The structure only coarsens: elements are created, sets merge, nothing
//! is ever split or removed.
//!
//! ## Usage
//! ```
//! use disjoint_forest::DisjointSetForest;
//!
//! let mut forest = DisjointSetForest::new();
//! forest.make_set("a").unwrap();
//! forest.make_set("b").unwrap();
//!
//! // Equal ranks: the second key's root survives
//! forest.union_sets("a", "b").unwrap();
//! assert_eq!(forest.find_set("a").unwrap(), "b");
//! assert_eq!(forest.rank("b").unwrap(), 1);
//! ```

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{ForestStats, Rank};
pub use infrastructure::{DisjointSetForest, UnionFind};
pub use ports::DisjointSets;
