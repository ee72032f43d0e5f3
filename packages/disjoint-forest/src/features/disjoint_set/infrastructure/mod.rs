//! Infrastructure layer for disjoint sets
//!
//! - **UnionFind**: dense `0..n` forest, owns find/union and the set counter
//! - **DisjointSetForest**: key interner over `UnionFind`

pub mod keyed_forest;
pub mod union_find;

pub use keyed_forest::DisjointSetForest;
pub use union_find::UnionFind;
