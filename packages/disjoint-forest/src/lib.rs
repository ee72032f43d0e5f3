/*
 * disjoint-forest - Union-Find engine and graph tree validation
 *
 * Feature-First Architecture:
 * - shared/      : Common models (Edge, VertexId)
 * - features/    : disjoint_set (dense + keyed forests) → tree_validation
 * - config/      : Validator configuration (YAML v1)
 *
 * Complexity:
 * - find / union: O(α(n)) amortized (path compression + union by rank)
 * - is_valid_tree: O(n · α(n)), O(1) when the edge count already rules it out
 */

/// Shared models
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, EmptyGraphPolicy, ValidatorConfig};
pub use errors::{ErrorKind, ForestError, Result};
pub use features::disjoint_set::{DisjointSetForest, DisjointSets, ForestStats, Rank, UnionFind};
pub use features::tree_validation::{
    is_valid_tree, GraphInput, GraphTreeValidator, InputFormat, TreeVerdict,
};
pub use shared::models::{Edge, VertexId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_functionality() {
        let mut forest = DisjointSetForest::new();
        forest.make_sets(["a", "b", "c"]).unwrap();
        forest.union_sets("a", "b").unwrap();

        assert!(forest.connected("a", "b").unwrap());
        assert!(!forest.connected("a", "c").unwrap());
        assert_eq!(forest.set_count(), 2);

        let edges = [Edge::new(0, 1), Edge::new(1, 2)];
        assert!(is_valid_tree(3, &edges).unwrap());
    }
}
