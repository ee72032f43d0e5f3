//! Graph tree validation on a dense Union-Find
//!
//! A simple undirected graph on `0..n` is a tree iff it has exactly `n - 1`
//! edges, no edge closes a cycle, and one component remains. The edge count
//! is checked first because it needs no union-find work at all.

use tracing::debug;

use crate::config::{ConfigResult, EmptyGraphPolicy, ValidatorConfig};
use crate::errors::{ForestError, Result};
use crate::features::disjoint_set::UnionFind;
use crate::features::tree_validation::domain::TreeVerdict;
use crate::shared::models::{Edge, VertexId};

/// Decides whether an undirected graph on `0..n` is a single tree
#[derive(Debug, Clone, Default)]
pub struct GraphTreeValidator {
    config: ValidatorConfig,
}

impl GraphTreeValidator {
    pub fn new(config: ValidatorConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Whether the graph is a valid tree
    ///
    /// Errors (never `false`) on negative `n`, `n` above the configured
    /// maximum, or an endpoint outside `0..n`.
    pub fn is_valid_tree(&self, n: i64, edges: &[Edge]) -> Result<bool> {
        Ok(self.validate(n, edges)?.is_tree())
    }

    /// Check the graph and report why it is not a tree
    pub fn validate(&self, n: i64, edges: &[Edge]) -> Result<TreeVerdict> {
        if n < 0 {
            return Err(ForestError::invalid_argument(format!(
                "Number of vertices cannot be negative: {}",
                n
            )));
        }
        let vertex_count = VertexId::try_from(n)
            .ok()
            .filter(|&count| count <= self.config.max_vertices)
            .ok_or_else(|| {
                ForestError::invalid_argument(format!(
                    "Number of vertices {} exceeds the limit of {}",
                    n, self.config.max_vertices
                ))
            })?;

        if vertex_count == 0 {
            let accepted =
                edges.is_empty() && self.config.empty_graph == EmptyGraphPolicy::Accept;
            return Ok(if accepted {
                TreeVerdict::Tree
            } else {
                TreeVerdict::EmptyGraph
            });
        }

        let expected = (vertex_count - 1) as usize;
        if edges.len() != expected {
            debug!(
                n,
                expected,
                actual = edges.len(),
                "edge count rules out a tree"
            );
            return Ok(TreeVerdict::EdgeCountMismatch {
                expected,
                actual: edges.len(),
            });
        }

        if self.config.check_all_endpoints {
            for edge in edges {
                resolve(edge, n)?;
            }
        }

        let mut forest = UnionFind::new(vertex_count);
        for (edge_index, edge) in edges.iter().enumerate() {
            let (u, v) = resolve(edge, n)?;
            if !forest.union(u, v) {
                debug!(edge_index, %edge, "edge closes a cycle");
                return Ok(TreeVerdict::Cycle {
                    edge_index,
                    edge: *edge,
                });
            }
        }

        // n - 1 acyclic edges always leave one component; kept as a guard
        let components = forest.count();
        if components == 1 {
            Ok(TreeVerdict::Tree)
        } else {
            debug!(components, "graph is disconnected");
            Ok(TreeVerdict::Disconnected { components })
        }
    }
}

fn resolve(edge: &Edge, n: i64) -> Result<(VertexId, VertexId)> {
    edge.endpoints_within(n)
        .map_err(|vertex| ForestError::vertex_out_of_range(vertex, n))
}

/// Tree check with the default configuration
///
/// ```
/// use disjoint_forest::{is_valid_tree, Edge};
///
/// let edges: Vec<Edge> = vec![(0, 1).into(), (0, 2).into(), (0, 3).into(), (1, 4).into()];
/// assert!(is_valid_tree(5, &edges).unwrap());
/// ```
pub fn is_valid_tree(n: i64, edges: &[Edge]) -> Result<bool> {
    GraphTreeValidator::default().is_valid_tree(n, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use pretty_assertions::assert_eq;

    fn edges(pairs: &[(i64, i64)]) -> Vec<Edge> {
        pairs.iter().copied().map(Edge::from).collect()
    }

    #[test]
    fn test_star_with_tail_is_tree() {
        let graph = edges(&[(0, 1), (0, 2), (0, 3), (1, 4)]);
        assert!(is_valid_tree(5, &graph).unwrap());
    }

    #[test]
    fn test_extra_edge_is_not_tree() {
        let graph = edges(&[(0, 1), (1, 2), (2, 3), (1, 3), (1, 4)]);
        assert!(!is_valid_tree(5, &graph).unwrap());

        let verdict = GraphTreeValidator::default().validate(5, &graph).unwrap();
        assert_eq!(
            verdict,
            TreeVerdict::EdgeCountMismatch {
                expected: 4,
                actual: 5
            }
        );
    }

    #[test]
    fn test_single_vertex_is_tree() {
        assert!(is_valid_tree(1, &[]).unwrap());
    }

    #[test]
    fn test_disconnected_forest_is_not_tree() {
        let graph = edges(&[(0, 1), (2, 3)]);
        assert!(!is_valid_tree(4, &graph).unwrap());
    }

    #[test]
    fn test_out_of_range_endpoint_is_error() {
        let graph = edges(&[(0, 1), (1, 5)]);
        let err = is_valid_tree(3, &graph).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
        assert!(err.message.contains('5'));
    }

    #[test]
    fn test_negative_endpoint_is_error() {
        let graph = edges(&[(0, -1)]);
        assert!(is_valid_tree(2, &graph).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_negative_vertex_count_is_error() {
        let err = is_valid_tree(-1, &[]).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.message.contains("negative"));
    }

    #[test]
    fn test_vertex_count_above_limit_is_error() {
        let validator =
            GraphTreeValidator::new(ValidatorConfig::default().max_vertices(3)).unwrap();
        assert!(validator.is_valid_tree(3, &edges(&[(0, 1), (1, 2)])).unwrap());
        assert!(validator
            .is_valid_tree(4, &[])
            .unwrap_err()
            .is_invalid_argument());

        // Beyond the dense index range
        assert!(is_valid_tree(i64::from(u32::MAX) + 1, &[])
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_edge_count_checked_before_endpoints() {
        // Wrong count short-circuits even with a bad endpoint present
        let graph = edges(&[(0, 9)]);
        assert!(!is_valid_tree(4, &graph).unwrap());
    }

    #[test]
    fn test_cycle_reports_first_closing_edge() {
        // Right count, but (2, 0) closes 0-1-2 and vertex 3 is left out
        let graph = edges(&[(0, 1), (1, 2), (2, 0)]);
        let verdict = GraphTreeValidator::default().validate(4, &graph).unwrap();
        assert_eq!(
            verdict,
            TreeVerdict::Cycle {
                edge_index: 2,
                edge: Edge::new(2, 0)
            }
        );
    }

    #[test]
    fn test_self_loop_is_cycle() {
        let graph = edges(&[(0, 1), (1, 1)]);
        let verdict = GraphTreeValidator::default().validate(3, &graph).unwrap();
        assert!(matches!(verdict, TreeVerdict::Cycle { edge_index: 1, .. }));
    }

    #[test]
    fn test_duplicate_edge_is_cycle() {
        let graph = edges(&[(0, 1), (1, 0)]);
        assert!(!is_valid_tree(3, &graph).unwrap());
    }

    #[test]
    fn test_eager_endpoint_check_beats_cycle() {
        // Cycle at index 1, bad endpoint at index 2
        let graph = edges(&[(0, 1), (1, 0), (2, 7)]);
        assert!(is_valid_tree(4, &graph).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_lazy_endpoint_check_stops_at_cycle() {
        let validator =
            GraphTreeValidator::new(ValidatorConfig::default().check_all_endpoints(false))
                .unwrap();
        let graph = edges(&[(0, 1), (1, 0), (2, 7)]);
        assert!(!validator.is_valid_tree(4, &graph).unwrap());

        // A bad endpoint before any cycle is still an error
        let graph = edges(&[(0, 1), (2, 7), (1, 0)]);
        assert!(validator.is_valid_tree(4, &graph).is_err());
    }

    #[test]
    fn test_empty_graph_rejected_by_default() {
        let verdict = GraphTreeValidator::default().validate(0, &[]).unwrap();
        assert_eq!(verdict, TreeVerdict::EmptyGraph);
        assert!(!is_valid_tree(0, &[]).unwrap());
    }

    #[test]
    fn test_empty_graph_accepted_by_policy() {
        let validator =
            GraphTreeValidator::new(ValidatorConfig::default().empty_graph(EmptyGraphPolicy::Accept))
                .unwrap();
        assert!(validator.is_valid_tree(0, &[]).unwrap());
        // No vertex exists for an edge to touch
        assert!(!validator.is_valid_tree(0, &edges(&[(0, 0)])).unwrap());
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(GraphTreeValidator::new(ValidatorConfig::default().max_vertices(0)).is_err());
    }
}
