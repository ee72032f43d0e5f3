use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::models::Edge;

/// Outcome of checking whether a graph is a tree
///
/// Every variant except [`TreeVerdict::Tree`] is a structural "no". Malformed
/// input never produces a verdict; it is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum TreeVerdict {
    /// Connected and acyclic
    Tree,

    /// Zero vertices, rejected by the empty-graph policy
    EmptyGraph,

    /// A tree on `n` vertices has exactly `n - 1` edges
    EdgeCountMismatch { expected: usize, actual: usize },

    /// `edge` (at `edge_index` in input order) joins two vertices that were
    /// already connected
    Cycle { edge_index: usize, edge: Edge },

    /// All edges were acyclic but the graph splits into `components` parts
    Disconnected { components: usize },
}

impl TreeVerdict {
    pub fn is_tree(&self) -> bool {
        matches!(self, TreeVerdict::Tree)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TreeVerdict::Tree => "tree",
            TreeVerdict::EmptyGraph => "empty_graph",
            TreeVerdict::EdgeCountMismatch { .. } => "edge_count_mismatch",
            TreeVerdict::Cycle { .. } => "cycle",
            TreeVerdict::Disconnected { .. } => "disconnected",
        }
    }
}

impl fmt::Display for TreeVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeVerdict::Tree => write!(f, "valid tree"),
            TreeVerdict::EmptyGraph => write!(f, "not a tree: graph has no vertices"),
            TreeVerdict::EdgeCountMismatch { expected, actual } => write!(
                f,
                "not a tree: expected {} edges, found {}",
                expected, actual
            ),
            TreeVerdict::Cycle { edge_index, edge } => write!(
                f,
                "not a tree: edge #{} {} closes a cycle",
                edge_index, edge
            ),
            TreeVerdict::Disconnected { components } => write!(
                f,
                "not a tree: {} disconnected components",
                components
            ),
        }
    }
}
