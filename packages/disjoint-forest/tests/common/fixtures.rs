//! Graph fixtures

use disjoint_forest::Edge;

/// Expected outcome of a tree check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    Tree,
    NotTree,
    Error,
}

/// Named literal graph case
pub struct GraphCase {
    pub name: &'static str,
    pub n: i64,
    pub edges: &'static [(i64, i64)],
    pub expect: Expect,
}

impl GraphCase {
    pub fn edges(&self) -> Vec<Edge> {
        self.edges.iter().copied().map(Edge::from).collect()
    }
}

/// Literal tree-check cases under the default configuration
pub const LITERAL_CASES: &[GraphCase] = &[
    GraphCase {
        name: "star_with_tail",
        n: 5,
        edges: &[(0, 1), (0, 2), (0, 3), (1, 4)],
        expect: Expect::Tree,
    },
    GraphCase {
        name: "extra_edge_closes_cycle",
        n: 5,
        edges: &[(0, 1), (1, 2), (2, 3), (1, 3), (1, 4)],
        expect: Expect::NotTree,
    },
    GraphCase {
        name: "single_vertex",
        n: 1,
        edges: &[],
        expect: Expect::Tree,
    },
    GraphCase {
        name: "two_disjoint_edges",
        n: 4,
        edges: &[(0, 1), (2, 3)],
        expect: Expect::NotTree,
    },
    GraphCase {
        name: "endpoint_out_of_range",
        n: 3,
        edges: &[(0, 1), (1, 5)],
        expect: Expect::Error,
    },
    GraphCase {
        name: "negative_vertex_count",
        n: -1,
        edges: &[],
        expect: Expect::Error,
    },
    GraphCase {
        name: "empty_graph",
        n: 0,
        edges: &[],
        expect: Expect::NotTree,
    },
    GraphCase {
        name: "path",
        n: 4,
        edges: &[(3, 2), (2, 1), (1, 0)],
        expect: Expect::Tree,
    },
    GraphCase {
        name: "triangle_plus_isolated",
        n: 4,
        edges: &[(0, 1), (1, 2), (2, 0)],
        expect: Expect::NotTree,
    },
];

/// Edges of a path `0 - 1 - ... - (n-1)`
pub fn path_edges(n: i64) -> Vec<Edge> {
    (1..n).map(|v| Edge::new(v - 1, v)).collect()
}
