//! Undirected edge between two labeled vertices
//!
//! Endpoints are kept as raw signed integers: an edge read from input may
//! name a vertex that does not exist, and that must surface as an error
//! from the validator rather than be lost in a conversion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense vertex index (`0..n`)
pub type VertexId = u32;

/// Undirected edge `(first, second)`
///
/// Serialized as a two-element array, e.g. `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct Edge {
    pub first: i64,
    pub second: i64,
}

impl Edge {
    pub fn new(first: i64, second: i64) -> Self {
        Self { first, second }
    }

    /// Both endpoints as dense indices, or the first endpoint outside `0..n`.
    pub fn endpoints_within(&self, n: i64) -> Result<(VertexId, VertexId), i64> {
        let check = |v: i64| {
            if (0..n).contains(&v) {
                VertexId::try_from(v).map_err(|_| v)
            } else {
                Err(v)
            }
        };
        Ok((check(self.first)?, check(self.second)?))
    }

    pub fn is_self_loop(&self) -> bool {
        self.first == self.second
    }
}

impl From<(i64, i64)> for Edge {
    fn from((first, second): (i64, i64)) -> Self {
        Self::new(first, second)
    }
}

impl From<Edge> for (i64, i64) {
    fn from(edge: Edge) -> Self {
        (edge.first, edge.second)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Edge::new(0, 1).to_string(), "(0, 1)");
        assert_eq!(Edge::new(-3, 7).to_string(), "(-3, 7)");
    }

    #[test]
    fn test_endpoints_within() {
        assert_eq!(Edge::new(0, 2).endpoints_within(3), Ok((0, 2)));
        assert_eq!(Edge::new(1, 5).endpoints_within(3), Err(5));
        assert_eq!(Edge::new(-1, 0).endpoints_within(3), Err(-1));
        // First offending endpoint is reported
        assert_eq!(Edge::new(9, -1).endpoints_within(3), Err(9));
    }

    #[test]
    fn test_serde_as_pair() {
        let edge: Edge = serde_json::from_str("[4, 2]").unwrap();
        assert_eq!(edge, Edge::new(4, 2));
        assert_eq!(serde_json::to_string(&edge).unwrap(), "[4,2]");
    }

    #[test]
    fn test_self_loop() {
        assert!(Edge::new(3, 3).is_self_loop());
        assert!(!Edge::from((3, 4)).is_self_loop());
    }
}
