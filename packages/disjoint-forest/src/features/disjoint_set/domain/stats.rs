use serde::{Deserialize, Serialize};
use std::fmt;

use super::Rank;

/// Snapshot of forest shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestStats {
    /// Registered elements
    pub elements: usize,
    /// Disjoint sets (roots)
    pub sets: usize,
    /// Largest rank held by any root
    pub max_rank: Rank,
}

impl ForestStats {
    /// Successful unions performed so far (each one removes exactly one root)
    pub fn merges(&self) -> usize {
        self.elements - self.sets
    }
}

impl fmt::Display for ForestStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} elements in {} sets (max rank {})",
            self.elements, self.sets, self.max_rank
        )
    }
}
