//! Naive reference partition
//!
//! Every element carries an explicit set label; a union relabels the whole
//! second set. Quadratic, obviously correct.

use disjoint_forest::Edge;

#[derive(Debug, Clone)]
pub struct NaivePartition {
    labels: Vec<usize>,
}

impl NaivePartition {
    pub fn new(n: usize) -> Self {
        Self {
            labels: (0..n).collect(),
        }
    }

    /// Returns false when both were already in one set
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (la, lb) = (self.labels[a], self.labels[b]);
        if la == lb {
            return false;
        }
        for label in self.labels.iter_mut() {
            if *label == lb {
                *label = la;
            }
        }
        true
    }

    pub fn same(&self, a: usize, b: usize) -> bool {
        self.labels[a] == self.labels[b]
    }

    pub fn count(&self) -> usize {
        let mut labels = self.labels.clone();
        labels.sort_unstable();
        labels.dedup();
        labels.len()
    }
}

/// Reference answer for in-range graphs: `n - 1` edges, none closing a cycle
pub fn naive_is_tree(n: usize, edges: &[Edge]) -> bool {
    if n == 0 || edges.len() != n - 1 {
        return false;
    }
    let mut partition = NaivePartition::new(n);
    edges
        .iter()
        .all(|e| partition.union(e.first as usize, e.second as usize))
        && partition.count() == 1
}
