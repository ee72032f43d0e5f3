//! Union-Find (Disjoint Set Union) over dense indices
//!
//! Path compression plus union by rank gives O(α(n)) amortized find and
//! union, where α is the inverse Ackermann function.
//!
//! `find` is a two-pass loop (ascend to the root, then repoint every
//! visited node at it), so stack use stays constant no matter how long a
//! chain grows before it is first compressed.
//!
//! Tie-break: when two roots of equal rank merge, the root of the
//! *second* argument survives and its rank grows by one.
//!
//! # References
//! - Tarjan, R. E. "Efficiency of a Good But Not Linear Set Union Algorithm" (1975)

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::cmp::Ordering;

use crate::errors::{ForestError, Result};
use crate::features::disjoint_set::domain::{ForestStats, Rank};
use crate::features::disjoint_set::ports::DisjointSets;
use crate::shared::models::VertexId;

/// Dense disjoint-set forest over `0..len()`
///
/// Serializes as a `{ parent, rank, size, set_count }` snapshot. Export
/// only: forests are built through `new`/`make_set`/`union`, never loaded.
///
/// ```compile_fail
/// let uf: disjoint_forest::UnionFind = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnionFind {
    /// `parent[i] == i` marks a root
    parent: Vec<VertexId>,

    /// Height bound; read only at roots
    rank: Vec<Rank>,

    /// Member count; read only at roots
    size: Vec<u32>,

    /// Live roots
    set_count: usize,
}

impl Default for UnionFind {
    fn default() -> Self {
        Self::empty()
    }
}

impl UnionFind {
    /// `n` singletons `0..n`
    pub fn new(n: u32) -> Self {
        let len = n as usize;
        Self {
            parent: (0..n).collect(),
            rank: vec![0; len],
            size: vec![1; len],
            set_count: len,
        }
    }

    /// No elements yet; grow with [`make_set`](Self::make_set)
    pub fn empty() -> Self {
        Self {
            parent: Vec::new(),
            rank: Vec::new(),
            size: Vec::new(),
            set_count: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
            size: Vec::with_capacity(capacity),
            set_count: 0,
        }
    }

    /// Ensure element `x` exists
    ///
    /// Every index up to and including `x` that did not exist yet becomes a
    /// singleton root with rank 0. Existing elements are untouched.
    pub fn make_set(&mut self, x: VertexId) {
        let idx = x as usize;
        let old_len = self.parent.len();
        if idx < old_len {
            return;
        }

        let new_len = idx + 1;
        self.parent.extend(old_len as VertexId..=x);
        self.rank.resize(new_len, 0);
        self.size.resize(new_len, 1);
        self.set_count += new_len - old_len;
    }

    /// Whether `x` has been created
    #[inline]
    pub fn contains(&self, x: VertexId) -> bool {
        (x as usize) < self.parent.len()
    }

    /// Root of `x`'s tree; every node on the walk is repointed at it
    ///
    /// # Panics
    /// If `x` was never created.
    #[inline]
    pub fn find(&mut self, x: VertexId) -> VertexId {
        let root = self.find_readonly(x);

        let mut current = x;
        while current != root {
            let next = self.parent[current as usize];
            self.parent[current as usize] = root;
            current = next;
        }
        root
    }

    /// Root of `x`'s tree, leaving the parent links as they are
    ///
    /// # Panics
    /// If `x` was never created.
    #[inline]
    pub fn find_readonly(&self, x: VertexId) -> VertexId {
        let mut current = x;
        while self.parent[current as usize] != current {
            current = self.parent[current as usize];
        }
        current
    }

    /// Merge the trees of `x` and `y`, lower rank under higher
    ///
    /// Returns `false` when `x` and `y` already share a root (nothing
    /// changes), `true` after merging.
    ///
    /// # Panics
    /// If either element was never created.
    pub fn union(&mut self, x: VertexId, y: VertexId) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        let new_root = self.link(root_x, root_y);

        #[cfg(feature = "trace")]
        tracing::trace!(x, y, root_x, root_y, new_root, "union");
        #[cfg(not(feature = "trace"))]
        let _ = new_root;

        true
    }

    /// Attach one root under the other, returning the survivor
    fn link(&mut self, root_x: VertexId, root_y: VertexId) -> VertexId {
        let rx = root_x as usize;
        let ry = root_y as usize;

        let new_root = match self.rank[rx].cmp(&self.rank[ry]) {
            Ordering::Less => {
                self.parent[rx] = root_y;
                self.size[ry] += self.size[rx];
                root_y
            }
            Ordering::Greater => {
                self.parent[ry] = root_x;
                self.size[rx] += self.size[ry];
                root_x
            }
            Ordering::Equal => {
                // Second root wins ties
                self.parent[rx] = root_y;
                self.size[ry] += self.size[rx];
                self.rank[ry] += 1;
                root_y
            }
        };

        self.set_count -= 1;
        new_root
    }

    /// Same root?
    #[inline]
    pub fn connected(&mut self, x: VertexId, y: VertexId) -> bool {
        self.find(x) == self.find(y)
    }

    /// Same root, without compressing
    #[inline]
    pub fn connected_readonly(&self, x: VertexId, y: VertexId) -> bool {
        self.find_readonly(x) == self.find_readonly(y)
    }

    /// Stored rank of `x` (an upper bound on subtree height while `x` is a root)
    #[inline]
    pub fn rank(&self, x: VertexId) -> Rank {
        self.rank[x as usize]
    }

    /// Members in `x`'s set
    #[inline]
    pub fn set_size(&mut self, x: VertexId) -> u32 {
        let root = self.find(x);
        self.size[root as usize]
    }

    /// Live set count (one per root)
    #[inline]
    pub fn count(&self) -> usize {
        self.set_count
    }

    /// Elements created so far
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Members of `x`'s set, ascending
    pub fn get_set(&mut self, x: VertexId) -> Vec<VertexId> {
        let root = self.find(x);
        let mut members = Vec::with_capacity(self.size[root as usize] as usize);
        for e in 0..self.len() as VertexId {
            if self.find(e) == root {
                members.push(e);
            }
        }
        members
    }

    /// One representative per set, ascending
    pub fn roots(&self) -> Vec<VertexId> {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| p as usize == i)
            .map(|(_, &p)| p)
            .collect()
    }

    /// Partition as root → members (ascending)
    pub fn sets(&mut self) -> FxHashMap<VertexId, Vec<VertexId>> {
        let mut sets: FxHashMap<VertexId, Vec<VertexId>> = FxHashMap::default();
        for i in 0..self.parent.len() as VertexId {
            let root = self.find(i);
            sets.entry(root).or_default().push(i);
        }
        sets
    }

    pub fn stats(&self) -> ForestStats {
        let max_rank = self
            .parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| p as usize == i)
            .map(|(i, _)| self.rank[i])
            .max()
            .unwrap_or(0);

        ForestStats {
            elements: self.len(),
            sets: self.set_count,
            max_rank,
        }
    }
}

impl DisjointSets for UnionFind {
    type Key = VertexId;

    /// Registers exactly `key`: indices are handed out in order, so `key`
    /// may be an existing index or the next free one, never further ahead.
    fn make_set(&mut self, key: VertexId) -> Result<()> {
        let next = self.len();
        if key as usize > next {
            return Err(ForestError::invalid_argument(format!(
                "Index {} skips ahead of the next free index {}",
                key, next
            )));
        }
        UnionFind::make_set(self, key);
        Ok(())
    }

    fn find_set(&mut self, key: &VertexId) -> Result<VertexId> {
        if !self.contains(*key) {
            return Err(ForestError::not_found(key));
        }
        Ok(self.find(*key))
    }

    fn union_sets(&mut self, first: &VertexId, second: &VertexId) -> Result<()> {
        for key in [first, second] {
            if !self.contains(*key) {
                return Err(ForestError::not_found(key));
            }
        }
        self.union(*first, *second);
        Ok(())
    }
}
