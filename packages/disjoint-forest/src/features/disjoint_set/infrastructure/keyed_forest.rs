//! Key-indexed disjoint-set forest
//!
//! Interns arbitrary `Eq + Hash` keys to dense indices and delegates
//! find/union to [`UnionFind`], so both forests share one implementation of
//! path compression and union by rank (including the tie-break).

use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::fmt::Debug;
use std::hash::Hash;

use super::union_find::UnionFind;
use crate::errors::{ForestError, Result};
use crate::features::disjoint_set::domain::{ForestStats, Rank};
use crate::features::disjoint_set::ports::DisjointSets;
use crate::shared::models::VertexId;

/// Disjoint-set forest over arbitrary hashable keys
///
/// Keys are never removed; sets only merge.
#[derive(Debug, Clone)]
pub struct DisjointSetForest<K> {
    /// Key → dense index
    ids: FxHashMap<K, VertexId>,

    /// Dense index → key (registration order)
    keys: Vec<K>,

    /// Underlying Union-Find
    uf: UnionFind,
}

impl<K> Default for DisjointSetForest<K> {
    fn default() -> Self {
        Self {
            ids: FxHashMap::default(),
            keys: Vec::new(),
            uf: UnionFind::empty(),
        }
    }
}

impl<K> DisjointSetForest<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            keys: Vec::with_capacity(capacity),
            uf: UnionFind::with_capacity(capacity),
        }
    }

    /// Number of registered keys
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of disjoint sets
    #[inline]
    pub fn set_count(&self) -> usize {
        self.uf.count()
    }

    /// Registered keys in registration order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    pub fn stats(&self) -> ForestStats {
        self.uf.stats()
    }
}

impl<K> DisjointSetForest<K>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Register `key` as a new singleton set
    ///
    /// Idempotent: a key that already exists keeps its set and rank.
    /// Fails with `InvalidArgument` only when the forest already holds
    /// `u32::MAX + 1` keys.
    pub fn make_set(&mut self, key: K) -> Result<()> {
        let next = self.keys.len();
        match self.ids.entry(key) {
            Entry::Occupied(_) => Ok(()),
            Entry::Vacant(entry) => {
                let id = VertexId::try_from(next).map_err(|_| {
                    ForestError::invalid_argument(format!(
                        "Forest is full: cannot register more than {} keys",
                        next
                    ))
                })?;
                self.keys.push(entry.key().clone());
                entry.insert(id);
                self.uf.make_set(id);
                Ok(())
            }
        }
    }

    /// Register every key from `keys` (see [`make_set`](Self::make_set))
    pub fn make_sets<I>(&mut self, keys: I) -> Result<()>
    where
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.make_set(key)?;
        }
        Ok(())
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ids.contains_key(key)
    }

    fn id_of<Q>(&self, key: &Q) -> Result<VertexId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.ids
            .get(key)
            .copied()
            .ok_or_else(|| ForestError::not_found(key))
    }

    /// Representative key of the set containing `key`
    ///
    /// Compresses the path: every key visited on the way to the root is
    /// repointed directly at it. Fails with `NotFound` if `key` was never
    /// registered.
    pub fn find_set<Q>(&mut self, key: &Q) -> Result<K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let id = self.id_of(key)?;
        let root = self.uf.find(id);
        Ok(self.keys[root as usize].clone())
    }

    /// Merge the sets containing `first` and `second` by rank
    ///
    /// The root with the smaller rank goes under the larger one. On equal
    /// ranks `first`'s root goes under `second`'s root, whose rank grows by
    /// one. A no-op when both keys already share a set. Both keys are
    /// resolved before anything is mutated.
    pub fn union_sets<Q>(&mut self, first: &Q, second: &Q) -> Result<()>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let a = self.id_of(first)?;
        let b = self.id_of(second)?;
        self.uf.union(a, b);
        Ok(())
    }

    /// Whether both keys belong to the same set
    pub fn connected<Q>(&mut self, first: &Q, second: &Q) -> Result<bool>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let a = self.id_of(first)?;
        let b = self.id_of(second)?;
        Ok(self.uf.connected(a, b))
    }

    /// Stored rank of `key`
    ///
    /// Only meaningful while `key` is a root; for a root it bounds the
    /// height of its subtree.
    pub fn rank<Q>(&self, key: &Q) -> Result<Rank>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        Ok(self.uf.rank(self.id_of(key)?))
    }

    /// Number of keys in the set containing `key`
    pub fn set_size<Q>(&mut self, key: &Q) -> Result<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let id = self.id_of(key)?;
        Ok(self.uf.set_size(id) as usize)
    }

    /// Representative keys, in registration order
    pub fn roots(&self) -> Vec<K> {
        self.uf
            .roots()
            .into_iter()
            .map(|root| self.keys[root as usize].clone())
            .collect()
    }

    /// All sets as a map: representative key → member keys (registration order)
    pub fn sets(&mut self) -> FxHashMap<K, Vec<K>> {
        self.uf
            .sets()
            .into_iter()
            .map(|(root, members)| {
                let members = members
                    .into_iter()
                    .map(|id| self.keys[id as usize].clone())
                    .collect();
                (self.keys[root as usize].clone(), members)
            })
            .collect()
    }
}

impl<K> DisjointSets for DisjointSetForest<K>
where
    K: Eq + Hash + Clone + Debug,
{
    type Key = K;

    fn make_set(&mut self, key: K) -> Result<()> {
        DisjointSetForest::make_set(self, key)
    }

    fn find_set(&mut self, key: &K) -> Result<K> {
        DisjointSetForest::find_set(self, key)
    }

    fn union_sets(&mut self, first: &K, second: &K) -> Result<()> {
        DisjointSetForest::union_sets(self, first, second)
    }
}
