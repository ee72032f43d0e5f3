//! Ports (Interfaces) for disjoint-set forests
//!
//! Both the dense index forest and the keyed forest answer the same three
//! questions, so code written against [`DisjointSets`] (tests, benchmarks,
//! callers that do not care about the key domain) runs on either.

use crate::errors::Result;

/// Make / find / union over some element identity
///
/// # Example
/// ```
/// use disjoint_forest::{DisjointSetForest, DisjointSets};
///
/// fn join_all<S: DisjointSets<Key = &'static str>>(sets: &mut S) {
///     for key in ["a", "b", "c"] {
///         sets.make_set(key).unwrap();
///     }
///     sets.union_sets(&"a", &"b").unwrap();
///     sets.union_sets(&"b", &"c").unwrap();
/// }
///
/// let mut forest = DisjointSetForest::new();
/// join_all(&mut forest);
/// assert_eq!(forest.find_set(&"a").unwrap(), "b");
/// ```
pub trait DisjointSets {
    type Key;

    /// Register `key` as a singleton set; no-op if already registered.
    ///
    /// Fails with `InvalidArgument` when the forest cannot hold `key` as a
    /// set of its own (index overflow, or a dense index past the next free
    /// one); nothing is registered then.
    fn make_set(&mut self, key: Self::Key) -> Result<()>;

    /// Representative of the set containing `key`.
    ///
    /// Fails with `NotFound` if `key` was never registered.
    fn find_set(&mut self, key: &Self::Key) -> Result<Self::Key>;

    /// Merge the sets containing `first` and `second`.
    ///
    /// On equal ranks the root of `second`'s set becomes the new root.
    /// Fails with `NotFound`, without mutating anything, if either key is
    /// unregistered.
    fn union_sets(&mut self, first: &Self::Key, second: &Self::Key) -> Result<()>;

    /// Whether `first` and `second` share a representative.
    fn same_set(&mut self, first: &Self::Key, second: &Self::Key) -> Result<bool>
    where
        Self::Key: PartialEq,
    {
        let a = self.find_set(first)?;
        let b = self.find_set(second)?;
        Ok(a == b)
    }
}
