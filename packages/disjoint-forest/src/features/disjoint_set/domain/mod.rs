//! Domain types for the disjoint-set forest

mod stats;

pub use stats::ForestStats;

/// Upper bound on the height of a root's subtree.
///
/// Only grows when two equal-rank roots merge, so it never exceeds
/// `log2(elements)`; a byte is enough for any `u32`-indexed forest.
pub type Rank = u8;
