// crates/merge-forest/src/core/merge.rs
// ============================================================================
// Module: Payload Merge Strategies
// Description: The Merge trait and the built-in union strategies.
// Purpose: Decide which root survives a union and combine set payloads.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! When two sets are unioned, their payloads are combined by a [`Merge`]
//! strategy. The strategy returns the merged payload wrapped in a [`Merged`]
//! outcome that names the surviving root, so attachment heuristics (union by
//! size, union by rank) live in the payload type rather than in the forest.
//!
//! The built-in strategies track the counters the classic heuristics need.
//! Custom payloads implement [`Merge`] directly:
//!
//! ```
//! use merge_forest::Merge;
//! use merge_forest::Merged;
//!
//! /// Component label that keeps the smallest member name seen so far.
//! struct MinLabel(u32);
//!
//! impl Merge for MinLabel {
//!     fn merge(left: Self, right: Self) -> Merged<Self> {
//!         if left.0 <= right.0 {
//!             Merged::Left(MinLabel(left.0))
//!         } else {
//!             Merged::Right(MinLabel(right.0))
//!         }
//!     }
//! }
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Merge Seam
// ============================================================================

/// Outcome of merging two set payloads.
///
/// # Invariants
/// - The wrapped value is the payload of the merged set; the variant names
///   which input root survives as the merged set's root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Merged<V> {
    /// The left root survives and holds the merged payload.
    Left(V),
    /// The right root survives and holds the merged payload.
    Right(V),
}

impl<V> Merged<V> {
    /// Returns the merged payload, discarding which side survived.
    #[must_use]
    pub fn into_inner(self) -> V {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

/// Combines the payloads of two sets during a union.
pub trait Merge: Sized {
    /// Merges the payloads of two distinct roots.
    ///
    /// `left` belongs to the root of the first union operand, `right` to the
    /// second. The returned variant decides which root the forest keeps.
    #[must_use]
    fn merge(left: Self, right: Self) -> Merged<Self>;
}

impl Merge for () {
    fn merge(_left: Self, _right: Self) -> Merged<Self> {
        Merged::Left(())
    }
}

// ============================================================================
// SECTION: Union by Size
// ============================================================================

/// Union-by-size payload: the larger set's root survives.
///
/// # Invariants
/// - `size` equals the number of elements in the set, provided every element
///   was inserted with the default singleton payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BySize(usize);

impl BySize {
    /// Creates a payload with an explicit element weight.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self(size)
    }

    /// Returns the tracked set size.
    #[must_use]
    pub const fn size(self) -> usize {
        self.0
    }
}

impl Default for BySize {
    /// A singleton set has size 1.
    fn default() -> Self {
        Self(1)
    }
}

impl Merge for BySize {
    fn merge(left: Self, right: Self) -> Merged<Self> {
        let merged = Self(left.0 + right.0);
        if left.0 >= right.0 {
            Merged::Left(merged)
        } else {
            Merged::Right(merged)
        }
    }
}

// ============================================================================
// SECTION: Union by Rank
// ============================================================================

/// Union-by-rank payload: the deeper tree's root survives.
///
/// # Invariants
/// - `rank` never decreases along a merge chain; it increments only when two
///   equal-rank roots merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ByRank(u8);

impl ByRank {
    /// Creates a payload with an explicit rank.
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self(rank)
    }

    /// Returns the tracked rank.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0
    }
}

impl Merge for ByRank {
    fn merge(left: Self, right: Self) -> Merged<Self> {
        match left.0.cmp(&right.0) {
            Ordering::Greater => Merged::Left(left),
            Ordering::Less => Merged::Right(right),
            Ordering::Equal => Merged::Left(Self(left.0.saturating_add(1))),
        }
    }
}

// ============================================================================
// SECTION: Combined Strategies
// ============================================================================

/// Union by size, tie-broken by rank.
///
/// # Invariants
/// - `size` sums across merges; `rank` increments only on a full rank tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BySizeThenRank {
    /// Number of elements in the set.
    size: usize,
    /// Upper bound on the set's tree depth.
    rank: u8,
}

impl BySizeThenRank {
    /// Creates a payload with explicit counters.
    #[must_use]
    pub const fn new(size: usize, rank: u8) -> Self {
        Self { size, rank }
    }

    /// Returns the tracked set size.
    #[must_use]
    pub const fn size(self) -> usize {
        self.size
    }

    /// Returns the tracked rank.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }
}

impl Default for BySizeThenRank {
    /// A singleton set has size 1 and rank 0.
    fn default() -> Self {
        Self { size: 1, rank: 0 }
    }
}

impl Merge for BySizeThenRank {
    fn merge(left: Self, right: Self) -> Merged<Self> {
        let merged = Self {
            size: left.size + right.size,
            rank: merged_rank(left.rank, right.rank),
        };
        if (left.size, left.rank) >= (right.size, right.rank) {
            Merged::Left(merged)
        } else {
            Merged::Right(merged)
        }
    }
}

/// Union by rank, tie-broken by size.
///
/// # Invariants
/// - `size` sums across merges; `rank` increments only on a full rank tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByRankThenSize {
    /// Upper bound on the set's tree depth.
    rank: u8,
    /// Number of elements in the set.
    size: usize,
}

impl ByRankThenSize {
    /// Creates a payload with explicit counters.
    #[must_use]
    pub const fn new(rank: u8, size: usize) -> Self {
        Self { rank, size }
    }

    /// Returns the tracked rank.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Returns the tracked set size.
    #[must_use]
    pub const fn size(self) -> usize {
        self.size
    }
}

impl Default for ByRankThenSize {
    /// A singleton set has rank 0 and size 1.
    fn default() -> Self {
        Self { rank: 0, size: 1 }
    }
}

impl Merge for ByRankThenSize {
    fn merge(left: Self, right: Self) -> Merged<Self> {
        let merged = Self {
            rank: merged_rank(left.rank, right.rank),
            size: left.size + right.size,
        };
        if (left.rank, left.size) >= (right.rank, right.size) {
            Merged::Left(merged)
        } else {
            Merged::Right(merged)
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Rank of a merged set: the larger rank, incremented on a tie.
const fn merged_rank(left: u8, right: u8) -> u8 {
    if left == right {
        left.saturating_add(1)
    } else if left > right {
        left
    } else {
        right
    }
}
