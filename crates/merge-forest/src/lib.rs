// crates/merge-forest/src/lib.rs
// ============================================================================
// Module: Merge Forest
// Description: Disjoint-set forests over dense keys with mergeable payloads.
// Purpose: Provide union-find implementations and the merge strategy surface.
// Dependencies: dashmap, serde, thiserror
// ============================================================================

//! ## Overview
//! This crate provides disjoint-set ("union-find") forests over dense `usize`
//! keys. Each set carries exactly one payload value; unioning two sets merges
//! their payloads through a [`Merge`] strategy that also decides which root
//! survives. Two implementations cover the classic cost trade-off:
//!
//! - [`QuickUnionForest`]: near-constant amortized `union`/`find` with path
//!   splitting. Parent links live in a concurrent map, so `find` compresses
//!   paths through `&self` and concurrent readers are safe.
//! - [`QuickFindForest`]: constant-time `find`; `union` relabels the losing
//!   set, so its cost is proportional to that set's size.
//!
//! Invariants:
//! - Keys are dense, 0-based, and stable for the life of the forest.
//! - Every fallible operation returns [`ForestError`] instead of panicking.
//!
//! ### Quick start
//!
//! ```
//! use merge_forest::BySize;
//! use merge_forest::DisjointSet;
//! use merge_forest::QuickUnionForest;
//!
//! # fn main() -> Result<(), merge_forest::ForestError> {
//! let mut forest = QuickUnionForest::new();
//! let a = forest.insert(BySize::default());
//! let b = forest.insert(BySize::default());
//! let c = forest.insert(BySize::default());
//!
//! assert!(forest.union(a, b)?);
//! assert!(forest.same_set(a, b)?);
//! assert!(!forest.same_set(a, c)?);
//! assert_eq!(forest.get(a)?.size(), 2);
//! assert_eq!(forest.set_count(), 2);
//! # Ok(())
//! # }
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod forest;
pub mod interfaces;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::ByRank;
pub use crate::core::ByRankThenSize;
pub use crate::core::BySize;
pub use crate::core::BySizeThenRank;
pub use crate::core::ForestError;
pub use crate::core::Merge;
pub use crate::core::Merged;
pub use crate::forest::QuickFindForest;
pub use crate::forest::QuickUnionForest;
pub use crate::interfaces::DisjointSet;
