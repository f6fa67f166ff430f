// crates/merge-forest/src/forest/mod.rs
// ============================================================================
// Module: Forest Implementations
// Description: The disjoint-set backends shipped with this crate.
// Purpose: Group the quick-union and quick-find implementations.
// Dependencies: crate::forest::quick_find, crate::forest::quick_union
// ============================================================================

//! ## Overview
//! Two [`DisjointSet`](crate::interfaces::DisjointSet) backends:
//! [`QuickUnionForest`] for near-constant amortized unions and
//! [`QuickFindForest`] for constant-time finds.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod quick_find;
pub mod quick_union;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use quick_find::QuickFindForest;
pub use quick_union::QuickUnionForest;
