// crates/merge-forest/src/core/error.rs
// ============================================================================
// Module: Forest Error Taxonomy
// Description: Errors returned by fallible disjoint-set operations.
// Purpose: Replace panics on bad keys with structured, matchable errors.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every fallible forest operation returns [`ForestError`]. Callers that only
//! use keys returned by `insert` will never observe an error, but the forest
//! does not assume that and stays total on arbitrary `usize` input.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Error Type
// ============================================================================

/// Errors returned by disjoint-set operations.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ForestError {
    /// The key was never returned by `insert` on this forest.
    #[error("element key {key} is out of bounds for a forest of {len} elements")]
    KeyOutOfBounds {
        /// The offending key.
        key: usize,
        /// Number of elements in the forest at the time of the call.
        len: usize,
    },

    /// A root's payload slot was empty.
    ///
    /// Returned only if the forest's root-payload invariant is broken; no
    /// sequence of public API calls produces it.
    #[error("root {root} has no payload")]
    VacantRoot {
        /// The root whose payload slot was empty.
        root: usize,
    },
}
