// crates/merge-forest/src/interfaces/mod.rs
// ============================================================================
// Module: Merge Forest Interfaces
// Description: The implementation-agnostic disjoint-set contract.
// Purpose: Define the operation surface shared by every forest backend.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! [`DisjointSet`] is the seam between callers and forest implementations.
//! Implementations differ in cost profile, not in semantics: the invariants
//! documented on each operation hold for every backend in this crate.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ForestError;
use crate::core::Merge;

// ============================================================================
// SECTION: Disjoint Set Contract
// ============================================================================

/// A partition of dense `usize` keys into disjoint sets with mergeable
/// payloads.
///
/// # Invariants
/// - Keys are dense and 0-based: `insert` returns `len()` as it was before
///   the call, and keys stay valid for the life of the forest.
/// - `find` is idempotent, and `same_set` is an equivalence relation over
///   valid keys.
/// - `set_count()` equals `len()` minus the number of unions that returned
///   `Ok(true)`.
pub trait DisjointSet<V: Merge> {
    /// Returns the number of elements ever inserted.
    #[must_use]
    fn len(&self) -> usize;

    /// Returns `true` if no element has been inserted.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of disjoint sets currently in the forest.
    #[must_use]
    fn set_count(&self) -> usize;

    /// Inserts a new element as a singleton set and returns its key.
    fn insert(&mut self, payload: V) -> usize;

    /// Merges the sets holding `left` and `right`.
    ///
    /// Returns `Ok(false)` if both keys already share a set; the payloads are
    /// untouched in that case. Returns `Ok(true)` after a merge, in which
    /// case `set_count` has decreased by one and the surviving root holds the
    /// payload produced by [`Merge::merge`].
    ///
    /// # Errors
    ///
    /// Returns [`ForestError::KeyOutOfBounds`] if either key was never
    /// inserted; the forest is unchanged.
    fn union(&mut self, left: usize, right: usize) -> Result<bool, ForestError>;

    /// Returns the canonical root key of the set holding `key`.
    ///
    /// Roots are stable between unions: two keys share a set exactly when
    /// their roots are equal. Implementations may compress paths through
    /// interior mutability, so the root returned for a key can change after
    /// an unrelated `find`, but set membership never does.
    ///
    /// # Errors
    ///
    /// Returns [`ForestError::KeyOutOfBounds`] if `key` was never inserted.
    fn find(&self, key: usize) -> Result<usize, ForestError>;

    /// Returns `true` if both keys belong to the same set.
    ///
    /// # Errors
    ///
    /// Returns [`ForestError::KeyOutOfBounds`] if either key was never
    /// inserted.
    fn same_set(&self, left: usize, right: usize) -> Result<bool, ForestError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Returns the payload of the set holding `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ForestError::KeyOutOfBounds`] if `key` was never inserted.
    fn get(&self, key: usize) -> Result<&V, ForestError>;

    /// Returns the payload of the set holding `key`, mutably.
    ///
    /// # Errors
    ///
    /// Returns [`ForestError::KeyOutOfBounds`] if `key` was never inserted.
    fn get_mut(&mut self, key: usize) -> Result<&mut V, ForestError>;
}
