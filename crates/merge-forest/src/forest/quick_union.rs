// crates/merge-forest/src/forest/quick_union.rs
// ============================================================================
// Module: Quick-Union Forest
// Description: Disjoint-set forest with path-splitting finds.
// Purpose: Provide near-constant amortized union/find over dense keys.
// Dependencies: crate::core, crate::interfaces, dashmap, serde
// ============================================================================

//! ## Overview
//! [`QuickUnionForest`] keeps parent links in a concurrent map and payload
//! slots in a vector. `find` walks the parent chain with path splitting: each
//! visited node is re-linked to its grandparent before the walk steps up, so
//! chains flatten as they are read. Because the parent map has interior
//! mutability, compression happens through `&self`, and any number of
//! threads may call `find` on a shared forest at once. Mutating operations
//! take `&mut self`, so writers are exclusive by the borrow rules.
//!
//! Invariants:
//! - Every key below `len()` resolves to a root; a key absent from the
//!   parent map is its own parent.
//! - Exactly the root of each set holds `Some` payload; non-root slots are
//!   vacant.

// ============================================================================
// SECTION: Imports
// ============================================================================

use dashmap::DashMap;
use serde::Deserialize;
use serde::Serialize;

use crate::core::ForestError;
use crate::core::Merge;
use crate::core::Merged;
use crate::interfaces::DisjointSet;

// ============================================================================
// SECTION: Forest Type
// ============================================================================

/// Disjoint-set forest with quick union and path-splitting finds.
///
/// # Invariants
/// - `payloads.len()` is the number of inserted elements; keys index into it.
/// - `sets` equals the number of roots, and each root's slot is occupied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickUnionForest<V> {
    /// Parent link per key. Missing entries and self-links denote roots.
    parents: DashMap<usize, usize>,
    /// Payload slot per key; occupied exactly for roots.
    payloads: Vec<Option<V>>,
    /// Number of disjoint sets currently in the forest.
    sets: usize,
}

impl<V> QuickUnionForest<V> {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parents: DashMap::new(),
            payloads: Vec::new(),
            sets: 0,
        }
    }

    /// Creates an empty forest with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parents: DashMap::with_capacity(capacity),
            payloads: Vec::with_capacity(capacity),
            sets: 0,
        }
    }

    /// Returns the parent of `node`, treating missing entries as self-links.
    fn parent_of(&self, node: usize) -> usize {
        self.parents.get(&node).map_or(node, |entry| *entry.value())
    }

    /// Rejects keys that were never returned by `insert`.
    fn check_key(&self, key: usize) -> Result<(), ForestError> {
        if key < self.payloads.len() {
            Ok(())
        } else {
            Err(ForestError::KeyOutOfBounds {
                key,
                len: self.payloads.len(),
            })
        }
    }

    /// Root of `key`'s set, splitting the path as it walks.
    ///
    /// Each visited node is re-linked to its grandparent before the walk
    /// steps up. The caller must have bounds-checked `key`.
    fn root_of(&self, key: usize) -> usize {
        let mut node = key;
        let mut parent = self.parent_of(node);
        while parent != node {
            let grandparent = self.parent_of(parent);
            let _ = self.parents.insert(node, grandparent);
            node = parent;
            parent = grandparent;
        }
        node
    }
}

impl<V> Default for QuickUnionForest<V> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SECTION: DisjointSet Implementation
// ============================================================================

impl<V: Merge> DisjointSet<V> for QuickUnionForest<V> {
    fn len(&self) -> usize {
        self.payloads.len()
    }

    fn set_count(&self) -> usize {
        self.sets
    }

    fn insert(&mut self, payload: V) -> usize {
        let key = self.payloads.len();
        let _ = self.parents.insert(key, key);
        self.payloads.push(Some(payload));
        self.sets += 1;
        key
    }

    fn union(&mut self, left: usize, right: usize) -> Result<bool, ForestError> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let left_payload = self.payloads[left_root]
            .take()
            .ok_or(ForestError::VacantRoot { root: left_root })?;
        let right_payload = match self.payloads[right_root].take() {
            Some(payload) => payload,
            None => {
                self.payloads[left_root] = Some(left_payload);
                return Err(ForestError::VacantRoot { root: right_root });
            }
        };

        let (winner, loser, merged) = match Merge::merge(left_payload, right_payload) {
            Merged::Left(payload) => (left_root, right_root, payload),
            Merged::Right(payload) => (right_root, left_root, payload),
        };
        self.payloads[winner] = Some(merged);
        let _ = self.parents.insert(loser, winner);
        self.sets -= 1;

        Ok(true)
    }

    fn find(&self, key: usize) -> Result<usize, ForestError> {
        self.check_key(key)?;
        Ok(self.root_of(key))
    }

    fn get(&self, key: usize) -> Result<&V, ForestError> {
        let root = self.find(key)?;
        self.payloads[root]
            .as_ref()
            .ok_or(ForestError::VacantRoot { root })
    }

    fn get_mut(&mut self, key: usize) -> Result<&mut V, ForestError> {
        let root = self.find(key)?;
        self.payloads[root]
            .as_mut()
            .ok_or(ForestError::VacantRoot { root })
    }
}

// ============================================================================
// SECTION: Construction from Iterators
// ============================================================================

impl<V> FromIterator<V> for QuickUnionForest<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iterator: I) -> Self {
        let mut forest = Self::new();
        forest.extend(iterator);
        forest
    }
}

impl<V> Extend<V> for QuickUnionForest<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iterable: I) {
        let start = self.payloads.len();
        self.payloads.extend(iterable.into_iter().map(Some));
        let end = self.payloads.len();
        self.parents.extend((start..end).map(|key| (key, key)));
        self.sets += end - start;
    }
}
