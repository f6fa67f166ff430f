// crates/merge-forest/src/forest/quick_find.rs
// ============================================================================
// Module: Quick-Find Forest
// Description: Disjoint-set forest with constant-time finds.
// Purpose: Trade union cost for O(1) membership queries.
// Dependencies: crate::core, crate::interfaces, serde
// ============================================================================

//! ## Overview
//! [`QuickFindForest`] stores each key's root directly, so `find` is a
//! bounds check plus an array read and never mutates anything. `union`
//! relabels every member of the losing set, using per-root member lists so
//! the cost is proportional to the losing set's size rather than the whole
//! forest.
//!
//! Invariants:
//! - `root_of[k]` is a root for every key `k`; roots satisfy
//!   `root_of[r] == r`.
//! - `members[r]` lists exactly the keys whose root is `r`; non-root entries
//!   are empty.
//! - Exactly the root of each set holds `Some` payload.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::ForestError;
use crate::core::Merge;
use crate::core::Merged;
use crate::interfaces::DisjointSet;

// ============================================================================
// SECTION: Forest Type
// ============================================================================

/// Disjoint-set forest with direct root labels per key.
///
/// # Invariants
/// - All four columns index by key and stay the same length.
/// - `sets` equals the number of distinct roots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickFindForest<V> {
    /// Root label per key.
    root_of: Vec<usize>,
    /// Member keys per root; empty for non-roots.
    members: Vec<Vec<usize>>,
    /// Payload slot per key; occupied exactly for roots.
    payloads: Vec<Option<V>>,
    /// Number of disjoint sets currently in the forest.
    sets: usize,
}

impl<V> QuickFindForest<V> {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root_of: Vec::new(),
            members: Vec::new(),
            payloads: Vec::new(),
            sets: 0,
        }
    }

    /// Creates an empty forest with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root_of: Vec::with_capacity(capacity),
            members: Vec::with_capacity(capacity),
            payloads: Vec::with_capacity(capacity),
            sets: 0,
        }
    }

    /// Rejects keys that were never returned by `insert`.
    fn check_key(&self, key: usize) -> Result<(), ForestError> {
        if key < self.root_of.len() {
            Ok(())
        } else {
            Err(ForestError::KeyOutOfBounds {
                key,
                len: self.root_of.len(),
            })
        }
    }

    /// Relabels every member of `loser` to `winner` and splices the member
    /// list into the winner's.
    fn absorb(&mut self, winner: usize, loser: usize) {
        let moved = std::mem::take(&mut self.members[loser]);
        for &member in &moved {
            self.root_of[member] = winner;
        }
        self.members[winner].extend(moved);
    }
}

impl<V> Default for QuickFindForest<V> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SECTION: DisjointSet Implementation
// ============================================================================

impl<V: Merge> DisjointSet<V> for QuickFindForest<V> {
    fn len(&self) -> usize {
        self.root_of.len()
    }

    fn set_count(&self) -> usize {
        self.sets
    }

    fn insert(&mut self, payload: V) -> usize {
        let key = self.root_of.len();
        self.root_of.push(key);
        self.members.push(vec![key]);
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
        self.absorb(winner, loser);
        self.sets -= 1;

        Ok(true)
    }

    fn find(&self, key: usize) -> Result<usize, ForestError> {
        self.check_key(key)?;
        Ok(self.root_of[key])
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

impl<V> FromIterator<V> for QuickFindForest<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iterator: I) -> Self {
        let mut forest = Self::new();
        forest.extend(iterator);
        forest
    }
}

impl<V> Extend<V> for QuickFindForest<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iterable: I) {
        for payload in iterable {
            let key = self.root_of.len();
            self.root_of.push(key);
            self.members.push(vec![key]);
            self.payloads.push(Some(payload));
            self.sets += 1;
        }
    }
}
