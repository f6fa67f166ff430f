// crates/merge-forest/tests/proptest_forest.rs
// ============================================================================
// Module: Forest Property-Based Tests
// Description: Model-based checks of partition semantics across backends.
// Purpose: Detect divergence from a naive labeling model over random unions.
// ============================================================================

//! ## Overview
//! Drives both forest implementations and a naive labeling model through the
//! same random union sequences, then checks that membership, set counts, set
//! sizes, and union outcomes agree everywhere.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::collections::BTreeSet;

use merge_forest::BySize;
use merge_forest::DisjointSet;
use merge_forest::QuickFindForest;
use merge_forest::QuickUnionForest;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

/// Naive partition model: every element stores its set label directly, and
/// unions relabel with a full scan.
struct LabelModel {
    /// Set label per element.
    labels: Vec<usize>,
}

impl LabelModel {
    fn new(count: usize) -> Self {
        Self {
            labels: (0..count).collect(),
        }
    }

    fn union(&mut self, left: usize, right: usize) -> bool {
        let winner = self.labels[left];
        let loser = self.labels[right];
        if winner == loser {
            return false;
        }
        for label in &mut self.labels {
            if *label == loser {
                *label = winner;
            }
        }
        true
    }

    fn same(&self, left: usize, right: usize) -> bool {
        self.labels[left] == self.labels[right]
    }

    fn set_count(&self) -> usize {
        self.labels.iter().collect::<BTreeSet<_>>().len()
    }

    fn set_size(&self, key: usize) -> usize {
        let label = self.labels[key];
        self.labels.iter().filter(|&&other| other == label).count()
    }
}

/// Element count plus a union sequence over keys below that count.
fn forest_ops() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1_usize..32).prop_flat_map(|count| {
        let pairs = prop::collection::vec((0..count, 0..count), 0..64);
        (Just(count), pairs)
    })
}

/// Applies `ops` to a fresh forest, asserting each union outcome against the
/// model as it goes, and returns the populated forest.
fn apply_ops<F>(
    count: usize,
    ops: &[(usize, usize)],
    model: &mut LabelModel,
) -> Result<F, TestCaseError>
where
    F: DisjointSet<BySize> + FromIterator<BySize>,
{
    let mut forest: F = (0..count).map(|_| BySize::default()).collect();
    for &(left, right) in ops {
        let merged = forest.union(left, right).expect("keys are in range");
        prop_assert_eq!(merged, model.union(left, right));
    }
    Ok(forest)
}

/// Asserts that `forest` and `model` describe the same partition.
fn assert_agrees_with_model<F>(
    count: usize,
    forest: &F,
    model: &LabelModel,
) -> Result<(), TestCaseError>
where
    F: DisjointSet<BySize>,
{
    prop_assert_eq!(forest.len(), count);
    prop_assert_eq!(forest.set_count(), model.set_count());
    for left in 0..count {
        prop_assert_eq!(
            forest.get(left).expect("key is in range").size(),
            model.set_size(left)
        );
        for right in 0..count {
            prop_assert_eq!(
                forest.same_set(left, right).expect("keys are in range"),
                model.same(left, right)
            );
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn quick_union_matches_the_labeling_model((count, ops) in forest_ops()) {
        let mut model = LabelModel::new(count);
        let forest: QuickUnionForest<BySize> = apply_ops(count, &ops, &mut model)?;
        assert_agrees_with_model(count, &forest, &model)?;
    }

    #[test]
    fn quick_find_matches_the_labeling_model((count, ops) in forest_ops()) {
        let mut model = LabelModel::new(count);
        let forest: QuickFindForest<BySize> = apply_ops(count, &ops, &mut model)?;
        assert_agrees_with_model(count, &forest, &model)?;
    }

    #[test]
    fn backends_agree_with_each_other((count, ops) in forest_ops()) {
        let mut model_a = LabelModel::new(count);
        let mut model_b = LabelModel::new(count);
        let quick_union: QuickUnionForest<BySize> = apply_ops(count, &ops, &mut model_a)?;
        let quick_find: QuickFindForest<BySize> = apply_ops(count, &ops, &mut model_b)?;
        for key in 0..count {
            prop_assert_eq!(
                quick_union.get(key).expect("key is in range").size(),
                quick_find.get(key).expect("key is in range").size()
            );
        }
        prop_assert_eq!(quick_union.set_count(), quick_find.set_count());
    }

    #[test]
    fn find_is_idempotent_and_roots_are_fixed_points((count, ops) in forest_ops()) {
        let mut model = LabelModel::new(count);
        let forest: QuickUnionForest<BySize> = apply_ops(count, &ops, &mut model)?;
        for key in 0..count {
            let root = forest.find(key).expect("key is in range");
            prop_assert_eq!(forest.find(root).expect("root is in range"), root);
            prop_assert!(forest.get(root).expect("root is in range").size() >= 1);
        }
    }
}
