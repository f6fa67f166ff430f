// crates/merge-forest/tests/merge_strategies.rs
// ============================================================================
// Module: Merge Strategy Tests
// Description: Winner selection and counter semantics of built-in strategies.
// ============================================================================
//! ## Overview
//! Verifies each built-in [`Merge`] implementation in isolation: which side
//! survives, how sizes accumulate, and when ranks increment.

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
    reason = "Test-only output and panic-based assertions are permitted."
)]

use merge_forest::ByRank;
use merge_forest::ByRankThenSize;
use merge_forest::BySize;
use merge_forest::BySizeThenRank;
use merge_forest::Merge;
use merge_forest::Merged;

#[test]
fn unit_payload_keeps_the_left_root() {
    assert_eq!(Merge::merge((), ()), Merged::Left(()));
}

#[test]
fn by_size_larger_side_wins_and_sizes_sum() {
    assert_eq!(
        Merge::merge(BySize::new(3), BySize::new(1)),
        Merged::Left(BySize::new(4))
    );
    assert_eq!(
        Merge::merge(BySize::new(1), BySize::new(3)),
        Merged::Right(BySize::new(4))
    );
}

#[test]
fn by_size_ties_go_left() {
    assert_eq!(
        Merge::merge(BySize::new(2), BySize::new(2)),
        Merged::Left(BySize::new(4))
    );
}

#[test]
fn by_rank_higher_rank_wins_unchanged() {
    assert_eq!(
        Merge::merge(ByRank::new(2), ByRank::new(1)),
        Merged::Left(ByRank::new(2))
    );
    assert_eq!(
        Merge::merge(ByRank::new(1), ByRank::new(2)),
        Merged::Right(ByRank::new(2))
    );
}

#[test]
fn by_rank_tie_goes_left_with_incremented_rank() {
    assert_eq!(
        Merge::merge(ByRank::new(1), ByRank::new(1)),
        Merged::Left(ByRank::new(2))
    );
}

#[test]
fn by_rank_saturates_at_the_maximum() {
    assert_eq!(
        Merge::merge(ByRank::new(u8::MAX), ByRank::new(u8::MAX)),
        Merged::Left(ByRank::new(u8::MAX))
    );
}

#[test]
fn by_size_then_rank_compares_size_first() {
    assert_eq!(
        Merge::merge(BySizeThenRank::new(5, 0), BySizeThenRank::new(2, 7)),
        Merged::Left(BySizeThenRank::new(7, 7))
    );
}

#[test]
fn by_size_then_rank_breaks_size_ties_by_rank() {
    assert_eq!(
        Merge::merge(BySizeThenRank::new(2, 1), BySizeThenRank::new(2, 3)),
        Merged::Right(BySizeThenRank::new(4, 3))
    );
}

#[test]
fn by_size_then_rank_increments_rank_only_on_a_rank_tie() {
    assert_eq!(
        Merge::merge(BySizeThenRank::new(2, 1), BySizeThenRank::new(3, 1)),
        Merged::Right(BySizeThenRank::new(5, 2))
    );
    assert_eq!(
        Merge::merge(BySizeThenRank::new(2, 1), BySizeThenRank::new(3, 2)),
        Merged::Right(BySizeThenRank::new(5, 2))
    );
}

#[test]
fn by_rank_then_size_compares_rank_first() {
    assert_eq!(
        Merge::merge(ByRankThenSize::new(3, 1), ByRankThenSize::new(1, 9)),
        Merged::Left(ByRankThenSize::new(3, 10))
    );
}

#[test]
fn by_rank_then_size_breaks_rank_ties_by_size() {
    assert_eq!(
        Merge::merge(ByRankThenSize::new(1, 2), ByRankThenSize::new(1, 5)),
        Merged::Right(ByRankThenSize::new(2, 7))
    );
}

#[test]
fn merged_into_inner_discards_the_side() {
    assert_eq!(Merged::Left(BySize::new(2)).into_inner(), BySize::new(2));
    assert_eq!(Merged::Right(BySize::new(3)).into_inner(), BySize::new(3));
}
