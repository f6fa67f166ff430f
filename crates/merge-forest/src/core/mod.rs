// crates/merge-forest/src/core/mod.rs
// ============================================================================
// Module: Merge Forest Core Types
// Description: Merge strategies and the forest error taxonomy.
// Purpose: Group the value types shared by every forest implementation.
// Dependencies: crate::core::error, crate::core::merge
// ============================================================================

//! ## Overview
//! Core value types: the [`Merge`] strategy seam with its built-in
//! implementations, and the [`ForestError`] taxonomy returned by every
//! fallible forest operation.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod error;
pub mod merge;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::ForestError;
pub use merge::ByRank;
pub use merge::ByRankThenSize;
pub use merge::BySize;
pub use merge::BySizeThenRank;
pub use merge::Merge;
pub use merge::Merged;
