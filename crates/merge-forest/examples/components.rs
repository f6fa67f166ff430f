// crates/merge-forest/examples/components.rs
// ============================================================================
// Module: Connected Components Example
// Description: Compute connected components of a small undirected graph.
// Purpose: Demonstrate the DisjointSet API end to end.
// Dependencies: merge-forest
// ============================================================================

//! ## Overview
//! Unions the endpoints of an edge list and reads component count and sizes
//! back out of the forest. The example verifies its own expectations and
//! exits nonzero on mismatch.

use merge_forest::BySize;
use merge_forest::DisjointSet;
use merge_forest::QuickUnionForest;

/// Error type for example preconditions.
#[derive(Debug)]
struct ExampleError(&'static str);

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExampleError {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ten vertices, three components: {0..=3}, {4..=8}, {9}.
    let edges = [(0, 1), (1, 2), (2, 3), (4, 5), (5, 6), (6, 7), (7, 8), (4, 8)];

    let mut components: QuickUnionForest<BySize> =
        (0..10).map(|_| BySize::default()).collect();
    for (a, b) in edges {
        let _ = components.union(a, b)?;
    }

    if components.set_count() != 3 {
        return Err(Box::new(ExampleError("expected three components")));
    }
    if components.get(0)?.size() != 4 {
        return Err(Box::new(ExampleError("first component should span four vertices")));
    }
    if components.get(9)?.size() != 1 {
        return Err(Box::new(ExampleError("vertex 9 should be isolated")));
    }
    if components.same_set(3, 4)? {
        return Err(Box::new(ExampleError("components must stay disjoint")));
    }

    Ok(())
}
