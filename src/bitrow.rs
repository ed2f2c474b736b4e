//! Pure set-algebra over fixed-width adjacency rows.
//!
//! Every row in the adjacency matrix is a [`FixedBitSet`] of the same length
//! (the graph's `nodes_len`). The functions here are the "hot path" of every
//! heuristic: they never allocate beyond what the caller passes in, never
//! look at vertex metadata, and never fail.

use fixedbitset::FixedBitSet;

/// `dst = a | b`.
pub fn or(dst: &mut FixedBitSet, a: &FixedBitSet, b: &FixedBitSet) {
    dst.clone_from(a);
    dst.union_with(b);
}

/// `dst = a & b`.
pub fn and(dst: &mut FixedBitSet, a: &FixedBitSet, b: &FixedBitSet) {
    dst.clone_from(a);
    dst.intersect_with(b);
}

/// `dst = a & !b`.
pub fn diff(dst: &mut FixedBitSet, a: &FixedBitSet, b: &FixedBitSet) {
    dst.clone_from(a);
    dst.difference_with(b);
}

/// In one sweep: `common = a & b`, `a_only = a & !b`, `b_only = !a & b`.
pub fn common_and_both_diffs(
    common: &mut FixedBitSet,
    a_only: &mut FixedBitSet,
    b_only: &mut FixedBitSet,
    a: &FixedBitSet,
    b: &FixedBitSet,
) {
    and(common, a, b);
    diff(a_only, a, b);
    diff(b_only, b, a);
}

/// Exact popcount of a row.
pub fn popcount(a: &FixedBitSet) -> usize {
    a.count_ones(..)
}

/// Smallest set bit at index `>= start`, or `None`.
pub fn next_set_bit(a: &FixedBitSet, start: usize) -> Option<usize> {
    a.ones().find(|&i| i >= start)
}
