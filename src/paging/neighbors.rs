//! Circular adjacency over catalog indices.
//!
//! The catalog wraps for lookahead purposes: the page before the first is the last one and
//! the page after the last is the first. Animated transitions themselves never wrap.

/// Index of the page preceding `index` in a circular catalog of `count` pages.
pub fn neighbor_before(index: usize, count: usize) -> usize {
    debug_assert!(count > 0, "catalog is never empty");
    (index % count + count - 1) % count
}

/// Index of the page following `index` in a circular catalog of `count` pages.
pub fn neighbor_after(index: usize, count: usize) -> usize {
    debug_assert!(count > 0, "catalog is never empty");
    (index % count + 1) % count
}
