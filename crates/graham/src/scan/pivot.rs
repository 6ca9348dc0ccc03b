//! Pivot selection: the lexicographically smallest point goes first.
//!
//! The pivot lies on the hull and sees every other point inside the half-plane
//! `dx > 0 || (dx == 0 && dy > 0)`, so polar angles about it never wrap.

use nalgebra::Vector2;

/// Index of the point with minimum x, ties broken by minimum y.
///
/// The first occurrence wins among exact duplicates. `None` for an empty slice.
pub fn pivot_index(points: &[Vector2<f64>]) -> Option<usize> {
    if points.is_empty() {
        return None;
    }
    let mut best = 0usize;
    for (i, p) in points.iter().enumerate().skip(1) {
        let b = points[best];
        if p.x < b.x || (p.x == b.x && p.y < b.y) {
            best = i;
        }
    }
    Some(best)
}

/// Swap the pivot into index 0 and return its original index.
///
/// Only the pivot's placement is guaranteed; the rest keep their slots except
/// for the one swapped with index 0.
pub fn select_pivot(points: &mut [Vector2<f64>]) -> Option<usize> {
    let idx = pivot_index(points)?;
    points.swap(0, idx);
    Some(idx)
}
