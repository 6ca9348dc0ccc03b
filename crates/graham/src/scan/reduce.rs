//! Collinearity reduction on a polar-sorted sequence.

use super::polar::PolarPoint;

/// Keep only the farthest point of every equal-angle run.
///
/// Input: pivot at index 0, then points sorted by `(theta, r)`. Index 0 and the
/// last index are always kept; any other point is dropped when its successor
/// has exactly the same angle. Order is preserved.
pub fn reduce_collinear(sorted: &[PolarPoint]) -> Vec<PolarPoint> {
    let n = sorted.len();
    if n <= 1 {
        return sorted.to_vec();
    }
    let mut out = Vec::with_capacity(n);
    out.push(sorted[0]);
    for i in 1..n - 1 {
        if sorted[i].theta == sorted[i + 1].theta {
            continue;
        }
        out.push(sorted[i]);
    }
    out.push(sorted[n - 1]);
    out
}
