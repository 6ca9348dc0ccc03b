use std::cmp::Ordering;

use nalgebra::Vector2;

use super::error::HullError;
use super::orientation::orientation;
use super::pivot::select_pivot;
use super::polar::{sort_polar, PolarPoint};
use super::reduce::reduce_collinear;
use super::sweep::sweep;
use super::types::{Degenerate, Hull, HullCfg};

/// Graham scan with the default configuration (unstable sort, reject degenerate input).
pub fn convex_hull(points: &[Vector2<f64>]) -> Result<Hull, HullError> {
    graham_scan(points, &HullCfg::default())
}

/// Convex hull of `points` in counter-clockwise order, starting at the pivot.
///
/// Pre: coordinates are finite.
/// Post: `Hull` invariants hold; with `Degenerate::Reject` it has at least three vertices.
///
/// Under `Degenerate::Reject`, fewer than three distinct points is
/// `InsufficientPoints`, three or more on one line is `AllCollinear`.
///
/// Points coincident with the pivot are dropped before the polar conversion,
/// since their angle is undefined.
pub fn graham_scan(points: &[Vector2<f64>], cfg: &HullCfg) -> Result<Hull, HullError> {
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFinite { index });
    }
    if points.is_empty() {
        return Err(HullError::InsufficientPoints { found: 0 });
    }

    let mut work = points.to_vec();
    select_pivot(&mut work).ok_or(HullError::InsufficientPoints { found: 0 })?;
    let pivot = work[0];
    tracing::trace!(n = work.len(), x = pivot.x, y = pivot.y, "pivot selected");

    let mut seq = Vec::with_capacity(work.len());
    seq.push(PolarPoint::from_cartesian(pivot, pivot));
    seq.extend(
        work[1..]
            .iter()
            .filter(|&&p| p != pivot)
            .map(|&p| PolarPoint::from_cartesian(p, pivot)),
    );
    sort_polar(&mut seq[1..], cfg.sort);

    let distinct = distinct_count(&seq);
    if distinct < 3 && cfg.degenerate == Degenerate::Reject {
        return Err(HullError::InsufficientPoints { found: distinct });
    }

    let reduced = reduce_collinear(&seq);
    tracing::trace!(sorted = seq.len(), reduced = reduced.len(), "collinear runs reduced");

    if is_collinear(&reduced) {
        return match cfg.degenerate {
            Degenerate::Reject => Err(HullError::AllCollinear {
                count: points.len(),
            }),
            Degenerate::Allow => {
                let hull = degenerate_hull(&reduced);
                tracing::debug!(vertices = hull.len(), "degenerate hull");
                Ok(hull)
            }
        };
    }

    let pts: Vec<Vector2<f64>> = reduced.iter().map(|p| p.point).collect();
    let stack = sweep(&pts);
    tracing::debug!(input = points.len(), vertices = stack.len(), "hull built");
    Ok(Hull::from_vertices(stack.into_vec()))
}

/// Distinct points in a pivot-first, polar-sorted sequence without pivot duplicates.
///
/// Equal `(theta, r)` about the same pivot means the same point, and the sort
/// makes such copies adjacent.
fn distinct_count(seq: &[PolarPoint]) -> usize {
    match seq.len() {
        0 | 1 => seq.len(),
        n => {
            let repeats = seq[1..]
                .windows(2)
                .filter(|w| w[0].polar_cmp(&w[1]) == Ordering::Equal)
                .count();
            n - repeats
        }
    }
}

/// All points on the line through the pivot and the last reduced point.
fn is_collinear(reduced: &[PolarPoint]) -> bool {
    if reduced.len() < 3 {
        return true;
    }
    let a = reduced[0].point;
    let b = reduced[reduced.len() - 1].point;
    reduced[1..reduced.len() - 1]
        .iter()
        .all(|p| orientation(a, b, p.point) == 0.0)
}

fn degenerate_hull(reduced: &[PolarPoint]) -> Hull {
    let pivot = reduced[0].point;
    let far = reduced[1..].iter().max_by(|a, b| a.r.total_cmp(&b.r));
    match far {
        Some(f) => Hull::from_vertices(vec![pivot, f.point]),
        None => Hull::from_vertices(vec![pivot]),
    }
}
