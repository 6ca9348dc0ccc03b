//! Polar form about the pivot and the angular sort.
//!
//! Angles
//! - With a leftmost pivot every offset has `dx >= 0`, so `atan(dy/dx)` equals
//!   `atan2(dy, dx)` and lives in `(-π/2, π/2]`. The quotient is a single IEEE
//!   division: exactly proportional offsets get bit-identical angles, which is
//!   what exact-equality collinearity detection relies on.
//! - Offsets with `dx < 0` only occur for a non-leftmost reference and use `atan2`.
//! - `theta` is never `-0.0`: the sort uses `total_cmp` while reduction uses `==`,
//!   and the two only agree once signed zero is folded to `+0.0`.
//!
//! Sorting
//! - Order: `theta` ascending, exact ties by `r` ascending.
//! - `PolarSort::Bubble` is the O(n²) reference sort, deliberately kept for small
//!   inputs; `PolarSort::Unstable` is the default. Both produce the same order.

use std::cmp::Ordering;

use nalgebra::Vector2;

use super::types::PolarSort;

/// A point together with its angle and distance relative to a fixed pivot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarPoint {
    pub theta: f64,
    pub r: f64,
    pub point: Vector2<f64>,
}

impl PolarPoint {
    /// Polar coordinates of `point` about `pivot`. The pivot itself maps to `(0, 0)`.
    pub fn from_cartesian(point: Vector2<f64>, pivot: Vector2<f64>) -> Self {
        let d = point - pivot;
        let theta = if d.x > 0.0 {
            (d.y / d.x).atan()
        } else if d.x == 0.0 {
            if d.y > 0.0 {
                std::f64::consts::FRAC_PI_2
            } else if d.y < 0.0 {
                -std::f64::consts::FRAC_PI_2
            } else {
                0.0
            }
        } else {
            d.y.atan2(d.x)
        };
        Self {
            // fold -0.0 into +0.0
            theta: theta + 0.0,
            r: d.x.hypot(d.y),
            point,
        }
    }

    /// Angle first, radius on exact angle ties.
    #[inline]
    pub fn polar_cmp(&self, other: &Self) -> Ordering {
        match self.theta.total_cmp(&other.theta) {
            Ordering::Equal => self.r.total_cmp(&other.r),
            o => o,
        }
    }
}

/// Sort polar points by angle, then radius. Callers pass the slice without the pivot.
pub fn sort_polar(points: &mut [PolarPoint], algo: PolarSort) {
    match algo {
        PolarSort::Bubble => bubble_sort(points),
        PolarSort::Unstable => points.sort_unstable_by(PolarPoint::polar_cmp),
    }
}

fn bubble_sort(points: &mut [PolarPoint]) {
    let n = points.len();
    if n < 2 {
        return;
    }
    for k in 0..n - 1 {
        let mut swapped = false;
        for i in 0..n - k - 1 {
            if points[i].polar_cmp(&points[i + 1]) == Ordering::Greater {
                points.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
