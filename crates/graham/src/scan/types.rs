//! Configuration and the result type of the scan.
//!
//! - `HullCfg`: sort algorithm and degenerate-input policy, passed by value.
//! - `Hull`: counter-clockwise vertices starting at the pivot, plus measures.

use nalgebra::Vector2;

use super::orientation::orientation;

/// Polar sort algorithm. Both produce the same `(theta, r)` order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolarSort {
    /// O(n²) bubble sort; fine for a few hundred points and easy to audit.
    Bubble,
    /// `slice::sort_unstable_by` with a total order.
    #[default]
    Unstable,
}

/// What to do with inputs whose hull is a point or a segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Degenerate {
    /// Fewer than 3 points or all-collinear input is an error.
    #[default]
    Reject,
    /// Return the degenerate hull: one point, or the segment `[pivot, farthest]`.
    Allow,
}

/// Scan configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HullCfg {
    pub sort: PolarSort,
    pub degenerate: Degenerate,
}

impl HullCfg {
    #[inline]
    pub fn with_sort(mut self, sort: PolarSort) -> Self {
        self.sort = sort;
        self
    }

    #[inline]
    pub fn allow_degenerate(mut self) -> Self {
        self.degenerate = Degenerate::Allow;
        self
    }
}

/// Convex hull vertices in counter-clockwise order, first vertex is the pivot.
///
/// Invariants:
/// - Every vertex is one of the input points.
/// - Consecutive triples (cyclically) never turn right.
/// - One or two vertices only when built under `Degenerate::Allow`.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    vertices: Vec<Vector2<f64>>,
}

impl Hull {
    pub(crate) fn from_vertices(vertices: Vec<Vector2<f64>>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Vector2<f64>> {
        self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True for the one- and two-vertex hulls of degenerate inputs.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Shoelace area; positive for counter-clockwise order.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let mut a = 0.0;
        for i in 0..n {
            let p = self.vertices[i];
            let q = self.vertices[(i + 1) % n];
            a += p.x * q.y - q.x * p.y;
        }
        0.5 * a
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Boundary length. A segment hull counts its edge once.
    pub fn perimeter(&self) -> f64 {
        match self.vertices.len() {
            0 | 1 => 0.0,
            2 => (self.vertices[1] - self.vertices[0]).norm(),
            n => (0..n)
                .map(|i| (self.vertices[(i + 1) % n] - self.vertices[i]).norm())
                .sum(),
        }
    }

    /// Closed containment: boundary points count as inside.
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        match self.vertices.len() {
            0 => false,
            1 => self.vertices[0] == p,
            2 => {
                let (a, b) = (self.vertices[0], self.vertices[1]);
                orientation(a, b, p) == 0.0
                    && p.x >= a.x.min(b.x)
                    && p.x <= a.x.max(b.x)
                    && p.y >= a.y.min(b.y)
                    && p.y <= a.y.max(b.y)
            }
            n => (0..n).all(|i| {
                orientation(self.vertices[i], self.vertices[(i + 1) % n], p) >= 0.0
            }),
        }
    }
}
