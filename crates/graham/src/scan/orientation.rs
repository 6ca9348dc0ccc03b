//! Turn direction of three points.

use nalgebra::Vector2;

/// Classified turn of the path `p → q → r`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
    Collinear,
}

/// z-component of `(q − p) × (r − q)`.
///
/// Positive for a left (counter-clockwise) turn, negative for a right turn,
/// zero when `p`, `q`, `r` are collinear.
#[inline]
pub fn orientation(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> f64 {
    (q.x - p.x) * (r.y - q.y) - (r.x - q.x) * (q.y - p.y)
}

/// Sign of `orientation` as a `Turn`.
#[inline]
pub fn turn(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> Turn {
    let o = orientation(p, q, r);
    if o > 0.0 {
        Turn::Left
    } else if o < 0.0 {
        Turn::Right
    } else {
        Turn::Collinear
    }
}
