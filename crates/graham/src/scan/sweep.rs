//! Stack sweep over the pivot-first, angle-sorted, reduced sequence.
//!
//! Every point after the first two pops right turns off the stack before it is
//! pushed, the last one included. A single look-ahead per point (no pop loop)
//! leaves reflex vertices behind when one point invalidates several earlier
//! ones, so the loop is not optional.

use nalgebra::Vector2;

use super::orientation::orientation;
use super::stack::HullStack;

/// Build the hull stack. Collinear turns push; only strict right turns pop.
///
/// Sequences shorter than two points are pushed as-is.
pub fn sweep(points: &[Vector2<f64>]) -> HullStack {
    let mut stack = HullStack::with_capacity(points.len());
    for &p in points.iter().take(2) {
        stack.push(p);
    }
    for &p in points.iter().skip(2) {
        while let (Some(below), Some(top)) = (stack.next_to_top(), stack.peek()) {
            if orientation(below, top, p) < 0.0 {
                stack.pop();
            } else {
                break;
            }
        }
        stack.push(p);
    }
    stack
}
