//! LIFO stack of hull vertices.

use nalgebra::Vector2;

/// Hull vertices under construction; bottom-to-top is counter-clockwise order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HullStack {
    items: Vec<Vector2<f64>>,
}

impl HullStack {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            items: Vec::with_capacity(cap),
        }
    }

    #[inline]
    pub fn push(&mut self, p: Vector2<f64>) {
        self.items.push(p);
    }

    /// Top of the stack.
    #[inline]
    pub fn peek(&self) -> Option<Vector2<f64>> {
        self.items.last().copied()
    }

    /// Element directly below the top.
    #[inline]
    pub fn next_to_top(&self) -> Option<Vector2<f64>> {
        let n = self.items.len();
        if n < 2 {
            None
        } else {
            Some(self.items[n - 2])
        }
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Vector2<f64>> {
        self.items.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bottom-to-top view.
    #[inline]
    pub fn as_slice(&self) -> &[Vector2<f64>] {
        &self.items
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Vector2<f64>> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn lifo_order() {
        let mut s = HullStack::new();
        assert!(s.is_empty());
        assert_eq!(s.peek(), None);
        assert_eq!(s.pop(), None);
        s.push(vector![0.0, 0.0]);
        assert_eq!(s.next_to_top(), None);
        s.push(vector![1.0, 0.0]);
        s.push(vector![1.0, 1.0]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.peek(), Some(vector![1.0, 1.0]));
        assert_eq!(s.next_to_top(), Some(vector![1.0, 0.0]));
        assert_eq!(s.pop(), Some(vector![1.0, 1.0]));
        assert_eq!(s.peek(), Some(vector![1.0, 0.0]));
        assert_eq!(s.as_slice(), &[vector![0.0, 0.0], vector![1.0, 0.0]]);
        assert_eq!(s.into_vec(), vec![vector![0.0, 0.0], vector![1.0, 0.0]]);
    }
}
