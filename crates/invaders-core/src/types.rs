//! Fundamental geometric types.

use serde::{Deserialize, Serialize};

/// 2D position in arena space (pixels). x grows right, y grows down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in pixels per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub dx: f64,
    pub dy: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another position in pixels.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Velocity {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Speed magnitude (pixels per frame).
    pub fn speed(&self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }
}

/// Axis-aligned box overlap test between two (top-left position, size) pairs.
pub fn boxes_overlap(a: &Position, aw: f64, ah: f64, b: &Position, bw: f64, bh: f64) -> bool {
    a.x < b.x + bw && a.x + aw > b.x && a.y < b.y + bh && a.y + ah > b.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_boxes_overlap() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(5.0, 5.0);
        assert!(boxes_overlap(&a, 10.0, 10.0, &b, 10.0, 10.0));

        let c = Position::new(20.0, 0.0);
        assert!(!boxes_overlap(&a, 10.0, 10.0, &c, 10.0, 10.0));

        // Touching edges do not overlap (strict inequality)
        let d = Position::new(10.0, 0.0);
        assert!(!boxes_overlap(&a, 10.0, 10.0, &d, 10.0, 10.0));
    }
}
