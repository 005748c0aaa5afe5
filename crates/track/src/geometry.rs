//! # Geometry Primitives
//!
//! Axis-aligned rectangles in screen coordinates (x grows right, y grows
//! down) and the pose type used to place a vehicle on a track.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Half-open containment: the left and top edges are inside, the right
    /// and bottom edges are not.
    #[must_use]
    pub fn contains(&self, px: f64, py: f64) -> bool {
        self.x <= px && px < self.x + self.width && self.y <= py && py < self.y + self.height
    }

    #[must_use]
    pub fn contains_point(&self, p: DVec2) -> bool {
        self.contains(p.x, p.y)
    }

    /// A rectangle that can contain nothing, or whose fields are not finite.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let finite = [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite());
        !finite || self.width <= 0.0 || self.height <= 0.0
    }

    #[must_use]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Position plus heading in degrees. Heading 0 points along +x and positive
/// angles turn clockwise on screen.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: DVec2,
    pub heading: f64,
}

impl Pose {
    #[must_use]
    pub const fn new(position: DVec2, heading: f64) -> Self {
        Self { position, heading }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(DVec2::new(350.0, 100.0), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_half_open() {
        let r = Rect::new(10.0, 20.0, 5.0, 5.0);
        assert!(r.contains(10.0, 20.0));
        assert!(r.contains(14.999, 24.999));
        assert!(!r.contains(15.0, 22.0));
        assert!(!r.contains(12.0, 25.0));
        assert!(!r.contains(9.999, 22.0));
    }

    #[test]
    fn zero_and_nan_sizes_are_degenerate() {
        assert!(Rect::new(0.0, 0.0, 0.0, 10.0).is_degenerate());
        assert!(Rect::new(0.0, 0.0, 10.0, -1.0).is_degenerate());
        assert!(Rect::new(f64::NAN, 0.0, 10.0, 10.0).is_degenerate());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_degenerate());
    }

    #[test]
    fn zero_width_rect_contains_nothing() {
        let r = Rect::new(0.0, 0.0, 0.0, 10.0);
        assert!(!r.contains(0.0, 5.0));
    }
}
