//! Circle entity
//!
//! Position and radius are normalized to the window: x and y in [0, 1],
//! radius as a fraction of window width.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGB color with channels in [0, 1]
pub type Color = [f32; 3];

/// A growing circle waiting to be popped
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pos: Vec2,
    radius: f32,
    color: Color,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            radius: 1.0,
            color: [1.0, 0.0, 0.0],
        }
    }
}

impl Circle {
    pub fn new(pos: Vec2, radius: f32, color: Color) -> Self {
        Self {
            pos,
            radius: radius.max(0.0),
            color,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Set the radius (clamped so it never goes negative)
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(0.0);
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Area in normalized units (π·r²)
    #[inline]
    pub fn area(&self) -> f32 {
        std::f32::consts::PI * self.radius * self.radius
    }

    /// Hit test against a normalized point.
    ///
    /// The vertical extent is stretched by `aspect` (width / height) because
    /// the radius is measured in widths while y is measured in heights.
    pub fn contains(&self, point: Vec2, aspect: f32) -> bool {
        (self.pos.x - point.x).abs() < self.radius
            && (self.pos.y - point.y).abs() < self.radius * aspect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area() {
        let c = Circle::new(Vec2::new(0.5, 0.5), 0.1, [1.0, 1.0, 1.0]);
        assert!((c.area() - std::f32::consts::PI * 0.01).abs() < 1e-6);
        assert_eq!(Circle::new(Vec2::ZERO, 0.0, [0.0; 3]).area(), 0.0);
    }

    #[test]
    fn test_radius_never_negative() {
        let mut c = Circle::new(Vec2::ZERO, -1.0, [0.0; 3]);
        assert_eq!(c.radius(), 0.0);
        c.set_radius(-0.5);
        assert_eq!(c.radius(), 0.0);
    }

    #[test]
    fn test_contains_square_window() {
        let c = Circle::new(Vec2::new(0.5, 0.5), 0.1, [0.0; 3]);
        assert!(c.contains(Vec2::new(0.5, 0.5), 1.0));
        assert!(c.contains(Vec2::new(0.59, 0.41), 1.0));
        assert!(!c.contains(Vec2::new(0.61, 0.5), 1.0));
        assert!(!c.contains(Vec2::new(0.5, 0.61), 1.0));
    }

    #[test]
    fn test_contains_wide_window() {
        // 2:1 window, vertical reach doubles
        let c = Circle::new(Vec2::new(0.5, 0.5), 0.1, [0.0; 3]);
        assert!(c.contains(Vec2::new(0.5, 0.69), 2.0));
        assert!(!c.contains(Vec2::new(0.5, 0.71), 2.0));
        assert!(!c.contains(Vec2::new(0.61, 0.5), 2.0));
    }

    #[test]
    fn test_mutators() {
        let mut c = Circle::default();
        c.set_position(Vec2::new(0.25, 0.75));
        c.set_color([0.1, 0.2, 0.3]);
        c.set_radius(0.2);
        assert_eq!(c.position(), Vec2::new(0.25, 0.75));
        assert_eq!(c.color(), [0.1, 0.2, 0.3]);
        assert_eq!(c.radius(), 0.2);
    }
}
