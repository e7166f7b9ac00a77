//! Circle and axis-aligned rectangle overlap tests
//!
//! Everything in the playfield is either a circle (player, coins) or an
//! axis-aligned rectangle (walls), so these two tests cover all collisions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Nearest point on or inside the rectangle to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        // max(min) rather than clamp: clamp panics on inverted bounds
        p.min(self.max()).max(self.min())
    }
}

/// True if a circle overlaps a rectangle (interior or boundary).
///
/// Touching exactly at distance `radius` is not an overlap.
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) < radius * radius
}

/// True if a circle moving along the axis-aligned segment `from -> to`
/// overlaps the rectangle anywhere along the way.
///
/// Catches moves that jump clean over a thin rectangle, which the endpoint
/// test alone misses.
#[inline]
pub fn sweep_rect_overlap(from: Vec2, to: Vec2, radius: f32, rect: &Rect) -> bool {
    let (lo, hi) = (from.min(to), from.max(to));
    // Nearest point of the segment to the rectangle
    let nearest = rect.closest_point(lo).max(lo).min(hi);
    circle_rect_overlap(nearest, radius, rect)
}

/// True if two circles overlap (strict: tangent circles don't)
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    a.distance_squared(b) < reach * reach
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALL: Rect = Rect::new(0.0, 0.0, 400.0, 10.0);

    #[test]
    fn test_center_inside_rect() {
        assert!(circle_rect_overlap(Vec2::new(200.0, 5.0), 1.0, &WALL));
        assert!(circle_rect_overlap(Vec2::new(0.0, 0.0), 0.5, &WALL));
    }

    #[test]
    fn test_circle_far_away() {
        assert!(!circle_rect_overlap(Vec2::new(200.0, 300.0), 10.0, &WALL));
        // Outside the corner diagonally, though within the bounding box grown by radius
        assert!(!circle_rect_overlap(Vec2::new(408.0, 18.0), 10.0, &WALL));
    }

    #[test]
    fn test_edge_overlap_is_strict() {
        // Exactly tangent to the bottom edge
        assert!(!circle_rect_overlap(Vec2::new(200.0, 20.0), 10.0, &WALL));
        assert!(circle_rect_overlap(Vec2::new(200.0, 19.99), 10.0, &WALL));
    }

    #[test]
    fn test_corner_overlap() {
        // 3-4-5 triangle from the bottom-right corner at (400, 10)
        assert!(!circle_rect_overlap(Vec2::new(403.0, 14.0), 5.0, &WALL));
        assert!(circle_rect_overlap(Vec2::new(403.0, 14.0), 5.01, &WALL));
    }

    #[test]
    fn test_closest_point() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert_eq!(rect.closest_point(Vec2::new(0.0, 0.0)), Vec2::new(10.0, 10.0));
        assert_eq!(rect.closest_point(Vec2::new(15.0, 50.0)), Vec2::new(15.0, 30.0));
        assert_eq!(rect.closest_point(Vec2::new(15.0, 15.0)), Vec2::new(15.0, 15.0));
    }

    #[test]
    fn test_sweep_across_thin_wall() {
        let left = Rect::new(0.0, 0.0, 10.0, 600.0);
        // Both endpoints clear the wall, the path goes straight through it
        let (from, to) = (Vec2::new(40.0, 300.0), Vec2::new(-40.0, 300.0));
        assert!(!circle_rect_overlap(from, 10.0, &left));
        assert!(!circle_rect_overlap(to, 10.0, &left));
        assert!(sweep_rect_overlap(from, to, 10.0, &left));
        assert!(sweep_rect_overlap(to, from, 10.0, &left));
    }

    #[test]
    fn test_sweep_matches_endpoint_test_when_clear() {
        let left = Rect::new(0.0, 0.0, 10.0, 600.0);
        let start = Vec2::new(40.0, 300.0);
        // Moving away from the wall
        assert!(!sweep_rect_overlap(start, Vec2::new(90.0, 300.0), 10.0, &left));
        // Stopping exactly tangent
        assert!(!sweep_rect_overlap(start, Vec2::new(20.0, 300.0), 10.0, &left));
        // Ending inside
        assert!(sweep_rect_overlap(start, Vec2::new(19.0, 300.0), 10.0, &left));

        // Passing below the bottom-right corner by more than the radius
        let short = Rect::new(0.0, 0.0, 10.0, 100.0);
        let (from, to) = (Vec2::new(40.0, 115.0), Vec2::new(-40.0, 115.0));
        assert!(!sweep_rect_overlap(from, to, 10.0, &short));
    }

    #[test]
    fn test_circles_overlap() {
        let a = Vec2::new(40.0, 560.0);
        // Tangent circles don't overlap
        assert!(!circles_overlap(a, 10.0, a + Vec2::new(18.0, 0.0), 8.0));
        assert!(circles_overlap(a, 10.0, a + Vec2::new(17.982, 0.0), 8.0));
        assert!(circles_overlap(a, 10.0, a, 8.0));
    }
}
