//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in playfield coordinates.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};
use crate::sim::{Rect, Snapshot};

/// Segments used for player and coin circles
pub const CIRCLE_SEGMENTS: u32 = 32;
/// Outline stroke width
pub const OUTLINE_WIDTH: f32 = 1.0;

/// Point on a circle at angle `theta`
#[inline]
fn on_circle(center: Vec2, radius: f32, theta: f32) -> Vec2 {
    center + Vec2::new(theta.cos(), theta.sin()) * radius
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (min, max) = (r.min(), r.max());
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let p1 = on_circle(center, radius, (i as f32 / segments as f32) * TAU);
        let p2 = on_circle(center, radius, ((i + 1) as f32 / segments as f32) * TAU);

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        let inner1 = on_circle(center, inner_radius, theta1);
        let outer1 = on_circle(center, outer_radius, theta1);
        let inner2 = on_circle(center, inner_radius, theta2);
        let outer2 = on_circle(center, outer_radius, theta2);

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Filled circle with a thin outline centered on its edge
fn outlined_circle(center: Vec2, radius: f32, fill: [f32; 4], outline: [f32; 4]) -> Vec<Vertex> {
    let half = OUTLINE_WIDTH / 2.0;
    let mut vertices = circle(center, radius, fill, CIRCLE_SEGMENTS);
    vertices.extend(ring(center, radius - half, radius + half, outline, CIRCLE_SEGMENTS));
    vertices
}

/// All vertices for one frame: walls, then coins, then the player on top
pub fn scene(snapshot: &Snapshot) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for wall in &snapshot.walls {
        vertices.extend(rect(wall, colors::WALL));
    }

    for coin in snapshot.coins.iter().filter(|c| !c.collected) {
        vertices.extend(outlined_circle(
            coin.pos,
            coin.radius,
            colors::COIN,
            colors::COIN_OUTLINE,
        ));
    }

    let player = &snapshot.player;
    vertices.extend(outlined_circle(
        player.pos,
        player.radius,
        colors::PLAYER,
        colors::PLAYER_OUTLINE,
    ));

    vertices
}
