//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Colors for game elements
pub mod colors {
    /// #bebebe
    pub const BACKGROUND: [f32; 4] = [0.745, 0.745, 0.745, 1.0];
    /// #eeeeee
    pub const WALL: [f32; 4] = [0.933, 0.933, 0.933, 1.0];
    /// gold
    pub const COIN: [f32; 4] = [1.0, 0.843, 0.0, 1.0];
    /// #b8860b
    pub const COIN_OUTLINE: [f32; 4] = [0.722, 0.525, 0.043, 1.0];
    /// #ff0a0a
    pub const PLAYER: [f32; 4] = [1.0, 0.039, 0.039, 1.0];
    /// #660000
    pub const PLAYER_OUTLINE: [f32; 4] = [0.4, 0.0, 0.0, 1.0];
}
