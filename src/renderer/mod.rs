//! WebGPU rendering module
//!
//! Draws a [`crate::sim::Snapshot`] as flat-colored triangles. Nothing here
//! feeds back into the simulation.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, playfield_to_ndc};
pub use vertex::Vertex;
