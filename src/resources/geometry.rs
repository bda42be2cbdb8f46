//! The hardcoded shapes drawn by the demo.
//!
//! Positions are in the XY plane around the origin; entities move them
//! around with their transforms. Every triangle winds clockwise, which is
//! the front face of the render pipeline.

use crate::data_structures::mesh::{MeshData, Vertex};

pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
pub const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
pub const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

pub fn triangle() -> MeshData {
    MeshData::new(
        "triangle",
        vec![
            Vertex::new([0.0, 0.5, 0.0], RED),
            Vertex::new([0.5, -0.5, 0.0], BLUE),
            Vertex::new([-0.5, -0.5, 0.0], GREEN),
        ],
        vec![0, 1, 2],
    )
}

pub fn square() -> MeshData {
    MeshData::new(
        "square",
        vec![
            Vertex::new([-0.8, 0.8, 0.0], RED),    // top-left
            Vertex::new([-0.3, 0.8, 0.0], BLUE),   // top-right
            Vertex::new([-0.3, 0.3, 0.0], GREEN),  // bottom-right
            Vertex::new([-0.8, 0.3, 0.0], YELLOW), // bottom-left
        ],
        vec![
            0, 1, 2, //
            0, 2, 3,
        ],
    )
}

/// A centre vertex fanned out to five outer vertices.
pub fn pentagon() -> MeshData {
    MeshData::new(
        "pentagon",
        vec![
            Vertex::new([0.6, 0.0, 0.0], RED),
            Vertex::new([0.6, 0.4, 0.0], BLUE),
            Vertex::new([0.98, 0.12, 0.0], GREEN),
            Vertex::new([0.85, -0.29, 0.0], YELLOW),
            Vertex::new([0.35, -0.29, 0.0], GREEN),
            Vertex::new([0.22, 0.12, 0.0], BLUE),
        ],
        vec![
            0, 1, 2, //
            0, 2, 3, //
            0, 3, 4, //
            0, 4, 5, //
            0, 5, 1,
        ],
    )
}

/// Triangle, square and pentagon, in that order.
pub fn all() -> Vec<MeshData> {
    vec![triangle(), square(), pentagon()]
}
