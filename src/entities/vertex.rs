//! Vertex notification data

use crate::types::Vector3;

/// One polyline vertex
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VertexData {
    /// Vertex location (group codes 10/20/30)
    pub position: Vector3,
    /// Bulge of the segment starting at this vertex (group code 42).
    ///
    /// Zero for a straight segment; otherwise the tangent of a quarter of
    /// the included arc angle, negative for clockwise arcs.
    pub bulge: f64,
}

impl VertexData {
    pub fn new(position: Vector3, bulge: f64) -> Self {
        VertexData { position, bulge }
    }
}
