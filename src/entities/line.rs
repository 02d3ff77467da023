//! Line notification data

use crate::types::Vector3;

/// A straight segment between two points
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineData {
    /// Start point (group codes 10/20/30)
    pub start: Vector3,
    /// End point (group codes 11/21/31)
    pub end: Vector3,
}

impl LineData {
    /// Create a new line from start and end points
    pub fn new(start: Vector3, end: Vector3) -> Self {
        LineData { start, end }
    }

    /// Create a new line from coordinates
    pub fn from_coords(x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> Self {
        LineData {
            start: Vector3::new(x1, y1, z1),
            end: Vector3::new(x2, y2, z2),
        }
    }
}
