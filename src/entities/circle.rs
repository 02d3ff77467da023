//! Circle notification data

use crate::types::Vector3;

/// A full circle
#[derive(Debug, Clone, PartialEq)]
pub struct CircleData {
    pub center: Vector3,
    pub radius: f64,
}

impl CircleData {
    pub fn new(center: Vector3, radius: f64) -> Self {
        CircleData { center, radius }
    }
}

impl Default for CircleData {
    fn default() -> Self {
        Self::new(Vector3::ZERO, 0.0)
    }
}
