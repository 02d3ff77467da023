//! Arc notification data

use crate::types::Vector3;

/// An arc: a portion of a circle swept counter-clockwise from
/// `start_angle` to `end_angle`
#[derive(Debug, Clone, PartialEq)]
pub struct ArcData {
    /// Center point of the arc
    pub center: Vector3,
    /// Radius of the arc
    pub radius: f64,
    /// Start angle in degrees (group code 50)
    pub start_angle: f64,
    /// End angle in degrees (group code 51)
    pub end_angle: f64,
}

impl ArcData {
    /// Create a new arc with center, radius, and angles
    pub fn new(center: Vector3, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        ArcData {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }
}

impl Default for ArcData {
    fn default() -> Self {
        Self::new(Vector3::ZERO, 0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_creation() {
        let arc = ArcData::new(Vector3::new(1.0, 2.0, 0.0), 5.0, 0.0, 90.0);
        assert_eq!(arc.center, Vector3::new(1.0, 2.0, 0.0));
        assert_eq!(arc.radius, 5.0);
        assert_eq!(arc.start_angle, 0.0);
        assert_eq!(arc.end_angle, 90.0);
    }
}
