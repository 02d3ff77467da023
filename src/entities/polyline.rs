//! Polyline header notification data

use bitflags::bitflags;

bitflags! {
    /// Polyline flags (matches DXF group code 70).
    ///
    /// Bits the converter does not name are kept as-is and written to the
    /// script unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PolylineFlags: u16 {
        /// Closed polyline (or polygon mesh closed in the M direction).
        const CLOSED = 1;
        /// Curve-fit vertices have been added.
        const CURVE_FIT = 2;
        /// Spline-fit vertices have been added.
        const SPLINE_FIT = 4;
        /// 3D polyline.
        const POLYLINE_3D = 8;
        /// 3D polygon mesh.
        const POLYGON_MESH = 16;
        /// Polygon mesh closed in the N direction.
        const CLOSED_N = 32;
        /// Polyface mesh.
        const POLYFACE_MESH = 64;
        /// Linetype pattern generated continuously around the vertices.
        const LINETYPE_CONTINUOUS = 128;

        const _ = !0;
    }
}

/// Start of a polyline sequence; the vertices follow as separate
/// notifications
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolylineData {
    /// Number of vertex notifications that follow
    pub vertex_count: usize,
    /// Polyline flags
    pub flags: PolylineFlags,
}

impl PolylineData {
    pub fn new(vertex_count: usize, flags: PolylineFlags) -> Self {
        PolylineData { vertex_count, flags }
    }

    pub fn is_closed(&self) -> bool {
        self.flags.contains(PolylineFlags::CLOSED)
    }
}
