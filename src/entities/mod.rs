//! Entity notification data.
//!
//! The decoder produces one of these values for every geometric record it
//! recognizes and hands it to a
//! [`CreationInterface`](crate::creation::CreationInterface) by reference.
//! Nothing downstream keeps ownership of the notification itself.

mod arc;
mod circle;
mod line;
mod polyline;
mod vertex;

pub use arc::ArcData;
pub use circle::CircleData;
pub use line::LineData;
pub use polyline::{PolylineData, PolylineFlags};
pub use vertex::VertexData;

/// Tagged union over every entity kind the converter understands
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Arc(ArcData),
    Circle(CircleData),
    Line(LineData),
    Polyline(PolylineData),
    Vertex(VertexData),
}

impl Entity {
    /// DXF record name of the entity kind (`ARC`, `CIRCLE`, ...)
    pub fn entity_name(&self) -> &'static str {
        match self {
            Entity::Arc(_) => "ARC",
            Entity::Circle(_) => "CIRCLE",
            Entity::Line(_) => "LINE",
            Entity::Polyline(_) => "POLYLINE",
            Entity::Vertex(_) => "VERTEX",
        }
    }

    pub fn is_vertex(&self) -> bool {
        matches!(self, Entity::Vertex(_))
    }
}

impl From<ArcData> for Entity {
    fn from(d: ArcData) -> Self {
        Entity::Arc(d)
    }
}

impl From<CircleData> for Entity {
    fn from(d: CircleData) -> Self {
        Entity::Circle(d)
    }
}

impl From<LineData> for Entity {
    fn from(d: LineData) -> Self {
        Entity::Line(d)
    }
}

impl From<PolylineData> for Entity {
    fn from(d: PolylineData) -> Self {
        Entity::Polyline(d)
    }
}

impl From<VertexData> for Entity {
    fn from(d: VertexData) -> Self {
        Entity::Vertex(d)
    }
}
