//! Capability interface between the decoder and its consumers.
//!
//! [`DxfReader::read`](crate::io::dxf::DxfReader::read) walks a drawing and
//! calls one method per decoded entity, strictly in file order. A consumer
//! overrides the methods for the kinds it cares about; the rest default to
//! doing nothing. Entity kinds outside this set have no method and never
//! reach a consumer.

use crate::entities::{ArcData, CircleData, Entity, LineData, PolylineData, VertexData};

/// Receiver of entity notifications
pub trait CreationInterface {
    fn add_arc(&mut self, _data: &ArcData) {}

    fn add_circle(&mut self, _data: &CircleData) {}

    fn add_line(&mut self, _data: &LineData) {}

    /// Start of a polyline; its vertices arrive next through [`add_vertex`].
    ///
    /// [`add_vertex`]: CreationInterface::add_vertex
    fn add_polyline(&mut self, _data: &PolylineData) {}

    /// A polyline vertex, or a free-standing VERTEX record when no polyline
    /// precedes it.
    fn add_vertex(&mut self, _data: &VertexData) {}

    /// Forward an already-built notification to the matching method.
    fn add_entity(&mut self, entity: &Entity) {
        match entity {
            Entity::Arc(d) => self.add_arc(d),
            Entity::Circle(d) => self.add_circle(d),
            Entity::Line(d) => self.add_line(d),
            Entity::Polyline(d) => self.add_polyline(d),
            Entity::Vertex(d) => self.add_vertex(d),
        }
    }
}

/// Collects every notification, in arrival order.
impl CreationInterface for Vec<Entity> {
    fn add_arc(&mut self, data: &ArcData) {
        self.push(Entity::Arc(data.clone()));
    }

    fn add_circle(&mut self, data: &CircleData) {
        self.push(Entity::Circle(data.clone()));
    }

    fn add_line(&mut self, data: &LineData) {
        self.push(Entity::Line(data.clone()));
    }

    fn add_polyline(&mut self, data: &PolylineData) {
        self.push(Entity::Polyline(data.clone()));
    }

    fn add_vertex(&mut self, data: &VertexData) {
        self.push(Entity::Vertex(data.clone()));
    }
}

impl<T: CreationInterface + ?Sized> CreationInterface for &mut T {
    fn add_arc(&mut self, data: &ArcData) {
        (**self).add_arc(data)
    }

    fn add_circle(&mut self, data: &CircleData) {
        (**self).add_circle(data)
    }

    fn add_line(&mut self, data: &LineData) {
        (**self).add_line(data)
    }

    fn add_polyline(&mut self, data: &PolylineData) {
        (**self).add_polyline(data)
    }

    fn add_vertex(&mut self, data: &VertexData) {
        (**self).add_vertex(data)
    }
}
