//! Entity decoding for the ENTITIES and BLOCKS sections

use super::stream_reader::{DxfCodePair, DxfStreamReader, PointReader};
use crate::creation::CreationInterface;
use crate::entities::*;
use crate::error::Result;
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::Vector3;
use tracing::debug;

/// Walks the records of one section and notifies the consumer
pub struct SectionReader<'a> {
    reader: &'a mut Box<dyn DxfStreamReader>,
    notifications: &'a mut NotificationCollection,
}

impl<'a> SectionReader<'a> {
    pub fn new(
        reader: &'a mut Box<dyn DxfStreamReader>,
        notifications: &'a mut NotificationCollection,
    ) -> Self {
        Self {
            reader,
            notifications,
        }
    }

    /// Read the ENTITIES section up to and including ENDSEC
    pub fn read_entities<C: CreationInterface + ?Sized>(&mut self, consumer: &mut C) -> Result<()> {
        while let Some(pair) = self.reader.read_pair()? {
            if pair.is_start("ENDSEC") {
                break;
            }
            if pair.code == 0 {
                self.read_entity(&pair.value_string, consumer)?;
            }
        }
        Ok(())
    }

    /// Read the BLOCKS section, reporting the entities of every block
    /// definition in file order
    pub fn read_blocks<C: CreationInterface + ?Sized>(&mut self, consumer: &mut C) -> Result<()> {
        while let Some(pair) = self.reader.read_pair()? {
            if pair.is_start("ENDSEC") {
                break;
            }
            if pair.code != 0 {
                continue;
            }
            match pair.value_string.as_str() {
                "BLOCK" | "ENDBLK" => self.skip_record()?,
                name => self.read_entity(name, consumer)?,
            }
        }
        Ok(())
    }

    /// Skip everything up to the end of the current section
    pub fn skip_section(&mut self) -> Result<()> {
        while let Some(pair) = self.reader.read_pair()? {
            if pair.is_start("ENDSEC") {
                break;
            }
        }
        Ok(())
    }

    fn read_entity<C: CreationInterface + ?Sized>(&mut self, name: &str, consumer: &mut C) -> Result<()> {
        match name {
            "LINE" => {
                let line = self.read_line()?;
                consumer.add_line(&line);
            }
            "CIRCLE" => {
                let circle = self.read_circle()?;
                consumer.add_circle(&circle);
            }
            "ARC" => {
                let arc = self.read_arc()?;
                consumer.add_arc(&arc);
            }
            "POLYLINE" => {
                let (polyline, vertices) = self.read_polyline()?;
                consumer.add_polyline(&polyline);
                for vertex in &vertices {
                    consumer.add_vertex(vertex);
                }
            }
            "LWPOLYLINE" => {
                let (polyline, vertices) = self.read_lwpolyline()?;
                consumer.add_polyline(&polyline);
                for vertex in &vertices {
                    consumer.add_vertex(vertex);
                }
            }
            "VERTEX" => {
                let vertex = self.read_vertex()?;
                consumer.add_vertex(&vertex);
            }
            _ => {
                debug!(entity = name, "skipping entity");
                self.notifications
                    .notify(NotificationType::NotSupported, format!("{} entity skipped", name));
                self.skip_record()?;
            }
        }
        Ok(())
    }

    /// Read the next pair of the current record, leaving the code 0 pair
    /// that starts the following record in the stream
    fn next_in_record(&mut self) -> Result<Option<DxfCodePair>> {
        match self.reader.read_pair()? {
            Some(pair) if pair.code == 0 => {
                self.reader.push_back(pair);
                Ok(None)
            }
            other => Ok(other),
        }
    }

    fn skip_record(&mut self) -> Result<()> {
        while self.next_in_record()?.is_some() {}
        Ok(())
    }

    /// Value of a floating-point group, recording a warning when it does
    /// not parse
    fn double(&mut self, pair: &DxfCodePair, entity: &str) -> Option<f64> {
        let value = pair.as_double();
        if value.is_none() {
            self.invalid_value(pair, entity);
        }
        value
    }

    fn coordinate(&mut self, point: &mut PointReader, pair: &DxfCodePair, entity: &str) {
        if !point.add_coordinate(pair) && pair.as_double().is_none() {
            self.invalid_value(pair, entity);
        }
    }

    fn flags(&mut self, pair: &DxfCodePair, entity: &str) -> Option<PolylineFlags> {
        // Group code 70 is a 16-bit integer; its bits are kept as written
        match pair.as_i16() {
            Some(bits) => Some(PolylineFlags::from_bits_retain(bits as u16)),
            None => {
                self.invalid_value(pair, entity);
                None
            }
        }
    }

    fn invalid_value(&mut self, pair: &DxfCodePair, entity: &str) {
        self.notifications.notify(
            NotificationType::Warning,
            format!(
                "Invalid value '{}' for group code {} in {}",
                pair.value_string, pair.code, entity
            ),
        );
    }

    /// Read a LINE entity
    fn read_line(&mut self) -> Result<LineData> {
        let mut start = PointReader::new(0);
        let mut end = PointReader::new(1);

        while let Some(pair) = self.next_in_record()? {
            match pair.code {
                10 | 20 | 30 => self.coordinate(&mut start, &pair, "LINE"),
                11 | 21 | 31 => self.coordinate(&mut end, &pair, "LINE"),
                _ => {}
            }
        }

        Ok(LineData::new(start.get_point(), end.get_point()))
    }

    /// Read a CIRCLE entity
    fn read_circle(&mut self) -> Result<CircleData> {
        let mut circle = CircleData::default();
        let mut center = PointReader::new(0);

        while let Some(pair) = self.next_in_record()? {
            match pair.code {
                10 | 20 | 30 => self.coordinate(&mut center, &pair, "CIRCLE"),
                40 => {
                    if let Some(radius) = self.double(&pair, "CIRCLE") {
                        circle.radius = radius;
                    }
                }
                _ => {}
            }
        }

        circle.center = center.get_point();
        Ok(circle)
    }

    /// Read an ARC entity
    fn read_arc(&mut self) -> Result<ArcData> {
        let mut arc = ArcData::default();
        let mut center = PointReader::new(0);

        while let Some(pair) = self.next_in_record()? {
            match pair.code {
                10 | 20 | 30 => self.coordinate(&mut center, &pair, "ARC"),
                40 => {
                    if let Some(radius) = self.double(&pair, "ARC") {
                        arc.radius = radius;
                    }
                }
                50 => {
                    if let Some(angle) = self.double(&pair, "ARC") {
                        arc.start_angle = angle;
                    }
                }
                51 => {
                    if let Some(angle) = self.double(&pair, "ARC") {
                        arc.end_angle = angle;
                    }
                }
                _ => {}
            }
        }

        arc.center = center.get_point();
        Ok(arc)
    }

    /// Read a VERTEX record
    fn read_vertex(&mut self) -> Result<VertexData> {
        let mut vertex = VertexData::default();
        let mut position = PointReader::new(0);

        while let Some(pair) = self.next_in_record()? {
            match pair.code {
                10 | 20 | 30 => self.coordinate(&mut position, &pair, "VERTEX"),
                42 => {
                    if let Some(bulge) = self.double(&pair, "VERTEX") {
                        vertex.bulge = bulge;
                    }
                }
                _ => {}
            }
        }

        vertex.position = position.get_point();
        Ok(vertex)
    }

    /// Read a POLYLINE entity together with its VERTEX records and SEQEND
    fn read_polyline(&mut self) -> Result<(PolylineData, Vec<VertexData>)> {
        let mut polyline = PolylineData::default();
        let mut vertices = Vec::new();

        while let Some(pair) = self.next_in_record()? {
            if pair.code == 70 {
                if let Some(flags) = self.flags(&pair, "POLYLINE") {
                    polyline.flags = flags;
                }
            }
        }

        while let Some(pair) = self.reader.read_pair()? {
            if pair.is_start("VERTEX") {
                vertices.push(self.read_vertex()?);
            } else if pair.is_start("SEQEND") {
                self.skip_record()?;
                break;
            } else {
                self.notifications.notify(
                    NotificationType::Warning,
                    format!("POLYLINE ended by {} instead of SEQEND", pair.value_string),
                );
                self.reader.push_back(pair);
                break;
            }
        }

        polyline.vertex_count = vertices.len();
        Ok((polyline, vertices))
    }

    /// Read an LWPOLYLINE entity; its inline vertices become separate
    /// vertex notifications
    fn read_lwpolyline(&mut self) -> Result<(PolylineData, Vec<VertexData>)> {
        let mut polyline = PolylineData::default();
        let mut vertices: Vec<VertexData> = Vec::new();
        let mut elevation = 0.0;

        while let Some(pair) = self.next_in_record()? {
            match pair.code {
                70 => {
                    if let Some(flags) = self.flags(&pair, "LWPOLYLINE") {
                        polyline.flags = flags;
                    }
                }
                38 => {
                    if let Some(z) = self.double(&pair, "LWPOLYLINE") {
                        elevation = z;
                    }
                }
                10 => {
                    let x = self.double(&pair, "LWPOLYLINE").unwrap_or(0.0);
                    vertices.push(VertexData::new(Vector3::new(x, 0.0, 0.0), 0.0));
                }
                20 | 42 => {
                    let value = self.double(&pair, "LWPOLYLINE").unwrap_or(0.0);
                    match vertices.last_mut() {
                        Some(last) if pair.code == 20 => last.position.y = value,
                        Some(last) => last.bulge = value,
                        None => self.notifications.notify(
                            NotificationType::Warning,
                            format!("LWPOLYLINE group code {} before the first vertex", pair.code),
                        ),
                    }
                }
                _ => {}
            }
        }

        for vertex in &mut vertices {
            vertex.position.z = elevation;
        }
        polyline.vertex_count = vertices.len();
        Ok((polyline, vertices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::reader::DxfTextReader;
    use std::io::{BufReader, Cursor};

    fn stream(pairs: &[(i32, &str)]) -> Box<dyn DxfStreamReader> {
        let mut text = String::new();
        for (code, value) in pairs {
            text.push_str(&format!("{}\n{}\n", code, value));
        }
        Box::new(DxfTextReader::new(BufReader::new(Cursor::new(text.into_bytes()))))
    }

    fn read_entities(pairs: &[(i32, &str)]) -> (Vec<Entity>, NotificationCollection) {
        let mut reader = stream(pairs);
        let mut notifications = NotificationCollection::new();
        let mut entities = Vec::new();
        SectionReader::new(&mut reader, &mut notifications)
            .read_entities(&mut entities)
            .unwrap();
        (entities, notifications)
    }

    #[test]
    fn test_line_and_arc() {
        let (entities, notes) = read_entities(&[
            (0, "LINE"), (8, "0"), (10, "1"), (20, "2"), (30, "0"), (11, "3"), (21, "4"), (31, "0"),
            (0, "ARC"), (10, "0"), (20, "0"), (40, "5"), (50, "0"), (51, "90"),
            (0, "ENDSEC"),
        ]);

        assert!(notes.is_empty());
        assert_eq!(
            entities,
            vec![
                Entity::Line(LineData::from_coords(1.0, 2.0, 0.0, 3.0, 4.0, 0.0)),
                Entity::Arc(ArcData::new(Vector3::ZERO, 5.0, 0.0, 90.0)),
            ]
        );
    }

    #[test]
    fn test_polyline_with_vertices() {
        let (entities, _) = read_entities(&[
            (0, "POLYLINE"), (66, "1"), (70, "1"),
            (0, "VERTEX"), (10, "0"), (20, "0"),
            (0, "VERTEX"), (10, "1"), (20, "0"), (42, "0.5"),
            (0, "SEQEND"), (8, "0"),
            (0, "CIRCLE"), (40, "1"),
            (0, "ENDSEC"),
        ]);

        assert_eq!(entities.len(), 4);
        assert_eq!(
            entities[0],
            Entity::Polyline(PolylineData::new(2, PolylineFlags::CLOSED))
        );
        assert_eq!(
            entities[2],
            Entity::Vertex(VertexData::new(Vector3::new(1.0, 0.0, 0.0), 0.5))
        );
        assert!(matches!(entities[3], Entity::Circle(_)));
    }

    #[test]
    fn test_polyline_flags_out_of_range() {
        let (entities, notes) = read_entities(&[
            (0, "LWPOLYLINE"), (70, "65537"), (10, "0"), (20, "0"),
            (0, "POLYLINE"), (70, "-32768"),
            (0, "SEQEND"),
            (0, "ENDSEC"),
        ]);

        assert_eq!(entities[0], Entity::Polyline(PolylineData::new(1, PolylineFlags::empty())));
        assert_eq!(
            entities[2],
            Entity::Polyline(PolylineData::new(0, PolylineFlags::from_bits_retain(0x8000)))
        );
        assert_eq!(notes.of_type(NotificationType::Warning).len(), 1);
    }

    #[test]
    fn test_polyline_missing_seqend() {
        let (entities, notes) = read_entities(&[
            (0, "POLYLINE"), (70, "0"),
            (0, "VERTEX"), (10, "1"), (20, "1"),
            (0, "LINE"),
            (0, "ENDSEC"),
        ]);

        assert_eq!(entities.len(), 3);
        assert!(matches!(entities[2], Entity::Line(_)));
        assert!(notes.has_type(NotificationType::Warning));
    }

    #[test]
    fn test_lwpolyline() {
        let (entities, _) = read_entities(&[
            (0, "LWPOLYLINE"), (90, "3"), (70, "1"), (38, "2.5"),
            (10, "0"), (20, "0"),
            (10, "4"), (20, "0"), (42, "1"),
            (10, "4"), (20, "3"),
            (0, "ENDSEC"),
        ]);

        assert_eq!(entities.len(), 4);
        assert_eq!(
            entities[0],
            Entity::Polyline(PolylineData::new(3, PolylineFlags::CLOSED))
        );
        assert_eq!(
            entities[2],
            Entity::Vertex(VertexData::new(Vector3::new(4.0, 0.0, 2.5), 1.0))
        );
        assert_eq!(
            entities[3],
            Entity::Vertex(VertexData::new(Vector3::new(4.0, 3.0, 2.5), 0.0))
        );
    }

    #[test]
    fn test_unsupported_entity_is_skipped() {
        let (entities, notes) = read_entities(&[
            (0, "TEXT"), (1, "hello"), (10, "0"), (20, "0"),
            (0, "CIRCLE"), (10, "1"), (20, "1"), (40, "2"),
            (0, "ENDSEC"),
        ]);

        assert_eq!(entities, vec![Entity::Circle(CircleData::new(Vector3::new(1.0, 1.0, 0.0), 2.0))]);
        assert_eq!(notes.of_type(NotificationType::NotSupported).len(), 1);
        assert_eq!(notes.iter().next().unwrap().message, "TEXT entity skipped");
    }

    #[test]
    fn test_invalid_value_keeps_default() {
        let (entities, notes) = read_entities(&[
            (0, "CIRCLE"), (10, "1"), (20, "oops"), (40, "2"),
            (0, "ENDSEC"),
        ]);

        assert_eq!(entities, vec![Entity::Circle(CircleData::new(Vector3::new(1.0, 0.0, 0.0), 2.0))]);
        assert_eq!(notes.of_type(NotificationType::Warning).len(), 1);
    }

    #[test]
    fn test_blocks_section() {
        let mut reader = stream(&[
            (0, "BLOCK"), (2, "DOOR"), (10, "0"), (20, "0"),
            (0, "LINE"), (11, "1"),
            (0, "ENDBLK"),
            (0, "ENDSEC"),
        ]);
        let mut notifications = NotificationCollection::new();
        let mut entities = Vec::new();
        SectionReader::new(&mut reader, &mut notifications)
            .read_blocks(&mut entities)
            .unwrap();

        assert_eq!(entities, vec![Entity::Line(LineData::from_coords(0.0, 0.0, 0.0, 1.0, 0.0, 0.0))]);
        assert!(notifications.is_empty());
    }
}
