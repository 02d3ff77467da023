//! Entity-capture adapter: entity notifications in, call records out

use super::record::{Arg, CallKind, CallRecord};
use super::sink::RecordSink;
use crate::creation::CreationInterface;
use crate::entities::{ArcData, CircleData, LineData, PolylineData, VertexData};
use tracing::trace;

/// Translates every notification it receives into exactly one
/// [`CallRecord`] and hands it to the sink, in arrival order.
///
/// A `Polyline` notification opens a sequence; following vertices become
/// `Vertex` records tagged with that polyline's sequence index. Any other
/// notification closes the sequence, and a vertex arriving while none is
/// open is written as a standalone `Point`.
///
/// Geometry is not validated: negative radii, NaN coordinates and unknown
/// flag bits are written as received.
pub struct ScriptFilter<S: RecordSink> {
    sink: S,
    emitted: usize,
    open_polyline: Option<usize>,
}

impl<S: RecordSink> ScriptFilter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            emitted: 0,
            open_polyline: None,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Give the sink back to the caller
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Number of records emitted so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Sequence index of the polyline currently accepting vertices
    pub fn open_polyline(&self) -> Option<usize> {
        self.open_polyline
    }

    fn emit(&mut self, record: CallRecord) -> usize {
        let index = self.emitted;
        trace!(index, record = %record, "emit");
        self.sink.emit(record);
        self.emitted += 1;
        index
    }

    /// Emit a record for a notification that is not a vertex
    fn emit_standalone(&mut self, record: CallRecord) -> usize {
        self.open_polyline = None;
        self.emit(record)
    }
}

impl<S: RecordSink> CreationInterface for ScriptFilter<S> {
    fn add_arc(&mut self, data: &ArcData) {
        self.emit_standalone(CallRecord::new(
            CallKind::Arc,
            vec![
                Arg::Point(data.center),
                Arg::Float(data.radius),
                Arg::Float(data.start_angle),
                Arg::Float(data.end_angle),
            ],
        ));
    }

    fn add_circle(&mut self, data: &CircleData) {
        self.emit_standalone(CallRecord::new(
            CallKind::Circle,
            vec![Arg::Point(data.center), Arg::Float(data.radius)],
        ));
    }

    fn add_line(&mut self, data: &LineData) {
        self.emit_standalone(CallRecord::new(
            CallKind::Line,
            vec![Arg::Point(data.start), Arg::Point(data.end)],
        ));
    }

    fn add_polyline(&mut self, data: &PolylineData) {
        let index = self.emit_standalone(CallRecord::new(
            CallKind::Polyline,
            vec![
                Arg::Int(data.vertex_count as i64),
                Arg::Int(i64::from(data.flags.bits())),
            ],
        ));
        self.open_polyline = Some(index);
    }

    fn add_vertex(&mut self, data: &VertexData) {
        let record = match self.open_polyline {
            Some(polyline) => CallRecord::new(
                CallKind::Vertex,
                vec![Arg::Point(data.position), Arg::Float(data.bulge)],
            )
            .in_polyline(polyline),
            None => CallRecord::new(CallKind::Point, vec![Arg::Point(data.position)]),
        };
        self.emit(record);
    }
}
