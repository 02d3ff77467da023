//! # dxf-script
//!
//! Converts the geometry of a DXF drawing into a script of function calls,
//! one call per decoded entity:
//!
//! ```text
//! Line([0.0, 0.0, 0.0], [10.0, 10.0, 0.0])
//! Arc([0.0, 0.0, 0.0], 5.0, 0.0, 90.0)
//! Polyline(2, 1)
//! Vertex([0.0, 0.0, 0.0], 0.0)
//! Vertex([1.0, 0.0, 0.0], 0.5)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxf_script::{DxfReader, ScriptFilter, ScriptWriter};
//!
//! let mut filter = ScriptFilter::new(ScriptWriter::new(std::io::stdout()));
//! let notifications = DxfReader::from_file("sample.dxf")?.read(&mut filter)?;
//! filter.into_sink().finish()?;
//!
//! for n in &notifications {
//!     eprintln!("{}", n);
//! }
//! # Ok::<(), dxf_script::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - `CreationInterface` - notification trait with one method per entity kind
//! - `DxfReader` - decodes ASCII or binary DXF and drives a `CreationInterface`
//! - `ScriptFilter` - the `CreationInterface` that turns notifications into
//!   `CallRecord`s
//! - `RecordSink` - where records go (`Vec<CallRecord>`, `ScriptWriter`)
//!
//! Only arcs, circles, lines, polylines (POLYLINE and LWPOLYLINE) and
//! vertices are translated; other entity kinds are skipped and reported as
//! notifications.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod creation;
pub mod entities;
pub mod error;
pub mod io;
pub mod notification;
pub mod script;
pub mod types;

pub use creation::CreationInterface;
pub use entities::{
    ArcData, CircleData, Entity, LineData, PolylineData, PolylineFlags, VertexData,
};
pub use error::{DxfError, Result};
pub use io::dxf::{DxfReader, DxfReaderConfiguration};
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use script::{Arg, CallKind, CallRecord, RecordSink, ScriptFilter, ScriptFormat, ScriptWriter};
pub use types::{DxfVersion, Vector3};

use std::io::{Read, Seek};
use std::path::Path;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convert a DXF stream to script text with the default number format
pub fn dxf_to_script<R: Read + Seek + 'static>(reader: R) -> Result<String> {
    let mut filter = ScriptFilter::new(ScriptWriter::new(Vec::new()));
    DxfReader::from_reader(reader)?.read(&mut filter)?;
    script_text(filter)
}

/// Convert a DXF file to script text with the default number format
pub fn dxf_file_to_script<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut filter = ScriptFilter::new(ScriptWriter::new(Vec::new()));
    DxfReader::from_file(path)?.read(&mut filter)?;
    script_text(filter)
}

fn script_text(filter: ScriptFilter<ScriptWriter<Vec<u8>>>) -> Result<String> {
    let bytes = filter.into_sink().finish()?;
    String::from_utf8(bytes).map_err(|e| DxfError::Encoding(e.to_string()))
}
