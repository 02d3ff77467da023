//! Shared test utilities for dxf-script integration tests.
//!
//! [`DxfBuilder`] assembles a drawing pair by pair and renders it either as
//! ASCII DXF or as R13+ binary DXF, so the same content can be fed through
//! both decoders.

#![allow(dead_code)]

use byteorder::{LittleEndian, WriteBytesExt};
use dxf_script::io::dxf::{GroupCodeValueType, BINARY_DXF_SENTINEL};
use dxf_script::{CallRecord, DxfReader, DxfReaderConfiguration, NotificationCollection, ScriptFilter};
use std::io::{Cursor, Write};

/// Builder for small DXF drawings
#[derive(Debug, Clone, Default)]
pub struct DxfBuilder {
    pairs: Vec<(i32, String)>,
}

impl DxfBuilder {
    /// Start a drawing with a HEADER section declaring `version`
    pub fn new(version: &str) -> Self {
        Self::default()
            .section("HEADER")
            .pair(9, "$ACADVER")
            .pair(1, version)
            .end_section()
    }

    /// Start a drawing with no HEADER section
    pub fn bare() -> Self {
        Self::default()
    }

    pub fn pair(mut self, code: i32, value: impl ToString) -> Self {
        self.pairs.push((code, value.to_string()));
        self
    }

    pub fn section(self, name: &str) -> Self {
        self.pair(0, "SECTION").pair(2, name)
    }

    pub fn end_section(self) -> Self {
        self.pair(0, "ENDSEC")
    }

    pub fn eof(self) -> Self {
        self.pair(0, "EOF")
    }

    pub fn line(self, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        self.pair(0, "LINE")
            .pair(8, "0")
            .pair(10, x1)
            .pair(20, y1)
            .pair(30, 0.0)
            .pair(11, x2)
            .pair(21, y2)
            .pair(31, 0.0)
    }

    pub fn circle(self, cx: f64, cy: f64, radius: f64) -> Self {
        self.pair(0, "CIRCLE")
            .pair(8, "0")
            .pair(10, cx)
            .pair(20, cy)
            .pair(30, 0.0)
            .pair(40, radius)
    }

    pub fn arc(self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> Self {
        self.pair(0, "ARC")
            .pair(8, "0")
            .pair(10, cx)
            .pair(20, cy)
            .pair(30, 0.0)
            .pair(40, radius)
            .pair(50, start)
            .pair(51, end)
    }

    /// POLYLINE with VERTEX records and SEQEND; vertices are (x, y, bulge)
    pub fn polyline(self, flags: i16, vertices: &[(f64, f64, f64)]) -> Self {
        let mut b = self.pair(0, "POLYLINE").pair(8, "0").pair(66, 1).pair(70, flags);
        for &(x, y, bulge) in vertices {
            b = b.vertex(x, y).pair(42, bulge);
        }
        b.pair(0, "SEQEND").pair(8, "0")
    }

    pub fn lwpolyline(self, flags: i16, vertices: &[(f64, f64, f64)]) -> Self {
        let mut b = self
            .pair(0, "LWPOLYLINE")
            .pair(8, "0")
            .pair(90, vertices.len())
            .pair(70, flags);
        for &(x, y, bulge) in vertices {
            b = b.pair(10, x).pair(20, y);
            if bulge != 0.0 {
                b = b.pair(42, bulge);
            }
        }
        b
    }

    pub fn vertex(self, x: f64, y: f64) -> Self {
        self.pair(0, "VERTEX")
            .pair(8, "0")
            .pair(10, x)
            .pair(20, y)
            .pair(30, 0.0)
    }

    pub fn text(self, value: &str) -> Self {
        self.pair(0, "TEXT")
            .pair(8, "0")
            .pair(10, 0.0)
            .pair(20, 0.0)
            .pair(40, 2.5)
            .pair(1, value)
    }

    /// Render as ASCII DXF
    pub fn to_ascii(&self) -> String {
        let mut out = String::new();
        for (code, value) in &self.pairs {
            out.push_str(&format!("{:>3}\n{}\n", code, value));
        }
        out
    }

    /// Render as binary DXF with 16-bit group codes
    pub fn to_binary(&self) -> Vec<u8> {
        let mut out = BINARY_DXF_SENTINEL.to_vec();
        for (code, value) in &self.pairs {
            out.write_i16::<LittleEndian>(*code as i16).unwrap();
            match GroupCodeValueType::from_code(*code) {
                GroupCodeValueType::Double => {
                    out.write_f64::<LittleEndian>(value.parse().unwrap()).unwrap()
                }
                GroupCodeValueType::Int16 => {
                    out.write_i16::<LittleEndian>(value.parse().unwrap()).unwrap()
                }
                GroupCodeValueType::Int32 => {
                    out.write_i32::<LittleEndian>(value.parse().unwrap()).unwrap()
                }
                GroupCodeValueType::Int64 => {
                    out.write_i64::<LittleEndian>(value.parse().unwrap()).unwrap()
                }
                GroupCodeValueType::Bool => out.write_u8(value.parse().unwrap()).unwrap(),
                GroupCodeValueType::String | GroupCodeValueType::Binary => {
                    out.write_all(value.as_bytes()).unwrap();
                    out.write_u8(0).unwrap();
                }
            }
        }
        out
    }
}

/// Decode `bytes` into call records, returning the reader's notifications too
pub fn records_of(
    bytes: Vec<u8>,
    config: DxfReaderConfiguration,
) -> (Vec<CallRecord>, NotificationCollection) {
    let mut filter = ScriptFilter::new(Vec::new());
    let notifications = DxfReader::from_reader(Cursor::new(bytes))
        .unwrap_or_else(|e| panic!("Cannot open DXF: {e:?}"))
        .with_configuration(config)
        .read(&mut filter)
        .unwrap_or_else(|e| panic!("Failed to read DXF: {e:?}"));
    (filter.into_sink(), notifications)
}

/// Decode `bytes` into script text
pub fn script_of(bytes: Vec<u8>) -> String {
    dxf_script::dxf_to_script(Cursor::new(bytes)).unwrap_or_else(|e| panic!("Failed to convert DXF: {e:?}"))
}
