//! Call records and their textual form

use crate::types::Vector3;
use std::fmt::{self, Write};

/// Function a call record invokes in the generated script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    Arc,
    Circle,
    Line,
    Polyline,
    /// Vertex belonging to the currently open polyline
    Vertex,
    /// Vertex that arrived with no polyline open
    Point,
}

impl CallKind {
    /// Name of the function in the script
    pub fn function_name(&self) -> &'static str {
        match self {
            CallKind::Arc => "Arc",
            CallKind::Circle => "Circle",
            CallKind::Line => "Line",
            CallKind::Polyline => "Polyline",
            CallKind::Vertex => "Vertex",
            CallKind::Point => "Point",
        }
    }
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function_name())
    }
}

/// One positional argument of a call record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg {
    Float(f64),
    Int(i64),
    /// Rendered as `[x, y, z]`
    Point(Vector3),
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Arg::Float(v)
    }
}

impl From<i64> for Arg {
    fn from(v: i64) -> Self {
        Arg::Int(v)
    }
}

impl From<Vector3> for Arg {
    fn from(v: Vector3) -> Self {
        Arg::Point(v)
    }
}

/// Number formatting for rendered scripts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptFormat {
    /// Fixed number of decimals for floats.
    ///
    /// `None` (the default) writes the shortest representation that reads
    /// back to the same `f64`, always with a decimal point or exponent.
    pub precision: Option<usize>,
}

impl ScriptFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write floats with exactly `decimals` digits after the point
    pub fn with_precision(mut self, decimals: usize) -> Self {
        self.precision = Some(decimals);
        self
    }

    fn write_float(&self, out: &mut String, value: f64) -> fmt::Result {
        match self.precision {
            Some(decimals) => write!(out, "{:.*}", decimals, value),
            None => write!(out, "{:?}", value),
        }
    }

    fn write_arg(&self, out: &mut String, arg: &Arg) -> fmt::Result {
        match arg {
            Arg::Float(v) => self.write_float(out, *v),
            Arg::Int(v) => write!(out, "{}", v),
            Arg::Point(p) => {
                out.push('[');
                self.write_float(out, p.x)?;
                out.push_str(", ");
                self.write_float(out, p.y)?;
                out.push_str(", ");
                self.write_float(out, p.z)?;
                out.push(']');
                Ok(())
            }
        }
    }
}

/// A function call standing for one entity notification.
///
/// Records are immutable once emitted; a sink takes ownership of each one.
#[derive(Debug, Clone, PartialEq)]
pub struct CallRecord {
    pub kind: CallKind,
    pub args: Vec<Arg>,
    /// Sequence index of the `Polyline` record this vertex belongs to
    pub polyline: Option<usize>,
}

impl CallRecord {
    pub fn new(kind: CallKind, args: Vec<Arg>) -> Self {
        CallRecord {
            kind,
            args,
            polyline: None,
        }
    }

    /// Mark the record as a member of the polyline emitted at `index`
    pub fn in_polyline(mut self, index: usize) -> Self {
        self.polyline = Some(index);
        self
    }

    pub fn function_name(&self) -> &'static str {
        self.kind.function_name()
    }

    /// Render as `name(arg1, arg2, ...)` without a line terminator
    pub fn render(&self, format: &ScriptFormat) -> String {
        let mut out = String::with_capacity(16 + self.args.len() * 24);
        out.push_str(self.function_name());
        out.push('(');
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            // Writing into a String cannot fail
            let _ = format.write_arg(&mut out, arg);
        }
        out.push(')');
        out
    }
}

impl fmt::Display for CallRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&ScriptFormat::default()))
    }
}
