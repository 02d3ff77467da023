//! Destinations for emitted call records

use super::record::{CallRecord, ScriptFormat};
use crate::error::Result;
use std::io::{self, Write};
use tracing::warn;

/// Receiver of call records.
///
/// `emit` has no error channel: a sink that can fail keeps the failure to
/// itself and reports it through its own API.
pub trait RecordSink {
    fn emit(&mut self, record: CallRecord);
}

/// Keeps records in memory, in emission order.
impl RecordSink for Vec<CallRecord> {
    fn emit(&mut self, record: CallRecord) {
        self.push(record);
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn emit(&mut self, record: CallRecord) {
        (**self).emit(record)
    }
}

/// Writes each record as one line of script text.
///
/// The first write failure is kept and every later record is dropped;
/// [`finish`](ScriptWriter::finish) reports it.
pub struct ScriptWriter<W: Write> {
    writer: W,
    format: ScriptFormat,
    lines_written: usize,
    error: Option<io::Error>,
}

impl<W: Write> ScriptWriter<W> {
    /// Create a writer using the default number format
    pub fn new(writer: W) -> Self {
        Self::with_format(writer, ScriptFormat::default())
    }

    pub fn with_format(writer: W, format: ScriptFormat) -> Self {
        Self {
            writer,
            format,
            lines_written: 0,
            error: None,
        }
    }

    /// Number of lines written successfully
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Whether a write has failed
    pub fn has_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Flush and return the underlying writer, or the first write failure
    pub fn finish(mut self) -> Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e.into());
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> RecordSink for ScriptWriter<W> {
    fn emit(&mut self, record: CallRecord) {
        if self.error.is_some() {
            return;
        }

        let line = record.render(&self.format);
        match writeln!(self.writer, "{}", line) {
            Ok(()) => self.lines_written += 1,
            Err(e) => {
                warn!(line = self.lines_written + 1, error = %e, "script write failed, dropping remaining records");
                self.error = Some(e);
            }
        }
    }
}
