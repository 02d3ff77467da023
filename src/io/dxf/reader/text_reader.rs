//! DXF ASCII text reader

use super::stream_reader::{DxfCodePair, DxfStreamReader};
use crate::error::{DxfError, Result};
use crate::io::dxf::code_page;
use encoding_rs::Encoding;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};

/// DXF ASCII text file reader
pub struct DxfTextReader<R: Read + Seek> {
    reader: BufReader<R>,
    line_number: usize,
    pushed_back: Option<DxfCodePair>,
    /// Non-UTF8 fallback encoding.  `None` means Latin-1.
    encoding: Option<&'static Encoding>,
    buffer: Vec<u8>,
}

impl<R: Read + Seek> DxfTextReader<R> {
    /// Create a new DXF text reader
    pub fn new(reader: BufReader<R>) -> Self {
        Self {
            reader,
            line_number: 0,
            pushed_back: None,
            encoding: None,
            buffer: Vec::with_capacity(64),
        }
    }

    /// Read one line, without its terminator and surrounding whitespace
    fn read_line(&mut self) -> Result<Option<String>> {
        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let line = code_page::decode(&self.buffer, self.encoding);
        Ok(Some(line.trim().to_string()))
    }

    fn read_pair_internal(&mut self) -> Result<Option<DxfCodePair>> {
        let code_line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };

        let code = code_line.parse::<i32>().map_err(|_| {
            DxfError::Parse(format!(
                "Invalid DXF code at line {}: '{}'",
                self.line_number, code_line
            ))
        })?;

        let value_line = match self.read_line()? {
            Some(line) => line,
            None => {
                return Err(DxfError::Parse(format!(
                    "Unexpected EOF after code {} at line {}",
                    code, self.line_number
                )))
            }
        };

        Ok(Some(DxfCodePair::new(code, unescape(&value_line))))
    }
}

/// Decode the caret escapes AutoCAD writes for control characters
fn unescape(value: &str) -> String {
    if !value.contains('^') {
        return value.to_string();
    }
    value
        .replace("^J", "\n")
        .replace("^M", "\r")
        .replace("^I", "\t")
        .replace("^ ", "^")
}

impl<R: Read + Seek> DxfStreamReader for DxfTextReader<R> {
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>> {
        if let Some(pair) = self.pushed_back.take() {
            return Ok(Some(pair));
        }
        self.read_pair_internal()
    }

    fn push_back(&mut self, pair: DxfCodePair) {
        self.pushed_back = Some(pair);
    }

    fn reset(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        self.line_number = 0;
        self.pushed_back = None;
        Ok(())
    }

    fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }
}
