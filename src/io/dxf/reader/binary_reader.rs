//! Binary DXF reader

use super::stream_reader::{DxfCodePair, DxfStreamReader};
use crate::error::{DxfError, Result};
use crate::io::dxf::code_page;
use crate::io::dxf::group_code_value::GroupCodeValueType;
use byteorder::{LittleEndian, ReadBytesExt};
use encoding_rs::Encoding;
use std::fmt::Write as _;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};

/// Binary DXF sentinel
pub const BINARY_DXF_SENTINEL: &[u8] = b"AutoCAD Binary DXF\r\n\x1a\x00";

/// Width of the group code field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodeWidth {
    /// R12 and earlier: one byte, 255 escapes to a 16-bit code
    Byte,
    /// R13 and later: 16-bit little-endian
    Word,
}

/// Binary DXF stream reader
pub struct DxfBinaryReader<R: Read + Seek> {
    reader: BufReader<R>,
    code_width: CodeWidth,
    pushed_back: Option<DxfCodePair>,
    encoding: Option<&'static Encoding>,
}

impl<R: Read + Seek> DxfBinaryReader<R> {
    /// Create a reader over a stream that starts with the binary sentinel
    pub fn new(mut reader: BufReader<R>) -> Result<Self> {
        reader.seek(SeekFrom::Start(0))?;

        let mut sentinel = [0u8; 22];
        reader.read_exact(&mut sentinel)?;
        if sentinel != BINARY_DXF_SENTINEL {
            return Err(DxfError::InvalidFormat("missing binary DXF sentinel".to_string()));
        }

        // The first pair is always (0, "SECTION"): with 16-bit codes the
        // byte after the sentinel's code byte is the code's high byte (0),
        // with 8-bit codes it is already the 'S' of the value.
        let code_width = match reader.fill_buf()? {
            [_, 0, ..] => CodeWidth::Word,
            _ => CodeWidth::Byte,
        };

        Ok(Self {
            reader,
            code_width,
            pushed_back: None,
            encoding: None,
        })
    }

    fn read_code(&mut self) -> Result<Option<i32>> {
        let first = match self.reader.read_u8() {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let code = match self.code_width {
            CodeWidth::Word => i16::from_le_bytes([first, self.reader.read_u8()?]) as i32,
            CodeWidth::Byte if first == 255 => self.reader.read_i16::<LittleEndian>()? as i32,
            CodeWidth::Byte => first as i32,
        };
        Ok(Some(code))
    }

    fn read_string(&mut self) -> Result<String> {
        let mut bytes = Vec::new();
        self.reader.read_until(0, &mut bytes)?;
        if bytes.last() != Some(&0) {
            return Err(DxfError::Parse("unterminated string in binary DXF".to_string()));
        }
        bytes.pop();
        Ok(code_page::decode(&bytes, self.encoding))
    }

    /// Binary chunks are exposed as upper-case hex, like their text form
    fn read_binary_chunk(&mut self) -> Result<String> {
        let len = self.reader.read_u8()? as usize;
        let mut data = vec![0u8; len];
        self.reader.read_exact(&mut data)?;

        let mut hex = String::with_capacity(len * 2);
        for byte in data {
            let _ = write!(hex, "{:02X}", byte);
        }
        Ok(hex)
    }

    fn read_pair_internal(&mut self) -> Result<Option<DxfCodePair>> {
        let code = match self.read_code()? {
            Some(code) => code,
            None => return Ok(None),
        };

        let pair = match GroupCodeValueType::from_code(code) {
            GroupCodeValueType::String => DxfCodePair::new(code, self.read_string()?),
            GroupCodeValueType::Binary => DxfCodePair::new(code, self.read_binary_chunk()?),
            GroupCodeValueType::Double => {
                DxfCodePair::from_double(code, self.reader.read_f64::<LittleEndian>()?)
            }
            GroupCodeValueType::Int16 => {
                DxfCodePair::from_int(code, self.reader.read_i16::<LittleEndian>()? as i64)
            }
            GroupCodeValueType::Int32 => {
                DxfCodePair::from_int(code, self.reader.read_i32::<LittleEndian>()? as i64)
            }
            GroupCodeValueType::Int64 => {
                DxfCodePair::from_int(code, self.reader.read_i64::<LittleEndian>()?)
            }
            GroupCodeValueType::Bool => DxfCodePair::from_int(code, self.reader.read_u8()? as i64),
        };
        Ok(Some(pair))
    }
}

impl<R: Read + Seek> DxfStreamReader for DxfBinaryReader<R> {
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
        self.reader
            .seek(SeekFrom::Start(BINARY_DXF_SENTINEL.len() as u64))?;
        self.pushed_back = None;
        Ok(())
    }

    fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }
}
