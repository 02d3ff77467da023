//! DXF file reader

mod binary_reader;
mod section_reader;
mod stream_reader;
mod text_reader;

pub use binary_reader::{DxfBinaryReader, BINARY_DXF_SENTINEL};
pub use stream_reader::{DxfCodePair, DxfStreamReader, PointReader};
pub use text_reader::DxfTextReader;

use section_reader::SectionReader;

use crate::creation::CreationInterface;
use crate::error::Result;
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::DxfVersion;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, warn};

/// Configuration for the DXF reader.
#[derive(Debug, Clone, Default)]
pub struct DxfReaderConfiguration {
    /// When `true`, an error inside a section is recorded as a notification
    /// and the reader resumes after that section instead of aborting.
    ///
    /// Default: `false` (strict mode, errors propagate).
    pub failsafe: bool,

    /// When `true`, entities inside BLOCKS definitions are reported too,
    /// before those of the ENTITIES section.
    ///
    /// Default: `false`.
    pub read_blocks: bool,
}

impl DxfReaderConfiguration {
    pub fn failsafe(mut self, failsafe: bool) -> Self {
        self.failsafe = failsafe;
        self
    }

    pub fn read_blocks(mut self, read_blocks: bool) -> Self {
        self.read_blocks = read_blocks;
        self
    }
}

/// DXF file reader.
///
/// Decodes the drawing in one sequential pass and pushes every recognized
/// entity into a [`CreationInterface`], in file order.
pub struct DxfReader {
    reader: Box<dyn DxfStreamReader>,
    binary: bool,
    version: DxfVersion,
    config: DxfReaderConfiguration,
}

impl DxfReader {
    /// Create a new DXF reader from any seekable byte source
    pub fn from_reader<R: Read + Seek + 'static>(reader: R) -> Result<Self> {
        let mut buf_reader = BufReader::new(reader);
        let binary = Self::is_binary(&mut buf_reader)?;

        let reader: Box<dyn DxfStreamReader> = if binary {
            Box::new(DxfBinaryReader::new(buf_reader)?)
        } else {
            Box::new(DxfTextReader::new(buf_reader))
        };
        debug!(binary, "opened DXF stream");

        Ok(Self {
            reader,
            binary,
            version: DxfVersion::Unknown,
            config: DxfReaderConfiguration::default(),
        })
    }

    /// Create a new DXF reader from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "reading DXF file");
        Self::from_reader(file)
    }

    /// Check if a stream contains binary DXF data, leaving it at the start
    fn is_binary<R: Read + Seek>(reader: &mut R) -> Result<bool> {
        let mut buffer = [0u8; 22];
        let mut filled = 0;
        while filled < buffer.len() {
            match reader.read(&mut buffer[filled..])? {
                0 => break,
                n => filled += n,
            }
        }
        reader.seek(SeekFrom::Start(0))?;

        Ok(filled == buffer.len() && buffer[..] == *BINARY_DXF_SENTINEL)
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: DxfReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Whether the stream is a binary DXF
    pub fn is_binary_stream(&self) -> bool {
        self.binary
    }

    /// Drawing version from `$ACADVER`; known after [`read`](Self::read) starts
    pub fn version(&self) -> DxfVersion {
        self.version
    }

    /// Decode the drawing, notifying `consumer` of every entity.
    ///
    /// Returns the non-fatal findings of the pass.
    pub fn read<C: CreationInterface + ?Sized>(
        &mut self,
        consumer: &mut C,
    ) -> Result<NotificationCollection> {
        self.read_version()?;

        let mut notifications = NotificationCollection::new();
        let failsafe = self.config.failsafe;

        while let Some(pair) = self.reader.read_pair()? {
            if pair.is_start("EOF") {
                break;
            }
            if !pair.is_start("SECTION") {
                continue;
            }

            let section_name = match self.reader.read_pair()? {
                Some(name_pair) if name_pair.code == 2 => name_pair.value_string,
                Some(other) => {
                    self.reader.push_back(other);
                    continue;
                }
                None => break,
            };
            debug!(section = %section_name, "reading section");

            let read_blocks = self.config.read_blocks;
            let mut section = SectionReader::new(&mut self.reader, &mut notifications);
            let result = match section_name.as_str() {
                "ENTITIES" => section.read_entities(consumer),
                "BLOCKS" if read_blocks => section.read_blocks(consumer),
                _ => section.skip_section(),
            };

            if let Err(e) = result {
                if !failsafe {
                    return Err(e);
                }
                warn!(section = %section_name, error = %e, "recovering from section error");
                notifications.notify(
                    NotificationType::Error,
                    format!("Error reading {} section: {}", section_name, e),
                );
                // Best effort: the stream may be unreadable past the error
                let _ = SectionReader::new(&mut self.reader, &mut notifications).skip_section();
            }
        }

        debug!(notifications = notifications.len(), "finished reading DXF");
        Ok(notifications)
    }

    /// Pre-scan the HEADER section for $ACADVER and $DWGCODEPAGE.
    ///
    /// After this call the reader is reset to the beginning and
    /// `self.version` is populated.  For drawings older than AC1021 the
    /// code page selects the fallback encoding for non-UTF-8 text.
    fn read_version(&mut self) -> Result<()> {
        self.reader.reset()?;
        self.version = DxfVersion::Unknown;

        let code_page = match self.scan_header() {
            Ok(code_page) => code_page,
            // The section loop reports the same error as a notification
            Err(e) if self.config.failsafe => {
                warn!(error = %e, "header scan failed");
                None
            }
            Err(e) => return Err(e),
        };
        debug!(version = %self.version, code_page = ?code_page, "header scanned");

        if !self.version.is_utf8() {
            if let Some(enc) = code_page
                .as_deref()
                .and_then(crate::io::dxf::code_page::encoding_from_code_page)
            {
                self.reader.set_encoding(enc);
            }
        }

        self.reader.reset()
    }

    /// Read the header variables, if the drawing opens with a HEADER section
    fn scan_header(&mut self) -> Result<Option<String>> {
        let first = loop {
            match self.reader.read_pair()? {
                Some(pair) if pair.code == 999 => continue,
                other => break other,
            }
        };
        if !matches!(first, Some(ref pair) if pair.is_start("SECTION")) {
            return Ok(None);
        }
        match self.reader.read_pair()? {
            Some(pair) if pair.code == 2 && pair.value_string == "HEADER" => {}
            _ => return Ok(None),
        }

        let mut code_page = None;
        while let Some(pair) = self.reader.read_pair()? {
            if pair.is_start("ENDSEC") || pair.is_start("EOF") {
                break;
            }
            if pair.code != 9 {
                continue;
            }
            match pair.value_string.as_str() {
                "$ACADVER" => {
                    if let Some(vp) = self.reader.read_pair()? {
                        self.version = DxfVersion::from_version_string(&vp.value_string);
                    }
                }
                "$DWGCODEPAGE" => {
                    if let Some(cp) = self.reader.read_pair()? {
                        code_page = Some(cp.value_string);
                    }
                }
                _ => {}
            }
        }
        Ok(code_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Entity;
    use std::io::Cursor;

    const MINIMAL: &str = "0\nSECTION\n2\nHEADER\n9\n$ACADVER\n1\nAC1015\n0\nENDSEC\n\
                           0\nSECTION\n2\nENTITIES\n0\nCIRCLE\n10\n1\n20\n2\n30\n0\n40\n3\n0\nENDSEC\n0\nEOF\n";

    #[test]
    fn test_read_minimal() {
        let mut reader = DxfReader::from_reader(Cursor::new(MINIMAL.as_bytes().to_vec())).unwrap();
        assert!(!reader.is_binary_stream());

        let mut entities: Vec<Entity> = Vec::new();
        let notes = reader.read(&mut entities).unwrap();

        assert_eq!(reader.version(), DxfVersion::AC1015);
        assert_eq!(entities.len(), 1);
        assert!(notes.is_empty());
    }

    #[test]
    fn test_repeated_read_keeps_version() {
        let mut reader = DxfReader::from_reader(Cursor::new(MINIMAL.as_bytes().to_vec())).unwrap();

        let mut first: Vec<Entity> = Vec::new();
        reader.read(&mut first).unwrap();
        assert_eq!(reader.version(), DxfVersion::AC1015);

        let mut second: Vec<Entity> = Vec::new();
        reader.read(&mut second).unwrap();
        assert_eq!(reader.version(), DxfVersion::AC1015);
        assert_eq!(first, second);
    }

    #[test]
    fn test_headerless_drawing_has_unknown_version() {
        let data = "0\nSECTION\n2\nENTITIES\n0\nCIRCLE\n40\n1\n0\nENDSEC\n0\nEOF\n";
        let mut reader = DxfReader::from_reader(Cursor::new(data.as_bytes().to_vec())).unwrap();
        let mut entities: Vec<Entity> = Vec::new();
        reader.read(&mut entities).unwrap();

        assert_eq!(reader.version(), DxfVersion::Unknown);
        assert_eq!(entities.len(), 1);
    }

    #[test]
    fn test_short_stream_is_text() {
        let reader = DxfReader::from_reader(Cursor::new(b"0\nEOF\n".to_vec())).unwrap();
        assert!(!reader.is_binary_stream());
    }

    #[test]
    fn test_strict_mode_propagates_errors() {
        let data = "0\nSECTION\n2\nENTITIES\n0\nLINE\nxx\n1\n0\nENDSEC\n0\nEOF\n";
        let mut reader = DxfReader::from_reader(Cursor::new(data.as_bytes().to_vec())).unwrap();
        let mut entities: Vec<Entity> = Vec::new();
        assert!(reader.read(&mut entities).is_err());
    }

    #[test]
    fn test_blocks_skipped_by_default() {
        let data = "0\nSECTION\n2\nBLOCKS\n0\nBLOCK\n2\nB\n0\nLINE\n0\nENDBLK\n0\nENDSEC\n0\nEOF\n";

        let mut entities: Vec<Entity> = Vec::new();
        DxfReader::from_reader(Cursor::new(data.as_bytes().to_vec()))
            .unwrap()
            .read(&mut entities)
            .unwrap();
        assert!(entities.is_empty());

        let mut reader = DxfReader::from_reader(Cursor::new(data.as_bytes().to_vec()))
            .unwrap()
            .with_configuration(DxfReaderConfiguration::default().read_blocks(true));
        reader.read(&mut entities).unwrap();
        assert_eq!(entities.len(), 1);
    }
}
