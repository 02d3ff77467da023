//! Error types for dxf-script

use std::io;
use thiserror::Error;

/// Main error type for dxf-script operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred while reading the drawing or writing the script
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error parsing the DXF group-code stream
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid file format
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Encoding error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for dxf-script operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DxfError::Parse("Invalid DXF code at line 3: 'abc'".to_string());
        assert_eq!(err.to_string(), "Parse error: Invalid DXF code at line 3: 'abc'");
    }

    #[test]
    fn test_invalid_format_display() {
        let err = DxfError::InvalidFormat("missing binary DXF sentinel".to_string());
        assert_eq!(err.to_string(), "Invalid file format: missing binary DXF sentinel");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let dxf_err: DxfError = io_err.into();
        assert!(matches!(dxf_err, DxfError::Io(_)));
    }

    #[test]
    fn test_from_str() {
        let err: DxfError = "broken".into();
        assert!(matches!(err, DxfError::Custom(ref m) if m == "broken"));
    }
}
