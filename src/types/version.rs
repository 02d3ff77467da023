//! DXF file version ($ACADVER)

use std::fmt;

/// AutoCAD drawing versions as written in the `$ACADVER` header variable.
///
/// Ordering follows release order, so `version < DxfVersion::AC1021` selects
/// drawings that still store text in a code page rather than UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DxfVersion {
    /// Version string missing or not recognized
    #[default]
    Unknown,
    /// R12
    AC1009,
    /// R13
    AC1012,
    /// R14
    AC1014,
    /// 2000
    AC1015,
    /// 2004
    AC1018,
    /// 2007
    AC1021,
    /// 2010
    AC1024,
    /// 2013
    AC1027,
    /// 2018
    AC1032,
}

impl DxfVersion {
    /// Parse a `$ACADVER` value such as `AC1015`
    pub fn from_version_string(s: &str) -> Self {
        match s.trim() {
            "AC1009" => DxfVersion::AC1009,
            "AC1012" => DxfVersion::AC1012,
            "AC1014" => DxfVersion::AC1014,
            "AC1015" => DxfVersion::AC1015,
            "AC1018" => DxfVersion::AC1018,
            "AC1021" => DxfVersion::AC1021,
            "AC1024" => DxfVersion::AC1024,
            "AC1027" => DxfVersion::AC1027,
            "AC1032" => DxfVersion::AC1032,
            _ => DxfVersion::Unknown,
        }
    }

    /// Drawings from AutoCAD 2007 on are always UTF-8
    pub fn is_utf8(&self) -> bool {
        *self >= DxfVersion::AC1021
    }
}

impl fmt::Display for DxfVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
