//! Value types of DXF group codes

/// Storage type of the value that follows a group code.
///
/// ASCII files store every value as a text line; binary files store it in
/// the width given here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupCodeValueType {
    String,
    Double,
    Int16,
    Int32,
    Int64,
    Bool,
    /// Length-prefixed binary chunk
    Binary,
}

impl GroupCodeValueType {
    /// Value type for a group code, per the DXF reference ranges
    pub fn from_code(code: i32) -> Self {
        use GroupCodeValueType::*;

        match code {
            10..=59 | 110..=149 | 210..=239 | 460..=469 | 1010..=1059 => Double,
            60..=79 | 170..=179 | 270..=289 | 370..=389 | 400..=409 | 1060..=1070 => Int16,
            90..=99 | 420..=429 | 440..=459 | 1071 => Int32,
            160..=169 => Int64,
            290..=299 => Bool,
            310..=319 | 1004 => Binary,
            _ => String,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Int16 | Self::Int32 | Self::Int64)
    }
}

/// Axis (0 = x, 1 = y, 2 = z) and point slot of a primary coordinate code.
///
/// Codes 10-18 carry x, 20-28 y and 30-38 z; the last digit selects which
/// point of the entity the coordinate belongs to (10/20/30 vs 11/21/31).
pub fn coordinate_axis(code: i32) -> Option<(usize, usize)> {
    match code {
        10..=38 if code % 10 != 9 => Some(((code / 10 - 1) as usize, (code % 10) as usize)),
        _ => None,
    }
}
