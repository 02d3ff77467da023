//! DXF stream reader trait and common types

use crate::error::Result;
use crate::io::dxf::group_code_value::{coordinate_axis, GroupCodeValueType};
use crate::types::Vector3;
use encoding_rs::Encoding;

/// A DXF code/value pair
#[derive(Debug, Clone)]
pub struct DxfCodePair {
    /// The DXF group code
    pub code: i32,

    /// The value type implied by the code
    pub value_type: GroupCodeValueType,

    /// String representation of the value
    pub value_string: String,

    /// Integer value (if applicable)
    pub value_int: Option<i64>,

    /// Floating-point value (if applicable)
    pub value_double: Option<f64>,
}

impl DxfCodePair {
    /// Create a pair from its textual value, parsing it by the code's type
    pub fn new(code: i32, value_string: String) -> Self {
        let value_type = GroupCodeValueType::from_code(code);
        let trimmed = value_string.trim();

        let value_int = match value_type {
            t if t.is_integer() => trimmed.parse::<i64>().ok(),
            GroupCodeValueType::Bool => trimmed.parse::<i64>().ok(),
            _ => None,
        };

        let value_double = match value_type {
            GroupCodeValueType::Double => trimmed.parse::<f64>().ok(),
            _ => None,
        };

        Self {
            code,
            value_type,
            value_string,
            value_int,
            value_double,
        }
    }

    /// Pair holding an already-decoded floating-point value
    pub fn from_double(code: i32, value: f64) -> Self {
        Self {
            code,
            value_type: GroupCodeValueType::from_code(code),
            value_string: value.to_string(),
            value_int: None,
            value_double: Some(value),
        }
    }

    /// Pair holding an already-decoded integer (or boolean) value
    pub fn from_int(code: i32, value: i64) -> Self {
        Self {
            code,
            value_type: GroupCodeValueType::from_code(code),
            value_string: value.to_string(),
            value_int: Some(value),
            value_double: None,
        }
    }

    /// Does this pair start a record named `name`?
    pub fn is_start(&self, name: &str) -> bool {
        self.code == 0 && self.value_string == name
    }

    pub fn as_int(&self) -> Option<i64> {
        self.value_int
    }

    pub fn as_i16(&self) -> Option<i16> {
        self.value_int.and_then(|v| i16::try_from(v).ok())
    }

    pub fn as_double(&self) -> Option<f64> {
        self.value_double
    }
}

/// Trait for reading DXF code/value pairs from a stream
pub trait DxfStreamReader {
    /// Read the next code/value pair, `None` at end of stream
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>>;

    /// Push a pair back to be read again on next read_pair call
    fn push_back(&mut self, pair: DxfCodePair);

    /// Reset the reader to the first pair
    fn reset(&mut self) -> Result<()>;

    /// Encoding for values that are not valid UTF-8
    fn set_encoding(&mut self, encoding: &'static Encoding);
}

/// Accumulates one point of an entity from its 1x/2x/3x coordinate codes
pub struct PointReader {
    slot: usize,
    coords: [Option<f64>; 3],
}

impl PointReader {
    /// Reader for the point whose codes end in `slot` (0 for 10/20/30,
    /// 1 for 11/21/31, ...)
    pub fn new(slot: usize) -> Self {
        Self {
            slot,
            coords: [None; 3],
        }
    }

    /// Take the pair's value if it is a coordinate of this point
    pub fn add_coordinate(&mut self, pair: &DxfCodePair) -> bool {
        match (coordinate_axis(pair.code), pair.as_double()) {
            (Some((axis, slot)), Some(value)) if slot == self.slot => {
                self.coords[axis] = Some(value);
                true
            }
            _ => false,
        }
    }

    /// Whether any coordinate has been seen
    pub fn has_value(&self) -> bool {
        self.coords.iter().any(Option::is_some)
    }

    /// The point, with missing coordinates as 0
    pub fn get_point(&self) -> Vector3 {
        Vector3::new(
            self.coords[0].unwrap_or(0.0),
            self.coords[1].unwrap_or(0.0),
            self.coords[2].unwrap_or(0.0),
        )
    }
}
