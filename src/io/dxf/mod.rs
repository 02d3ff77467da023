//! DXF (Drawing Exchange Format) reading, ASCII and binary

pub mod code_page;
mod group_code_value;
mod reader;

pub use group_code_value::{coordinate_axis, GroupCodeValueType};
pub use reader::{
    DxfBinaryReader, DxfCodePair, DxfReader, DxfReaderConfiguration, DxfStreamReader,
    DxfTextReader, PointReader, BINARY_DXF_SENTINEL,
};
