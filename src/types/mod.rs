//! Basic value types shared by the decoder and the script adapter

mod vector;
mod version;

pub use vector::Vector3;
pub use version::DxfVersion;
