//! Drawing input.
//!
//! The DXF decoder plays the producer role of the capability interface: it
//! reads a drawing and calls a [`CreationInterface`](crate::creation::CreationInterface)
//! for each entity it recognizes.

pub mod dxf;

pub use dxf::{DxfReader, DxfReaderConfiguration};
