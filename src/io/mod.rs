//! I/O module for reading and writing DXF drawing files

pub mod dxf;

pub use dxf::{DxfReader, DxfWriter};

