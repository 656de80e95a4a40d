//! DXF (Drawing Exchange Format) reading and writing

mod code_page;
mod dxf_code;
mod group_code_value;
mod reader;
mod writer;

pub use dxf_code::DxfCode;
pub use group_code_value::GroupCodeValueType;
pub use reader::DxfReader;
pub use writer::{DxfWriter, DxfStreamWriter, DxfStreamWriterExt, DxfTextWriter, SectionWriter};
pub use writer::{write_dxf, value_type_for_code};


