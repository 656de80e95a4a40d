//! # dxfcore
//!
//! A pure Rust library for reading and writing CAD drawing files in the
//! DXF (Drawing Interchange Format) group-code/value wire format.
//!
//! ## Features
//!
//! - Read and write ASCII DXF files, both physical line framings
//! - Support for 30+ entity types
//! - Complete table system (Layers, LineTypes, Blocks, TextStyles, DimensionStyles)
//! - Extended data (XData) support
//! - Multiple DXF versions (R12 through 2018+)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxfcore::{CadDocument, load_file, save_file, types::DxfVersion};
//!
//! // Read a DXF file
//! let doc = load_file("sample.dxf")?;
//!
//! // Access entities
//! for entity in doc.entities() {
//!     println!("Entity: {:?}", entity);
//! }
//!
//! // Write to DXF, downgrading to a specific version
//! save_file(&doc, "output.dxf", DxfVersion::AC1015)?;
//! # Ok::<(), dxfcore::error::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! The library uses a trait-based design for maximum flexibility:
//!
//! - `CadObject` - Base trait for all CAD objects
//! - `Entity` - Trait for graphical entities
//! - `TableEntry` - Trait for table entries
//! - `CadDocument` - Central document structure

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classes;
pub mod entities;
pub mod error;
pub mod notification;
pub mod preview;
pub mod types;
pub mod tables;
pub mod document;
pub mod io;
pub mod xdata;
pub mod objects;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use types::{
    DxfVersion, BoundingBox2D, BoundingBox3D, Color, Handle, LineWeight, Transparency, Vector2,
    Vector3,
};

// Re-export entity types
pub use entities::{
    Arc, Circle, Ellipse, Entity, EntityType, Line, LwPolyline, MText, Point, Polyline, Spline,
    Text,
};

// Re-export table types
pub use tables::{
    AppId, BlockRecord, DimStyle, Layer, LineType, Table, TableEntry, TextStyle, Ucs, VPort, View,
};

// Re-export document
pub use document::CadDocument;

// Re-export I/O types
pub use io::dxf::{DxfReader, DxfWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Read a complete [`CadDocument`] from a DXF byte stream.
///
/// The target version is taken from the file's own `$ACADVER` header
/// variable; see [`DxfReader::read`] for the full grammar.
pub fn load<R: std::io::Read + std::io::Seek + 'static>(reader: R) -> Result<CadDocument> {
    DxfReader::from_reader(reader)?.read()
}

/// Read a complete [`CadDocument`] from a DXF file path.
pub fn load_file<P: AsRef<std::path::Path>>(path: P) -> Result<CadDocument> {
    DxfReader::from_file(path)?.read()
}

/// Parse a DXF document already held in memory as text.
///
/// Convenience wrapper around [`load`] for callers that already have the
/// full file content as a string.
pub fn parse(text: &str) -> Result<CadDocument> {
    load(std::io::Cursor::new(text.as_bytes().to_vec()))
}

/// Write `document` to a DXF byte stream, targeting `version`.
///
/// The document's own `version` field is overridden for the duration of the
/// write; entities, header variables and subclass markers unsupported by
/// `version` are downgraded or dropped per the per-kind emission rules.
pub fn save<W: std::io::Write>(
    document: &CadDocument,
    writer: W,
    version: types::DxfVersion,
) -> Result<()> {
    if version == types::DxfVersion::Unknown {
        return Err(DxfError::UnknownVersion(version.as_str().to_string()));
    }
    let mut versioned = document.clone();
    versioned.version = version;
    DxfWriter::new(versioned).write_to_writer(writer)
}

/// Write `document` to a DXF file path, targeting `version`.
pub fn save_file<P: AsRef<std::path::Path>>(
    document: &CadDocument,
    path: P,
    version: types::DxfVersion,
) -> Result<()> {
    if version == types::DxfVersion::Unknown {
        return Err(DxfError::UnknownVersion(version.as_str().to_string()));
    }
    let mut versioned = document.clone();
    versioned.version = version;
    DxfWriter::new(versioned).write_to_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_cad_document_creation() {
        let doc = CadDocument::new();
        assert_eq!(doc.version, DxfVersion::AC1032);

        let doc2 = CadDocument::with_version(DxfVersion::AC1015);
        assert_eq!(doc2.version, DxfVersion::AC1015);
    }

    #[test]
    fn save_rejects_unknown_version() {
        let doc = CadDocument::new();
        let mut buf = Vec::new();
        let err = save(&doc, &mut buf, DxfVersion::Unknown).unwrap_err();
        assert!(matches!(err, DxfError::UnknownVersion(_)));
    }
}


