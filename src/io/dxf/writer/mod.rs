//! DXF writer module

mod stream_writer;
mod text_writer;
mod section_writer;

pub use stream_writer::{DxfStreamWriter, DxfStreamWriterExt, value_type_for_code};
pub use text_writer::DxfTextWriter;
pub use section_writer::SectionWriter;

use crate::document::CadDocument;
use crate::entities::EntityType;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// DXF file writer
pub struct DxfWriter {
    document: CadDocument,
}

impl DxfWriter {
    /// Create a new DXF writer
    pub fn new(document: CadDocument) -> Self {
        Self { document }
    }

    /// Write to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.write_to_writer(writer)
    }

    /// Write to any writer
    pub fn write_to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut stream_writer = DxfTextWriter::new(writer);
        self.write_dxf(&mut stream_writer)?;
        stream_writer.flush()?;
        Ok(())
    }

    /// Write to a byte vector (useful for testing)
    pub fn write_to_vec(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to_writer(&mut buffer)?;
        Ok(buffer)
    }

    /// Write DXF content to a stream writer
    fn write_dxf<W: DxfStreamWriter>(&self, writer: &mut W) -> Result<()> {
        let handle_seed = self.document.next_handle() + count_extra_handles(&self.document);
        let mut section_writer = SectionWriter::new(writer, handle_seed, self.document.version);

        // Write all sections. CLASSES/OBJECTS only exist from R13 (AC1012)
        // onward; THUMBNAILIMAGE is always optional.
        section_writer.write_header(&self.document)?;
        if self.document.version.supports_classes_and_objects() {
            section_writer.write_classes(&self.document)?;
        }
        section_writer.write_tables(&self.document)?;
        section_writer.write_blocks(&self.document)?;
        section_writer.write_entities(&self.document)?;
        if self.document.version.supports_classes_and_objects() {
            section_writer.write_objects(&self.document)?;
        }
        if self.document.thumbnail.is_some() {
            section_writer.write_thumbnail(&self.document)?;
        }

        // Write EOF
        writer.write_string(0, "EOF")?;

        Ok(())
    }

    /// Get a reference to the document
    pub fn document(&self) -> &CadDocument {
        &self.document
    }
}

fn count_extra_handles(document: &CadDocument) -> u64 {
    let mut count = 0u64;

    // Root dictionary in OBJECTS
    count += 1;

    for entity in document.entities() {
        match entity {
            EntityType::Polyline3D(polyline) => {
                for vertex in &polyline.vertices {
                    if vertex.handle.is_null() {
                        count += 1;
                    }
                }
                // SEQEND always written
                count += 1;
            }
            EntityType::PolyfaceMesh(mesh) => {
                for vertex in &mesh.vertices {
                    if vertex.common.handle.is_null() {
                        count += 1;
                    }
                }
                for face in &mesh.faces {
                    if face.common.handle.is_null() {
                        count += 1;
                    }
                }
                if mesh.seqend_handle.is_none() {
                    count += 1;
                }
            }
            _ => {}
        }
    }

    count
}

/// Convenience function to write a document to a file
pub fn write_dxf<P: AsRef<Path>>(document: &CadDocument, path: P) -> Result<()> {
    // Clone the document for writing
    let writer = DxfWriter::new(document.clone());
    writer.write_to_file(path)
}

