//! Drawing preview/thumbnail image data (the `THUMBNAILIMAGE` section).
//!
//! Stores the thumbnail information to generate the preview for a CAD document.

/// Type of media stored in the preview image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PreviewType {
    /// Unknown or unsupported preview format.
    Unknown = 0,
    /// BMP bitmap image.
    Bmp = 2,
    /// Windows Metafile (WMF) image.
    Wmf = 3,
    /// PNG image.
    Png = 6,
}

impl PreviewType {
    /// Create from a raw byte code.
    pub fn from_code(code: u8) -> Self {
        match code {
            2 => Self::Bmp,
            3 => Self::Wmf,
            6 => Self::Png,
            _ => Self::Unknown,
        }
    }
}

/// Preview/thumbnail image data from a drawing file.
///
/// Corresponds to the `THUMBNAILIMAGE` DXF section.
#[derive(Debug, Clone)]
pub struct ThumbnailImage {
    /// Code that specifies the type of media stored in the preview.
    pub code: PreviewType,
    /// Raw header bytes for the preview section.
    ///
    /// Usually formed by an empty array of 80 zeros.
    pub raw_header: Vec<u8>,
    /// Raw image bytes conforming the thumbnail.
    pub raw_image: Vec<u8>,
}

impl Default for ThumbnailImage {
    fn default() -> Self {
        Self {
            code: PreviewType::Unknown,
            raw_header: Vec::new(),
            raw_image: Vec::new(),
        }
    }
}

impl ThumbnailImage {
    /// Create a new preview with the given data.
    pub fn new(code: PreviewType, raw_header: Vec<u8>, raw_image: Vec<u8>) -> Self {
        Self {
            code,
            raw_header,
            raw_image,
        }
    }

    /// Returns `true` if the preview is empty (no image data).
    pub fn is_empty(&self) -> bool {
        self.raw_image.is_empty()
    }
}
