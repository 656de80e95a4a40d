//! Error types for dxfcore library

use std::io;
use thiserror::Error;

/// Main error type for dxfcore operations.
///
/// The grammar-error variants carry a `line` — the 1-based line number in
/// the source text where the problem was detected — since the wire format
/// is line-oriented and a byte offset would tell a caller less.
#[derive(Debug, Error)]
pub enum DxfError {
    /// I/O failure reading or writing the underlying stream.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A code/value pair was syntactically malformed (non-integer code line,
    /// a value line that doesn't match its code's value family, ...).
    #[error("malformed pair at line {line}: {detail}")]
    BadPair {
        /// Line number where the bad pair starts.
        line: usize,
        /// What was wrong with it.
        detail: String,
    },

    /// A group code appeared where the current grammar state forbids it, or
    /// a required code was missing.
    #[error("unexpected code {code} at line {line}: {detail}")]
    UnexpectedCode {
        /// The offending group code.
        code: i32,
        /// Line number of the offending pair.
        line: usize,
        /// What was expected instead.
        detail: String,
    },

    /// The stream ended while a section, block or entity was still open.
    #[error("unexpected end of file at line {line} ({context})")]
    UnexpectedEof {
        /// Line number at which the stream ran out.
        line: usize,
        /// What was being parsed when it did.
        context: String,
    },

    /// `$ACADVER` named something this crate cannot represent, or a save
    /// was requested with [`crate::types::DxfVersion::Unknown`] as the target.
    #[error("unrecognized or unsupported DXF version: {0:?}")]
    UnknownVersion(String),

    /// A structural invariant was violated (e.g. `BLOCK` with no matching
    /// `ENDBLK` before the section or file ends).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// Generic error with a free-form message, for decoder-local context
    /// that doesn't fit one of the structured variants above.
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for dxfcore operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DxfError::UnknownVersion("AC1009".to_string());
        assert_eq!(err.to_string(), "unrecognized or unsupported DXF version: \"AC1009\"");
    }

    #[test]
    fn test_bad_pair_display() {
        let err = DxfError::BadPair { line: 12, detail: "non-numeric code".into() };
        assert!(err.to_string().contains("line 12"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let dxf_err: DxfError = io_err.into();
        assert!(matches!(dxf_err, DxfError::Io(_)));
    }
}
