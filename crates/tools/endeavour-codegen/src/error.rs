//! Error types for the code generators.

use std::fmt;
use std::io;

/// Errors that can occur during code generation.
#[derive(Debug)]
pub enum CodegenError {
    /// I/O error writing generated output.
    Io(io::Error),
    /// Word size must be at least one byte.
    InvalidWordSize(usize),
    /// An `ENCODING` line whose value is not a decimal integer.
    InvalidEncoding {
        /// 1-based line number in the font file.
        line: usize,
        /// The offending (trimmed) line.
        text: String,
    },
    /// A row inside a `BITMAP` block that is not hexadecimal.
    InvalidBitmapRow {
        /// 1-based line number in the font file.
        line: usize,
        /// The offending (trimmed) line.
        text: String,
    },
    /// A glyph in the emitted range does not have the expected row count.
    GlyphHeight {
        /// Encoding of the offending glyph.
        encoding: i64,
        /// Number of rows actually present.
        rows: usize,
        /// Number of rows required.
        expected: usize,
    },
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidWordSize(size) => {
                write!(f, "invalid word size {size}: must be at least 1 byte")
            }
            Self::InvalidEncoding { line, text } => {
                write!(f, "line {line}: invalid encoding in {text:?}")
            }
            Self::InvalidBitmapRow { line, text } => {
                write!(f, "line {line}: invalid bitmap row {text:?}")
            }
            Self::GlyphHeight {
                encoding,
                rows,
                expected,
            } => write!(
                f,
                "glyph {encoding} has {rows} rows, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for CodegenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodegenError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
