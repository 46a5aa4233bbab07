//! Binary image to hexadecimal word dump.
//!
//! The input is zero-padded to a whole number of words, then each word is
//! read little-endian (first byte is least significant) and printed as
//! uppercase hex with exactly two digits per byte.
//!
//! ```
//! use endeavour_codegen::wordhex;
//!
//! let words = wordhex::dump_words(&[0x01, 0x02, 0x03], 4).unwrap();
//! assert_eq!(words, ["00030201"]);
//! ```

use std::fmt::Write as _;
use std::io::Write;

use crate::error::CodegenError;

/// Number of zero bytes needed to round `len` up to a multiple of `word_size`.
///
/// `word_size` must be non-zero.
#[must_use]
pub fn padding_len(len: usize, word_size: usize) -> usize {
    (word_size - len % word_size) % word_size
}

/// Returns a copy of `bytes` with zero padding appended to a whole word.
#[must_use]
pub fn pad(bytes: &[u8], word_size: usize) -> Vec<u8> {
    let mut padded = Vec::with_capacity(bytes.len() + word_size);
    padded.extend_from_slice(bytes);
    padded.resize(bytes.len() + padding_len(bytes.len(), word_size), 0);
    padded
}

/// Formats one little-endian word as uppercase hex, two digits per byte.
///
/// The most significant byte is the last one in `chunk`, so it is printed
/// first. Any chunk width is supported.
#[must_use]
pub fn format_word(chunk: &[u8]) -> String {
    let mut s = String::with_capacity(chunk.len() * 2);
    for byte in chunk.iter().rev() {
        // Writing into a String cannot fail.
        let _ = write!(s, "{byte:02X}");
    }
    s
}

fn check_word_size(word_size: usize) -> Result<(), CodegenError> {
    if word_size == 0 {
        return Err(CodegenError::InvalidWordSize(word_size));
    }
    Ok(())
}

/// Pads `bytes` and formats every word, preserving order.
///
/// An empty input yields no words.
pub fn dump_words(bytes: &[u8], word_size: usize) -> Result<Vec<String>, CodegenError> {
    check_word_size(word_size)?;
    let padded = pad(bytes, word_size);
    debug_assert_eq!(padded.len() % word_size, 0);
    Ok(padded.chunks_exact(word_size).map(format_word).collect())
}

/// Writes the word dump to `out`, one word per line.
///
/// Returns the number of lines written.
pub fn write_dump<W: Write>(
    out: &mut W,
    bytes: &[u8],
    word_size: usize,
) -> Result<usize, CodegenError> {
    let words = dump_words(bytes, word_size)?;
    for word in &words {
        writeln!(out, "{word}")?;
    }
    Ok(words.len())
}
