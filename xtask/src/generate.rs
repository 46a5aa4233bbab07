//! Rendering of single generator outputs.
//!
//! Output is rendered fully into memory before anything is written, so a
//! failing input never leaves a truncated artifact behind.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use endeavour_codegen::charmap::{self, Font, GLYPH_HEIGHT};
use endeavour_codegen::wordhex;

use crate::verbose::{dprintln, vprintln, wprintln};

/// Reads `input` and renders its hex word dump.
pub fn render_hex(input: &Path, word_size: usize) -> Result<Vec<u8>> {
    let bytes =
        std::fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    vprintln!("Read {} bytes from {}", bytes.len(), input.display());

    let mut out = Vec::new();
    let words = wordhex::write_dump(&mut out, &bytes, word_size)
        .with_context(|| format!("Failed to dump {}", input.display()))?;
    vprintln!(
        "  {words} words of {word_size} bytes ({} padding)",
        wordhex::padding_len(bytes.len(), word_size)
    );
    Ok(out)
}

/// Parses the BDF font at `font` and renders its charmap table.
///
/// With `strict`, a glyph in the table range whose height is not
/// [`GLYPH_HEIGHT`] is an error; otherwise it is reported and emitted as is.
pub fn render_charmap(font: &Path, strict: bool) -> Result<Vec<u8>> {
    let text = std::fs::read_to_string(font)
        .with_context(|| format!("Failed to read {}", font.display()))?;
    let parsed =
        Font::parse(&text).with_context(|| format!("Failed to parse {}", font.display()))?;
    vprintln!("Parsed {} glyphs from {}", parsed.len(), font.display());

    if strict {
        parsed
            .validate_heights()
            .with_context(|| format!("Malformed glyph in {}", font.display()))?;
    } else {
        for (encoding, rows) in parsed.height_mismatches() {
            wprintln!("glyph {encoding} has {rows} rows, expected {GLYPH_HEIGHT}");
        }
    }

    let mut out = Vec::new();
    charmap::write_table(&mut out, &parsed)?;
    Ok(out)
}

/// Writes rendered output to `output`, or to stdout when `None`.
///
/// Parent directories of `output` are created as needed.
pub fn emit(rendered: &[u8], output: Option<&Path>) -> Result<()> {
    let Some(path) = output else {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(rendered)
            .and_then(|()| stdout.flush())
            .context("Failed to write to stdout")?;
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, rendered)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    dprintln!("  -> {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_hex_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("image.bin");
        std::fs::write(&input, [0x01, 0x02, 0x03]).unwrap();

        let out = render_hex(&input, 4).unwrap();
        assert_eq!(out, b"00030201\n");
    }

    #[test]
    fn test_render_hex_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = render_hex(&dir.path().join("missing.bin"), 4).unwrap_err();
        assert!(err.to_string().contains("missing.bin"));
    }

    #[test]
    fn test_render_hex_zero_word_size() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("image.bin");
        std::fs::write(&input, [0xaa]).unwrap();

        let err = render_hex(&input, 0).unwrap_err();
        assert!(format!("{err:#}").contains("invalid word size 0"));
    }

    #[test]
    fn test_render_charmap_strict() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("short.bdf");
        std::fs::write(&font, "ENCODING 65\nBITMAP\nff\nENDCHAR\n").unwrap();

        assert!(render_charmap(&font, false).is_ok());
        let err = render_charmap(&font, true).unwrap_err();
        assert!(format!("{err:#}").contains("glyph 65 has 1 rows"));
    }

    #[test]
    fn test_emit_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/nested/table.S");

        emit(b"charmap:\n", Some(&path)).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"charmap:\n");
    }
}
