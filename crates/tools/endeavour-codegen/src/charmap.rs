//! BDF font to assembly charmap table.
//!
//! Only the parts of BDF the display needs are understood: `ENCODING`
//! selects the code point and the hex rows between `BITMAP` and `ENDCHAR`
//! are the glyph. Every other line outside a bitmap block is skipped.
//!
//! The emitted table covers printable ASCII, one `.byte` line per code
//! point. Code points missing from the font get a blank glyph.

use std::collections::BTreeMap;
use std::io::Write;
use std::ops::RangeInclusive;

use crate::error::CodegenError;

/// First code point in the emitted table (space).
pub const FIRST_CODEPOINT: i64 = 32;

/// Last code point in the emitted table (tilde).
pub const LAST_CODEPOINT: i64 = 126;

/// Rows per glyph expected by the display hardware.
pub const GLYPH_HEIGHT: usize = 16;

/// Font file used when none is given.
pub const DEFAULT_FONT: &str = "ter-u16.bdf";

/// Global symbol naming the emitted table.
pub const SYMBOL: &str = "charmap";

static BLANK_GLYPH: [u32; GLYPH_HEIGHT] = [0; GLYPH_HEIGHT];

/// Code points covered by the emitted table.
#[must_use]
pub fn table_range() -> RangeInclusive<i64> {
    FIRST_CODEPOINT..=LAST_CODEPOINT
}

/// Glyph bitmaps keyed by encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Font {
    glyphs: BTreeMap<i64, Vec<u32>>,
}

impl Font {
    /// Parses BDF text.
    ///
    /// A record repeated under the same encoding replaces the earlier one.
    /// Rows are kept as written; their count is not checked here (see
    /// [`Font::validate_heights`]).
    pub fn parse(text: &str) -> Result<Self, CodegenError> {
        let mut glyphs = BTreeMap::new();
        let mut rows = Vec::new();
        let mut in_bitmap = false;
        let mut encoding = 0i64;

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if in_bitmap {
                if line == "ENDCHAR" {
                    glyphs.insert(encoding, std::mem::take(&mut rows));
                    in_bitmap = false;
                } else {
                    let row = u32::from_str_radix(line, 16).map_err(|_| {
                        CodegenError::InvalidBitmapRow {
                            line: idx + 1,
                            text: line.to_string(),
                        }
                    })?;
                    rows.push(row);
                }
            } else if line == "BITMAP" {
                in_bitmap = true;
            } else if line.starts_with("ENCODING") {
                // Value follows "ENCODING ".
                let value = line.get(9..).unwrap_or("").trim();
                encoding = value
                    .parse()
                    .map_err(|_| CodegenError::InvalidEncoding {
                        line: idx + 1,
                        text: line.to_string(),
                    })?;
            }
        }

        Ok(Self { glyphs })
    }

    /// Number of glyphs in the font.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns `true` if the font has no glyphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Rows of the glyph at `encoding`, if present.
    #[must_use]
    pub fn glyph(&self, encoding: i64) -> Option<&[u32]> {
        self.glyphs.get(&encoding).map(Vec::as_slice)
    }

    /// Rows of the glyph at `encoding`, or a blank glyph if it is absent.
    #[must_use]
    pub fn rows_or_blank(&self, encoding: i64) -> &[u32] {
        self.glyph(encoding).unwrap_or(&BLANK_GLYPH)
    }

    /// Glyphs in the table range whose row count is not [`GLYPH_HEIGHT`],
    /// as `(encoding, rows)` pairs in ascending order.
    #[must_use]
    pub fn height_mismatches(&self) -> Vec<(i64, usize)> {
        self.glyphs
            .range(table_range())
            .filter(|(_, rows)| rows.len() != GLYPH_HEIGHT)
            .map(|(&enc, rows)| (enc, rows.len()))
            .collect()
    }

    /// Fails on the first glyph in the table range with the wrong height.
    pub fn validate_heights(&self) -> Result<(), CodegenError> {
        match self.height_mismatches().first() {
            Some(&(encoding, rows)) => Err(CodegenError::GlyphHeight {
                encoding,
                rows,
                expected: GLYPH_HEIGHT,
            }),
            None => Ok(()),
        }
    }
}

/// Renders one `.byte` line for a glyph.
#[must_use]
pub fn format_row_line(rows: &[u32]) -> String {
    let bytes: Vec<String> = rows.iter().map(|r| format!("0x{r:02X}")).collect();
    format!("    .byte {}", bytes.join(", "))
}

/// Writes the charmap assembly table for `font` to `out`.
pub fn write_table<W: Write>(out: &mut W, font: &Font) -> Result<(), CodegenError> {
    writeln!(out, ".global {SYMBOL}")?;
    writeln!(out, ".align 2")?;
    writeln!(out, "{SYMBOL}:")?;
    writeln!(out, "// ASCII {FIRST_CODEPOINT}-{LAST_CODEPOINT}")?;
    for cp in table_range() {
        writeln!(out, "{}", format_row_line(font.rows_or_blank(cp)))?;
    }
    Ok(())
}
