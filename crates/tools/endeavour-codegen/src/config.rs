//! Configuration types for batch code generation.
//!
//! Deserialized from `codegen.toml`. Relative paths are resolved against the
//! directory containing that file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::charmap::DEFAULT_FONT;

/// A binary file to dump as hexadecimal words.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct HexJob {
    /// Binary input file.
    pub input: PathBuf,
    /// Bytes per output word.
    pub word_size: usize,
    /// Output text file.
    pub output: PathBuf,
}

/// A BDF font to convert into a charmap table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CharmapJob {
    /// BDF font file. Defaults to [`DEFAULT_FONT`].
    #[serde(default = "default_font")]
    pub font: PathBuf,
    /// Output assembly file.
    pub output: PathBuf,
    /// Reject glyphs that do not have the expected height.
    #[serde(default)]
    pub strict: bool,
}

fn default_font() -> PathBuf {
    PathBuf::from(DEFAULT_FONT)
}

/// Top-level codegen configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodegenConfig {
    /// Hex dump jobs.
    #[serde(default)]
    pub hex: Vec<HexJob>,
    /// Charmap jobs.
    #[serde(default)]
    pub charmap: Vec<CharmapJob>,
}

impl CodegenConfig {
    /// Total number of configured jobs.
    #[must_use]
    pub fn job_count(&self) -> usize {
        self.hex.len() + self.charmap.len()
    }

    /// Rewrites every relative path to be relative to `base`.
    #[must_use]
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        for job in &mut self.hex {
            job.input = base.join(&job.input);
            job.output = base.join(&job.output);
        }
        for job in &mut self.charmap {
            job.font = base.join(&job.font);
            job.output = base.join(&job.output);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: CodegenConfig = toml::from_str(
            r#"
            [[hex]]
            input = "build/bios.bin"
            word-size = 4
            output = "build/bios.hex"

            [[charmap]]
            font = "fonts/ter-u16.bdf"
            output = "build/charmap.S"
            strict = true
            "#,
        )
        .unwrap();

        assert_eq!(config.job_count(), 2);
        assert_eq!(
            config.hex[0],
            HexJob {
                input: "build/bios.bin".into(),
                word_size: 4,
                output: "build/bios.hex".into(),
            }
        );
        assert!(config.charmap[0].strict);
    }

    #[test]
    fn test_charmap_defaults() {
        let config: CodegenConfig = toml::from_str(
            r#"
            [[charmap]]
            output = "charmap.S"
            "#,
        )
        .unwrap();

        assert!(config.hex.is_empty());
        assert_eq!(config.charmap[0].font, Path::new(DEFAULT_FONT));
        assert!(!config.charmap[0].strict);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: Result<CodegenConfig, _> = toml::from_str(
            r#"
            [[hex]]
            input = "a.bin"
            word_size = 4
            output = "a.hex"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_paths() {
        let config: CodegenConfig = toml::from_str(
            r#"
            [[hex]]
            input = "bios.bin"
            word-size = 8
            output = "/abs/bios.hex"
            "#,
        )
        .unwrap();

        let config = config.resolve_paths(Path::new("/work"));
        assert_eq!(config.hex[0].input, Path::new("/work/bios.bin"));
        // Absolute paths are left alone by `Path::join`.
        assert_eq!(config.hex[0].output, Path::new("/abs/bios.hex"));
    }
}
