//! Batch code generation for `cargo xtask codegen`.
//!
//! Reads `codegen.toml`, renders every configured hex dump and charmap, and
//! writes them to the configured output paths.

use anyhow::{Context, Result};
use std::path::Path;

use endeavour_codegen::config::CodegenConfig;

use crate::generate;
use crate::verbose::{Timer, dprintln};

/// Loads a codegen config and resolves its paths against its directory.
pub fn load_config(config_path: &Path) -> Result<CodegenConfig> {
    let config_str = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config: CodegenConfig = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    let base = config_path.parent().unwrap_or_else(|| Path::new(""));
    Ok(config.resolve_paths(base))
}

/// Runs the code generation pipeline.
///
/// Jobs run in file order, hex dumps first. The first failing job aborts the
/// run; outputs already written by earlier jobs are kept.
pub fn run_codegen(config_path: &Path) -> Result<()> {
    let _t = Timer::start("codegen");
    let config = load_config(config_path)?;

    if config.job_count() == 0 {
        dprintln!("No jobs in {}", config_path.display());
        return Ok(());
    }

    for job in &config.hex {
        dprintln!(
            "Dumping '{}' as {}-byte words...",
            job.input.display(),
            job.word_size
        );
        let rendered = generate::render_hex(&job.input, job.word_size)?;
        generate::emit(&rendered, Some(&job.output))?;
    }

    for job in &config.charmap {
        dprintln!("Generating charmap from '{}'...", job.font.display());
        let rendered = generate::render_charmap(&job.font, job.strict)?;
        generate::emit(&rendered, Some(&job.output))?;
    }

    dprintln!("Code generation complete ({} jobs).", config.job_count());
    Ok(())
}
