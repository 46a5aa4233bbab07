//! Build-time code generators for the Endeavour BIOS.
//!
//! Usage:
//!   cargo xtask hex <FILE> <WORD_SIZE>  - Dump a binary as little-endian hex words
//!   cargo xtask charmap [FONT]          - Emit the BIOS charmap table from a BDF font
//!   cargo xtask codegen                 - Run every job listed in codegen.toml
//!
//! Generated text goes to stdout unless `--output` is given. Diagnostics go
//! to stderr.

mod codegen;
mod config;
mod generate;
mod verbose;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use endeavour_codegen::charmap::DEFAULT_FONT;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "xtask", version)]
#[command(about = "Build-time code generators for the Endeavour BIOS")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Only report errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Report input sizes, glyph counts and timings
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump a binary file as fixed-width hexadecimal words, one per line
    Hex {
        /// Binary input file
        file: PathBuf,

        /// Bytes per word (at least 1)
        word_size: usize,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Emit the assembly charmap table for ASCII 32-126 from a BDF font
    Charmap {
        /// BDF font file
        #[arg(default_value = DEFAULT_FONT)]
        font: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reject glyphs that are not exactly 16 rows tall
        #[arg(long)]
        strict: bool,
    },

    /// Run every generator listed in codegen.toml
    Codegen {
        /// Config file (default: from workspace metadata, else codegen.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    verbose::init(cli.quiet, cli.verbose);

    match cli.command {
        Commands::Hex {
            file,
            word_size,
            output,
        } => {
            let _t = verbose::Timer::start("hex");
            let rendered = generate::render_hex(&file, word_size)?;
            generate::emit(&rendered, output.as_deref())?;
        }

        Commands::Charmap {
            font,
            output,
            strict,
        } => {
            let _t = verbose::Timer::start("charmap");
            let rendered = generate::render_charmap(&font, strict)?;
            generate::emit(&rendered, output.as_deref())?;
        }

        Commands::Codegen { config } => {
            let config_path = match config {
                Some(path) => path,
                None => {
                    let config = Config::load()?;
                    verbose::vprintln!("Workspace root: {}", config.workspace_root.display());
                    config.codegen_config
                }
            };
            codegen::run_codegen(&config_path)?;
        }
    }

    Ok(())
}
