//! Build-time code generators for the Endeavour BIOS.
//!
//! Two single-pass transformations live here:
//!
//! - [`wordhex`] turns a binary image into one fixed-width hexadecimal word
//!   per line, suitable for memory initialization files.
//! - [`charmap`] reads a BDF bitmap font and emits an assembly byte table
//!   covering printable ASCII.
//!
//! # Usage
//!
//! Invoke via `cargo xtask hex`, `cargo xtask charmap`, or
//! `cargo xtask codegen`, which reads `codegen.toml` and runs every
//! configured job.

pub mod charmap;
pub mod config;
pub mod error;
pub mod wordhex;

pub use error::CodegenError;
