//! Diagnostic output for the code generators.
//!
//! Generated artifacts own stdout, so every diagnostic here goes to stderr.
//! The level is fixed once from the `-q` / `-v` flags:
//! - **Quiet**: errors only (reported by `main`)
//! - **Default**: warnings and one line per written file
//! - **Verbose**: input sizes, glyph counts, timings

use std::sync::OnceLock;
use std::time::Instant;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Default,
    Verbose,
}

impl Verbosity {
    fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, true) => Self::Verbose,
            (false, false) => Self::Default,
        }
    }
}

static VERBOSITY: OnceLock<Verbosity> = OnceLock::new();

/// Set the verbosity for this process. Later calls are ignored.
pub fn init(quiet: bool, verbose: bool) {
    let _ = VERBOSITY.set(Verbosity::from_flags(quiet, verbose));
}

/// Current verbosity; [`Verbosity::Default`] before [`init`].
pub fn verbosity() -> Verbosity {
    VERBOSITY.get().copied().unwrap_or(Verbosity::Default)
}

/// Print to stderr only in verbose mode.
macro_rules! vprintln {
    ($($arg:tt)*) => {
        if $crate::verbose::verbosity() >= $crate::verbose::Verbosity::Verbose {
            eprintln!($($arg)*);
        }
    };
}

pub(crate) use vprintln;

/// Print to stderr unless quiet.
macro_rules! dprintln {
    ($($arg:tt)*) => {
        if $crate::verbose::verbosity() >= $crate::verbose::Verbosity::Default {
            eprintln!($($arg)*);
        }
    };
}

pub(crate) use dprintln;

/// Print a `warning:` line to stderr unless quiet.
macro_rules! wprintln {
    ($($arg:tt)*) => {
        $crate::verbose::dprintln!("warning: {}", format_args!($($arg)*))
    };
}

pub(crate) use wprintln;

/// Reports how long a generator took when dropped, in verbose mode.
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    /// Begin timing a labeled operation.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        vprintln!("  {}: {:.1?}", self.label, self.start.elapsed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_wins_over_verbose() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Default);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(Verbosity::Quiet < Verbosity::Default);
        assert!(Verbosity::Default < Verbosity::Verbose);
    }
}
