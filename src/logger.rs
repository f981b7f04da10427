//! Console output levels for the optimizer.
//!
//! Per-file result lines and the run summary go through `info!`, extra detail
//! through `verbose!`. Errors are always printed.

use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Verbosity {
    /// Errors only
    Quiet = 0,
    /// Result line per file plus the summary
    Normal = 1,
    /// Also dimensions, target paths and run totals
    Verbose = 2,
}

impl Verbosity {
    /// `--quiet` wins over `--verbose`; clap already rejects both together.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    fn from_u8(level: u8) -> Self {
        match level {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            _ => Verbosity::Verbose,
        }
    }
}

static VERBOSITY: AtomicU8 = AtomicU8::new(Verbosity::Normal as u8);

pub fn set_verbosity(verbosity: Verbosity) {
    VERBOSITY.store(verbosity as u8, Ordering::Relaxed);
}

pub fn verbosity() -> Verbosity {
    Verbosity::from_u8(VERBOSITY.load(Ordering::Relaxed))
}

pub fn is_quiet() -> bool {
    verbosity() == Verbosity::Quiet
}

pub fn is_verbose() -> bool {
    verbosity() >= Verbosity::Verbose
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if !$crate::logger::is_quiet() {
            println!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose() {
            println!("🔍 {}", format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        eprintln!("{} {}", $crate::constants::ERROR_PREFIX, format!($($arg)*));
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        if !$crate::logger::is_quiet() {
            eprintln!("{} {}", $crate::constants::WARNING_PREFIX, format!($($arg)*));
        }
    };
}
