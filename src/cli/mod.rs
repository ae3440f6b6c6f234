//! CLI module for sam-filters
//!
//! The process takes no meaningful arguments and writes nothing to stdout. A run constructs both
//! [`TextPredicate`](sam_core::TextPredicate) realizations and exits with code 0.
//!
//! ## Modules
//!
//! - `commands` - Construction of the realizations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros. `execute` returns an [`ExitCode`] instead of calling
//! `process::exit`; only the top-level `run()` function exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::ffi::OsString;
use std::process;

use clap::Parser;

use crate::version::SAM_FILTERS_VERSION;

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
}

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Construct the single-method text predicates
#[derive(Parser, Debug)]
#[command(name = "sam-filters")]
#[command(version = SAM_FILTERS_VERSION)]
#[command(about = "Construct an explicit and an inline text predicate", long_about = None)]
pub struct Cli {
    /// Extra arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<OsString>,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
pub fn run() {
    let cli = Cli::parse();

    let exit_code = execute(cli);
    if exit_code != ExitCode::SUCCESS {
        process::exit(exit_code.0);
    }
}

/// Execute a parsed invocation and return its exit code.
pub fn execute(cli: Cli) -> ExitCode {
    if !cli.ignored.is_empty() {
        tracing::debug!(count = cli.ignored.len(), "ignoring extra arguments");
    }

    let constructed = commands::construct_filters();
    tracing::debug!(count = constructed.len(), "realizations constructed");

    ExitCode::SUCCESS
}

// ============================================================================
// Tests
// ============================================================================
