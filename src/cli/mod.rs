//! CLI module for the GoLite test generator
//!
//! The binary takes no arguments: a single invocation regenerates every test class and the
//! suite from the default [`GeneratorConfig`](crate::config::GeneratorConfig), resolved against
//! the working directory.
//!
//! ## Design
//!
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::process;

use clap::Parser;

use crate::version::GENERATOR_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate JUnit parser and pretty-printer tests from GoLite sample programs
#[derive(Parser, Debug)]
#[command(name = "golite-testgen")]
#[command(version = GENERATOR_VERSION)]
#[command(about = "Generate JUnit parser and pretty-printer tests from GoLite sample programs", long_about = None)]
pub struct Cli {}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        if !e.message.is_empty() {
            eprintln!("{}", e.message);
        }
        process::exit(e.exit_code.0);
    }
}

/// Execute the CLI command and return result.
fn execute(_cli: Cli) -> CliResult<()> {
    commands::generate_tests()
}

// ============================================================================
// Tests
// ============================================================================
