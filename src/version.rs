//! Generator version information.
//!
//! Taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time so the CLI and any
//! diagnostics agree on one value.

/// The generator version string (for example, `0.1.0`).
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");
