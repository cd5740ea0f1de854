#![forbid(unsafe_code)]
//! GoLite test-suite generator
//!
//! Scans directories of GoLite sample programs and emits JUnit test classes that run the
//! compiler's parser and pretty-printer over every sample, plus a suite class that ties
//! them together. The generated Java is never executed here; it is handed to the
//! downstream build.
//!
//! ## Pipeline
//!
//! file tree -> [`naming`] -> [`method`] -> [`suite`] (once per [`CheckKind`]) -> [`generator`]
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` with `?` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod check;
pub mod cli;
pub mod config;
pub mod errors;
pub mod generator;
pub mod method;
pub mod naming;
pub mod suite;
pub mod template;
pub mod version;

pub use check::CheckKind;
pub use config::GeneratorConfig;
pub use errors::{GenerateError, GenerateResult};
pub use generator::{GenerationReport, SuiteGenerator, TestSuiteSpec};
pub use method::{TestMethodSpec, synthesize};
pub use naming::to_test_name;
pub use suite::{SampleProgram, TestClassSpec, build_class, write_class};
