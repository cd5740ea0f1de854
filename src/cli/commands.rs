//! CLI command implementations
//!
//! All command functions return `CliResult<()>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use crate::config::GeneratorConfig;
use crate::generator::SuiteGenerator;

use super::{CliError, CliResult};

/// Regenerate the test classes and suite from the default configuration.
pub fn generate_tests() -> CliResult<()> {
    generate_with(GeneratorConfig::default())
}

/// Regenerate the test classes and suite described by `config`.
///
/// ## Errors
///
/// Any generation failure is rendered as a `miette` report and returned with exit code 1.
pub fn generate_with(config: GeneratorConfig) -> CliResult<()> {
    let generator = SuiteGenerator::new(config);
    let report = generator
        .generate()
        .map_err(|e| CliError::failure(format!("{:?}", miette::Report::new(e))))?;

    for class in &report.classes {
        tracing::info!(
            class = %class.name,
            check = %class.check,
            methods = class.method_count,
            "generated test class"
        );
    }
    tracing::info!(
        suite = %report.suite_path.display(),
        total_methods = report.total_methods(),
        "generation complete"
    );

    Ok(())
}
