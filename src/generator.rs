//! Suite generation driver.
//!
//! Builds the three test classes (valid syntax, invalid syntax, pretty print) and the suite that
//! lists them. The pretty-print class reuses the *valid* samples.
//!
//! Any failure aborts the run as-is: there is no fallback that writes a partial suite.

use std::path::PathBuf;

use crate::check::CheckKind;
use crate::config::GeneratorConfig;
use crate::errors::GenerateResult;
use crate::suite::{self, write_output};
use crate::template::{self, CLASSES_MARKER};

/// Separator between member-class references in the suite.
const CLASS_LIST_SEPARATOR: &str = ",\n\t";

/// The suite's member classes, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSuiteSpec {
    pub class_names: Vec<String>,
}

impl TestSuiteSpec {
    /// Member classes as `Name.class` references joined for the suite annotation.
    pub fn render_class_list(&self) -> String {
        self.class_names
            .iter()
            .map(|name| format!("{name}.class"))
            .collect::<Vec<_>>()
            .join(CLASS_LIST_SEPARATOR)
    }

    /// Substitute the member list into `template`.
    pub fn render(&self, template: &str) -> String {
        let classes = self.render_class_list();
        template::substitute(template, &[(CLASSES_MARKER, &classes)])
    }
}

/// One class planned by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassJob {
    pub class_name: String,
    pub samples_dir: PathBuf,
    pub check: CheckKind,
}

/// A class written during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedClass {
    pub name: String,
    pub check: CheckKind,
    pub method_count: usize,
    pub output_path: PathBuf,
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub classes: Vec<GeneratedClass>,
    pub suite_path: PathBuf,
}

impl GenerationReport {
    pub fn total_methods(&self) -> usize {
        self.classes.iter().map(|c| c.method_count).sum()
    }
}

/// Generates the GoLite test classes and suite described by a [`GeneratorConfig`].
pub struct SuiteGenerator {
    config: GeneratorConfig,
}

impl SuiteGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The three classes in suite order: valid syntax, invalid syntax, pretty print.
    pub fn class_jobs(&self) -> Vec<ClassJob> {
        let c = &self.config;
        vec![
            ClassJob {
                class_name: c.valid_class_name.clone(),
                samples_dir: c.valid_samples_dir.clone(),
                check: CheckKind::ParseValid,
            },
            ClassJob {
                class_name: c.invalid_class_name.clone(),
                samples_dir: c.invalid_samples_dir.clone(),
                check: CheckKind::ParseInvalid,
            },
            ClassJob {
                class_name: c.pretty_class_name.clone(),
                samples_dir: c.valid_samples_dir.clone(),
                check: CheckKind::PrettyPrint,
            },
        ]
    }

    /// Write every test class, then the suite.
    #[tracing::instrument(skip_all, fields(output_dir = %self.config.output_dir.display()))]
    pub fn generate(&self) -> GenerateResult<GenerationReport> {
        let mut classes = Vec::new();

        for job in self.class_jobs() {
            let output_path = self.config.class_output_path(&job.class_name);
            let class = suite::write_class(
                &job.class_name,
                &job.samples_dir,
                job.check,
                &self.config.class_template,
                &output_path,
            )?;
            classes.push(GeneratedClass {
                name: class.name,
                check: class.check,
                method_count: class.methods.len(),
                output_path,
            });
        }

        let suite = TestSuiteSpec {
            class_names: classes.iter().map(|c| c.name.clone()).collect(),
        };
        let suite_template = template::load(&self.config.suite_template)?;
        let suite_path = self.config.suite_output_path();
        write_output(&suite_path, &suite.render(&suite_template))?;
        tracing::info!(path = %suite_path.display(), "wrote test suite");

        Ok(GenerationReport { classes, suite_path })
    }
}
