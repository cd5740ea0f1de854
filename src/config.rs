//! Generator configuration
//!
//! Defaults mirror the layout of the GoLite compiler tree: the generator runs from the
//! compiler's `src/` directory, samples live in `../programs`, templates in `build_tests/` and
//! generated sources land in `test/`.

use std::path::{Path, PathBuf};

/// Extension given to every generated source file.
pub const OUTPUT_EXTENSION: &str = "java";

/// Class checking that valid programs parse.
pub const VALID_SYNTAX_CLASS: &str = "GoLiteValidSyntaxTest";
/// Class checking that syntactically invalid programs are rejected.
pub const INVALID_SYNTAX_CLASS: &str = "GoLiteInvalidSyntaxTest";
/// Class checking the pretty-printer invariant on valid programs.
pub const PRETTY_PRINT_CLASS: &str = "GoLitePrettyPrintTest";
/// Suite class aggregating the three test classes.
pub const SUITE_CLASS: &str = "GoLiteTestSuite";

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Samples that must parse (also used for the pretty-print class)
    pub valid_samples_dir: PathBuf,
    /// Samples that must fail to parse
    pub invalid_samples_dir: PathBuf,
    /// Test-class template
    pub class_template: PathBuf,
    /// Test-suite template
    pub suite_template: PathBuf,
    /// Directory receiving every generated file
    pub output_dir: PathBuf,
    pub valid_class_name: String,
    pub invalid_class_name: String,
    pub pretty_class_name: String,
    pub suite_class_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let programs = Path::new("..").join("programs");
        Self {
            valid_samples_dir: programs.join("valid"),
            invalid_samples_dir: programs.join("invalid").join("syntax"),
            class_template: Path::new("build_tests").join("GoLiteTestTemplate.java"),
            suite_template: Path::new("build_tests").join("GoLiteTestSuiteTemplate.java"),
            output_dir: PathBuf::from("test"),
            valid_class_name: VALID_SYNTAX_CLASS.to_string(),
            invalid_class_name: INVALID_SYNTAX_CLASS.to_string(),
            pretty_class_name: PRETTY_PRINT_CLASS.to_string(),
            suite_class_name: SUITE_CLASS.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_valid_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.valid_samples_dir = dir.into();
        self
    }

    pub fn with_invalid_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.invalid_samples_dir = dir.into();
        self
    }

    pub fn with_class_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.class_template = path.into();
        self
    }

    pub fn with_suite_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.suite_template = path.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Resolve every relative path against `base`. Absolute paths are left alone.
    pub fn with_base_dir(mut self, base: &Path) -> Self {
        for path in [
            &mut self.valid_samples_dir,
            &mut self.invalid_samples_dir,
            &mut self.class_template,
            &mut self.suite_template,
            &mut self.output_dir,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }

    /// Output file for a generated class.
    pub fn class_output_path(&self, class_name: &str) -> PathBuf {
        self.output_dir.join(format!("{class_name}.{OUTPUT_EXTENSION}"))
    }

    /// Output file for the generated suite.
    pub fn suite_output_path(&self) -> PathBuf {
        self.class_output_path(&self.suite_class_name)
    }
}
