//! Test-class assembly.
//!
//! Walks a sample tree, synthesizes one method per `.go` file and substitutes the result into
//! the class template.
//!
//! ## Ordering
//!
//! Entries are sorted by file name within each directory, so the method order is stable across
//! runs and filesystems. Re-running the generator over unchanged inputs rewrites byte-identical
//! files.
//!
//! ## Failures
//!
//! - A missing, unreadable or non-directory sample root is a [`GenerateError::Traversal`]; an
//!   empty root is fine and yields a class with no methods.
//! - A sample whose path is not valid UTF-8 is a [`GenerateError::Traversal`] rather than a test
//!   pointing at a mangled path.
//! - Two samples that normalize to the same method name are a
//!   [`GenerateError::DuplicateTestName`]. Java would reject the class later anyway.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::check::CheckKind;
use crate::errors::{GenerateError, GenerateResult};
use crate::method::{TestMethodSpec, synthesize};
use crate::naming::SAMPLE_EXTENSION;
use crate::template::{self, NAME_MARKER, TESTS_MARKER};

/// Separator between two rendered methods.
const METHOD_SEPARATOR: &str = "\n\n";

/// A sample program found under a scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleProgram {
    /// Root joined with the path relative to it.
    pub path: PathBuf,
    pub file_name: String,
}

/// One generated test class, before template substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestClassSpec {
    pub name: String,
    pub check: CheckKind,
    /// Methods in traversal order.
    pub methods: Vec<TestMethodSpec>,
}

impl TestClassSpec {
    /// Method bodies joined by blank lines. Empty when there are no methods.
    pub fn render_methods(&self) -> String {
        self.methods
            .iter()
            .map(|m| m.body.as_str())
            .collect::<Vec<_>>()
            .join(METHOD_SEPARATOR)
    }

    /// Substitute the class name and methods into `template`.
    pub fn render(&self, template: &str) -> String {
        let methods = self.render_methods();
        template::substitute(template, &[(NAME_MARKER, &self.name), (TESTS_MARKER, &methods)])
    }
}

/// Lazily walk `root` for sample programs, sorted by file name within each directory.
///
/// Yields a [`GenerateError::Traversal`] for the root itself when it does not exist or is not a
/// directory, and for any sample whose path is not valid UTF-8.
pub fn discover_samples(root: &Path) -> impl Iterator<Item = GenerateResult<SampleProgram>> + '_ {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().unwrap_or(root).to_path_buf();
                    return Some(Err(GenerateError::Traversal {
                        path,
                        source: io::Error::from(err),
                    }));
                }
            };

            if entry.depth() == 0 {
                if entry.file_type().is_dir() {
                    return None;
                }
                return Some(Err(GenerateError::Traversal {
                    path: root.to_path_buf(),
                    source: io::Error::new(io::ErrorKind::NotADirectory, "sample root is not a directory"),
                }));
            }

            let is_file = entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file || !entry.file_name().to_string_lossy().ends_with(SAMPLE_EXTENSION) {
                return None;
            }

            let Some(file_name) = entry.path().to_str().and(entry.file_name().to_str()) else {
                return Some(Err(GenerateError::Traversal {
                    path: entry.into_path(),
                    source: io::Error::new(io::ErrorKind::InvalidData, "sample path is not valid UTF-8"),
                }));
            };
            let file_name = file_name.to_string();

            Some(Ok(SampleProgram {
                path: entry.into_path(),
                file_name,
            }))
        })
}

/// Collect the test methods for every sample under `root_dir`.
pub fn collect_class(class_name: &str, root_dir: &Path, check: CheckKind) -> GenerateResult<TestClassSpec> {
    let mut methods = Vec::new();
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    for sample in discover_samples(root_dir) {
        let sample = sample?;
        let method = synthesize(&sample.file_name, &sample.path, check);
        tracing::debug!(sample = %sample.path.display(), method = %method.name, "synthesized test method");

        if let Some(first) = seen.get(&method.name) {
            return Err(GenerateError::DuplicateTestName {
                name: method.name,
                first: first.clone(),
                second: sample.path,
            });
        }
        seen.insert(method.name.clone(), sample.path);
        methods.push(method);
    }

    if methods.is_empty() {
        tracing::warn!(root = %root_dir.display(), class = class_name, "no samples found");
    }

    Ok(TestClassSpec {
        name: class_name.to_string(),
        check,
        methods,
    })
}

/// Build a complete test-class source from already-loaded template text.
#[tracing::instrument(skip_all, fields(class = class_name, check = %check))]
pub fn build_class(class_name: &str, root_dir: &Path, check: CheckKind, template_text: &str) -> GenerateResult<String> {
    let class = collect_class(class_name, root_dir, check)?;
    Ok(class.render(template_text))
}

/// Build a test class and write it to `output_path`, overwriting any existing file.
///
/// The template is read from `template_path`; the output's parent directory is created if it
/// is missing.
#[tracing::instrument(skip_all, fields(class = class_name, check = %check))]
pub fn write_class(
    class_name: &str,
    root_dir: &Path,
    check: CheckKind,
    template_path: &Path,
    output_path: &Path,
) -> GenerateResult<TestClassSpec> {
    let template_text = template::load(template_path)?;
    let class = collect_class(class_name, root_dir, check)?;
    write_output(output_path, &class.render(&template_text))?;
    tracing::info!(
        path = %output_path.display(),
        methods = class.methods.len(),
        "wrote test class"
    );
    Ok(class)
}

/// Write a generated source file, creating its parent directory first.
pub(crate) fn write_output(path: &Path, contents: &str) -> GenerateResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| GenerateError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}
