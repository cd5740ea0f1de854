//! Errors raised while generating test sources.
//!
//! Every variant aborts the whole run: there is no partial-success mode where some classes are
//! written and others skipped. The CLI renders these through `miette`.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors that occur while generating test classes and the suite.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error("unknown check kind '{tag}'")]
    #[diagnostic(
        code(golite_testgen::invalid_check_kind),
        help("expected one of: valid_parse, invalid_parse, pretty")
    )]
    InvalidCheckKind { tag: String },

    #[error("cannot read template '{}'", .path.display())]
    #[diagnostic(
        code(golite_testgen::template_read),
        help("templates are resolved relative to the working directory")
    )]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot traverse sample directory '{}'", .path.display())]
    #[diagnostic(
        code(golite_testgen::traversal),
        help("sample roots must be existing directories and sample paths must be valid UTF-8")
    )]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}'", .path.display())]
    #[diagnostic(code(golite_testgen::write))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "samples '{}' and '{}' both map to test method '{name}'",
        .first.display(),
        .second.display()
    )]
    #[diagnostic(
        code(golite_testgen::duplicate_test_name),
        help("rename one of the samples so their names differ in more than punctuation")
    )]
    DuplicateTestName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Result type for generation operations.
pub type GenerateResult<T> = Result<T, GenerateError>;
