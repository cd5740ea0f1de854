//! Template markers and substitution.
//!
//! Templates are opaque text with `<<<LABEL>>>` insertion markers. Substitution is a pure
//! function of the template and a list of (marker, value) pairs, so it can be tested without
//! touching the filesystem; [`load`] is the only I/O here.

use std::fs;
use std::path::Path;

use crate::errors::{GenerateError, GenerateResult};

/// Marker replaced by the generated class name.
pub const NAME_MARKER: &str = "<<<INSERT NAME HERE>>>";
/// Marker replaced by the generated test methods.
pub const TESTS_MARKER: &str = "<<<INSERT TESTS HERE>>>";
/// Marker replaced by the list of member classes in the suite template.
pub const CLASSES_MARKER: &str = "<<<INSERT TEST CLASSES HERE>>>";

/// Render `label` as a template insertion marker.
pub fn to_template_marker(label: &str) -> String {
    format!("<<<{label}>>>")
}

/// Replace every occurrence of each marker with its value.
///
/// Pairs are applied in order, so text inserted by an earlier pair is visible to later ones but
/// not the other way around.
pub fn substitute(template: &str, substitutions: &[(&str, &str)]) -> String {
    substitutions
        .iter()
        .fold(template.to_string(), |text, (marker, value)| text.replace(marker, value))
}

/// Read a template from disk.
pub fn load(path: &Path) -> GenerateResult<String> {
    fs::read_to_string(path).map_err(|source| GenerateError::TemplateRead {
        path: path.to_path_buf(),
        source,
    })
}
