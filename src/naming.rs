//! Sample filename to test-method-name normalization.
//!
//! `grid_2d.go` becomes `gridTwoDimTest`: the extension is dropped, the alphanumeric runs are
//! joined in camel case, `Test` is appended and the `2d`/`3d` shorthands are spelled out.
//!
//! ## Notes
//! - Separators are anything outside `[0-9a-zA-Z]`; they never reach the output.
//! - The dimension rewrites are plain substring replacements over the camel-cased name, so
//!   they only fire when a lowercase `2d`/`3d` survives camel casing.

/// Extension of the sample programs the generator picks up.
pub const SAMPLE_EXTENSION: &str = ".go";

/// Suffix appended to every generated test-method name.
pub const TEST_SUFFIX: &str = "Test";

/// Literal rewrites applied after camel casing, in order.
const DIMENSION_REWRITES: &[(&str, &str)] = &[("2d", "TwoDim"), ("3d", "ThreeDim")];

/// Upper-case the first character, leaving the rest unchanged.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character, leaving the rest unchanged.
pub fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Join the alphanumeric runs of `s` in camel case.
///
/// Every run is capitalized, then the first character of the joined string is lower-cased.
/// Runs that start with a digit are left untouched by capitalization.
pub fn to_camel_case(s: &str) -> String {
    let joined: String = alphanumeric_runs(s).map(capitalize).collect();
    uncapitalize(&joined)
}

/// Turn a sample filename into a test-method name.
///
/// ## Examples
/// ```
/// use golite_testgen::naming::to_test_name;
///
/// assert_eq!(to_test_name("foo-bar.go"), "fooBarTest");
/// assert_eq!(to_test_name("grid_2d.go"), "gridTwoDimTest");
/// assert_eq!(to_test_name("---.go"), "Test");
/// ```
pub fn to_test_name(filename: &str) -> String {
    let mut name = to_camel_case(strip_extension(filename));
    name.push_str(TEST_SUFFIX);

    for (shorthand, spelled) in DIMENSION_REWRITES {
        if name.contains(shorthand) {
            name = name.replace(shorthand, spelled);
        }
    }

    name
}

/// Drop the trailing extension (its length in characters, never splitting a code point).
fn strip_extension(filename: &str) -> &str {
    let ext_len = SAMPLE_EXTENSION.chars().count();
    match filename.char_indices().rev().nth(ext_len - 1) {
        Some((idx, _)) => &filename[..idx],
        None => "",
    }
}

fn alphanumeric_runs(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| !c.is_ascii_alphanumeric()).filter(|run| !run.is_empty())
}
