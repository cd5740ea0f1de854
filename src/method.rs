//! Test-method synthesis.
//!
//! One sample plus one [`CheckKind`] gives one JUnit test method. The body has a fixed shape:
//!
//! ```text
//!     @Test
//!     public void <name>() throws IOException {
//!         <assertion>(<operation>("<path>"));
//!     }
//! ```
//!
//! indented with tabs and without a trailing newline. Nothing downstream re-parses it.

use std::path::Path;

use crate::check::CheckKind;
use crate::errors::GenerateResult;
use crate::naming::to_test_name;

/// A rendered test method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestMethodSpec {
    /// Java method name derived from the sample filename.
    pub name: String,
    /// Full method source.
    pub body: String,
}

/// Build the test method for one sample.
pub fn synthesize(filename: &str, filepath: &Path, check: CheckKind) -> TestMethodSpec {
    let name = to_test_name(filename);
    let path_literal = java_string_literal(&filepath.to_string_lossy());

    let mut body = String::new();
    body.push_str("\t@Test\n");
    body.push_str(&format!("\tpublic void {name}() throws IOException {{\n"));
    body.push_str(&format!(
        "\t\t{}({}({}));\n",
        check.assertion(),
        check.operation(),
        path_literal
    ));
    body.push_str("\t}");

    TestMethodSpec { name, body }
}

/// Like [`synthesize`], but with the check kind given by its tag.
///
/// ## Errors
/// - [`GenerateError::InvalidCheckKind`](crate::errors::GenerateError::InvalidCheckKind) if `tag` is
///   not a known check kind.
pub fn synthesize_tagged(filename: &str, filepath: &Path, tag: &str) -> GenerateResult<TestMethodSpec> {
    let check: CheckKind = tag.parse()?;
    Ok(synthesize(filename, filepath, check))
}

/// Quote `s` as a Java string literal.
///
/// Control characters use octal escapes: `\uXXXX` would be expanded by javac before lexing, so an
/// escaped newline would still end the literal.
fn java_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => out.push_str(&format!("\\{:03o}", c as u32)),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
