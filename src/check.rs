//! Check kinds a generated test method can verify.
//!
//! Each [`CheckKind`] maps to exactly one (assertion, check operation) pair. The pairs live in a
//! single registry, [`CHECKS`]; callers should go through [`CheckKind::assertion`] and
//! [`CheckKind::operation`] instead of spelling the Java names themselves.
//!
//! ## Notes
//! - Tags (`valid_parse`, `invalid_parse`, `pretty`) are resolved into a [`CheckKind`] once, at the
//!   boundary. Unknown tags are a [`GenerateError::InvalidCheckKind`].
//! - The operation names are identifiers in the *generated* code; this crate never calls them.

use std::fmt;
use std::str::FromStr;

use crate::errors::GenerateError;

/// JUnit assertion used when the check is expected to succeed.
pub const ASSERT_TRUE: &str = "assertTrue";
/// JUnit assertion used when the check is expected to fail.
pub const ASSERT_FALSE: &str = "assertFalse";

/// Parser entry point called by generated tests.
pub const PARSE_OPERATION: &str = "parse";
/// Pretty-printer round-trip check called by generated tests.
pub const PRETTY_INVARIANT_OPERATION: &str = "checkPrettyInvariant";

/// What a generated test method verifies about its sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    /// The sample parses.
    ParseValid,
    /// The sample is rejected by the parser.
    ParseInvalid,
    /// Pretty-printing the sample and re-parsing it is stable.
    PrettyPrint,
}

/// Registry entry for a check kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckInfo {
    pub id: CheckKind,
    /// Stable tag used in logs and by `FromStr`.
    pub tag: &'static str,
    pub assertion: &'static str,
    pub operation: &'static str,
}

/// Registry of all check kinds, in suite order.
pub const CHECKS: &[CheckInfo] = &[
    CheckInfo {
        id: CheckKind::ParseValid,
        tag: "valid_parse",
        assertion: ASSERT_TRUE,
        operation: PARSE_OPERATION,
    },
    CheckInfo {
        id: CheckKind::ParseInvalid,
        tag: "invalid_parse",
        assertion: ASSERT_FALSE,
        operation: PARSE_OPERATION,
    },
    CheckInfo {
        id: CheckKind::PrettyPrint,
        tag: "pretty",
        assertion: ASSERT_TRUE,
        operation: PRETTY_INVARIANT_OPERATION,
    },
];

impl CheckKind {
    /// Return the registry entry for this kind.
    pub fn info(self) -> &'static CheckInfo {
        match self {
            CheckKind::ParseValid => &CHECKS[0],
            CheckKind::ParseInvalid => &CHECKS[1],
            CheckKind::PrettyPrint => &CHECKS[2],
        }
    }

    pub fn tag(self) -> &'static str {
        self.info().tag
    }

    /// Assertion function wrapped around the check call.
    pub fn assertion(self) -> &'static str {
        self.info().assertion
    }

    /// Check operation invoked with the sample path.
    pub fn operation(self) -> &'static str {
        self.info().operation
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for CheckKind {
    type Err = GenerateError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        CHECKS
            .iter()
            .find(|c| c.tag == tag)
            .map(|c| c.id)
            .ok_or_else(|| GenerateError::InvalidCheckKind { tag: tag.to_string() })
    }
}
