//! Non-fatal problems found while decoding.

use crate::tree::TreeNode;
use serde::Serialize;
use std::fmt;

/// What went wrong with one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The key is not in the schema.
    UnknownKey,
    /// The key already appeared earlier in the mapping.
    DuplicateKey,
    /// A scalar was required but a mapping or sequence was found.
    ExpectedScalar,
    /// A strict boolean key held something other than a boolean token.
    ExpectedBoolean,
    /// The text does not name a member of the enumeration.
    InvalidEnumValue {
        /// The offending text.
        value: String,
        /// Valid member names.
        expected: Vec<String>,
    },
    /// A list key held neither a mapping nor a sequence.
    ExpectedListContainer,
    /// One list element is not a single plain value; it was skipped.
    InvalidListElement {
        /// Position of the element in its container.
        index: usize,
    },
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey => write!(f, "unknown key"),
            Self::DuplicateKey => write!(f, "duplicate key, later value wins"),
            Self::ExpectedScalar => write!(f, "expected a single value"),
            Self::ExpectedBoolean => write!(f, "expected a boolean, using false"),
            Self::InvalidEnumValue { value, expected } => write!(
                f,
                "invalid value '{value}', expected one of: {}",
                expected.join(", ")
            ),
            Self::ExpectedListContainer => write!(f, "expected a list or mapping"),
            Self::InvalidListElement { index } => {
                write!(f, "element {index} is not a single value, skipped")
            }
        }
    }
}

/// A decode-time problem attached to the key it was found under.
///
/// # Examples
///
/// ```
/// use plugdesc::{DecodeDiagnostic, DiagnosticKind, TreeNode};
///
/// let diagnostic = DecodeDiagnostic::new(
///     "colour",
///     DiagnosticKind::UnknownKey,
///     TreeNode::plain("red"),
/// );
/// assert_eq!(diagnostic.to_string(), "colour: unknown key");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeDiagnostic {
    /// Document key the problem belongs to.
    pub key: String,
    /// The problem.
    pub problem: DiagnosticKind,
    /// The node that caused it.
    pub raw_node: TreeNode,
}

impl DecodeDiagnostic {
    /// Create a diagnostic.
    #[must_use]
    pub fn new(key: impl Into<String>, problem: DiagnosticKind, raw_node: TreeNode) -> Self {
        Self {
            key: key.into(),
            problem,
            raw_node,
        }
    }
}

impl fmt::Display for DecodeDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.problem)
    }
}
