//! Schema rule definitions.

use serde::Serialize;
use std::fmt;

/// How a boolean-coercible key treats values that are not boolean tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanPolicy {
    /// Non-boolean values are a diagnostic and the field falls back to `false`.
    Strict,
    /// Non-boolean values are kept as text.
    Lenient,
}

/// Decode strategy attached to a recognized key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "policy", rename_all = "kebab-case")]
pub enum RuleKind {
    /// Plain or block scalar, decoded to text.
    Scalar,
    /// Scalar matched against the YAML boolean tokens.
    Boolean(BooleanPolicy),
    /// Plain scalar naming one member of an enumeration.
    Enum,
    /// Mapping or sequence of plain scalars, decoded to a list of text.
    StringList,
    /// Recognized but not decoded.
    Ignored,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Boolean(BooleanPolicy::Strict) => write!(f, "boolean (strict)"),
            Self::Boolean(BooleanPolicy::Lenient) => write!(f, "boolean (lenient)"),
            Self::Enum => write!(f, "enum"),
            Self::StringList => write!(f, "string list"),
            Self::Ignored => write!(f, "ignored"),
        }
    }
}

/// One recognized configuration key.
///
/// # Examples
///
/// ```
/// use plugdesc::schema::{RuleKind, SchemaRule};
///
/// let rule = SchemaRule::new("api-version", RuleKind::Scalar, "api_version");
/// assert_eq!(rule.key, "api-version");
/// assert_eq!(rule.target_field.as_deref(), Some("api_version"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaRule {
    /// Key as it appears in the document.
    pub key: String,
    /// Decode strategy.
    pub kind: RuleKind,
    /// Record field written on success. `None` only for ignored keys.
    pub target_field: Option<String>,
}

impl SchemaRule {
    /// Create a rule writing into `target_field`.
    #[must_use]
    pub fn new(key: impl Into<String>, kind: RuleKind, target_field: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind,
            target_field: Some(target_field.into()),
        }
    }

    /// Create a rule for a key that is accepted but not decoded.
    #[must_use]
    pub fn ignored(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: RuleKind::Ignored,
            target_field: None,
        }
    }
}
