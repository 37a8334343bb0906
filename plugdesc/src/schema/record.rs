//! Record shapes the decoder writes into.
//!
//! A record type describes its fields once through [`Record::slot`]. Each
//! slot carries a typed setter, so writing a decoded value is a plain
//! function call rather than a lookup by name at decode time.

use serde::Serialize;
use std::fmt;

/// Value of a lenient boolean field: either a recognized boolean or raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// The text was a YAML boolean token.
    Flag(bool),
    /// The text was anything else.
    Text(String),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// A typed setter for one record field.
pub enum FieldSlot<R> {
    /// Text field, written by scalar rules.
    Text(fn(&mut R, String)),
    /// Boolean field, written by strict boolean rules.
    Flag(fn(&mut R, bool)),
    /// Boolean-or-text field, written by lenient boolean rules.
    FlagOrText(fn(&mut R, ScalarValue)),
    /// Enumeration field. The setter is only called with one of `members`.
    Choice {
        /// Canonical member names, matched case-sensitively.
        members: &'static [&'static str],
        /// Setter receiving the matched member name.
        set: fn(&mut R, &str),
    },
    /// List-of-text field, written by string list rules.
    TextList(fn(&mut R, Vec<String>)),
}

// Derived impls would require `R: Clone`.
impl<R> Clone for FieldSlot<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for FieldSlot<R> {}

impl<R> FieldSlot<R> {
    /// Short name of the slot type, used in schema errors.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Flag(_) => "boolean",
            Self::FlagOrText(_) => "boolean-or-text",
            Self::Choice { .. } => "enum",
            Self::TextList(_) => "text list",
        }
    }
}

impl<R> fmt::Debug for FieldSlot<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Choice { members, .. } => f
                .debug_struct("Choice")
                .field("members", members)
                .finish_non_exhaustive(),
            other => f.write_str(other.type_name()),
        }
    }
}

/// A configuration record the decoder can populate.
///
/// Implementors start from [`Default`] and expose each writable field by
/// name.
///
/// # Examples
///
/// ```
/// use plugdesc::schema::{FieldSlot, Record};
///
/// #[derive(Debug, Default)]
/// struct Settings {
///     title: Option<String>,
/// }
///
/// impl Record for Settings {
///     fn slot(field: &str) -> Option<FieldSlot<Self>> {
///         match field {
///             "title" => Some(FieldSlot::Text(|r, v| r.title = Some(v))),
///             _ => None,
///         }
///     }
/// }
///
/// assert!(Settings::slot("title").is_some());
/// assert!(Settings::slot("missing").is_none());
/// ```
pub trait Record: Default {
    /// Look up the setter for `field`, or `None` if the record has no such field.
    fn slot(field: &str) -> Option<FieldSlot<Self>>;
}
