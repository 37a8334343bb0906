//! Generic document tree consumed by the decoder.
//!
//! A [`TreeNode`] is the already-parsed, loosely-typed form of a structured
//! text document. The decoder never mutates it; every consumer matches
//! exhaustively over the four variants.

use serde::Serialize;
use std::fmt;

/// Line-joining style of a block scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStyle {
    /// `|` block: lines are kept apart with newlines.
    Literal,
    /// `>` block: lines are folded into one line with spaces.
    Folded,
}

impl BlockStyle {
    /// The block indicator character for this style.
    #[must_use]
    pub const fn indicator(self) -> char {
        match self {
            Self::Literal => '|',
            Self::Folded => '>',
        }
    }

    /// The character placed after each line when the block is folded.
    #[must_use]
    pub const fn joiner(self) -> char {
        match self {
            Self::Literal => '\n',
            Self::Folded => ' ',
        }
    }
}

/// One node of a parsed document.
///
/// # Examples
///
/// ```
/// use plugdesc::TreeNode;
///
/// let root = TreeNode::mapping([
///     ("name", TreeNode::plain("Example")),
///     ("depend", TreeNode::Sequence(vec![TreeNode::plain("Vault")])),
/// ]);
/// assert_eq!(root.kind_name(), "mapping");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TreeNode {
    /// Ordered key/value pairs. Keys may repeat.
    Mapping(Vec<(String, TreeNode)>),
    /// Ordered list of children.
    Sequence(Vec<TreeNode>),
    /// Single-line text value.
    PlainScalar(String),
    /// Multi-line text value. `text` starts with the block indicator line.
    BlockScalar {
        /// How the lines are joined.
        style: BlockStyle,
        /// Raw text, indicator line included.
        text: String,
    },
}

impl TreeNode {
    /// Build a plain scalar.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainScalar(text.into())
    }

    /// Build a block scalar from its body lines, prefixing the indicator line.
    ///
    /// # Examples
    ///
    /// ```
    /// use plugdesc::{BlockStyle, TreeNode};
    ///
    /// let node = TreeNode::block(BlockStyle::Literal, ["foo", "bar"]);
    /// assert_eq!(
    ///     node,
    ///     TreeNode::BlockScalar { style: BlockStyle::Literal, text: "|\nfoo\nbar".into() }
    /// );
    /// ```
    #[must_use]
    pub fn block<I, S>(style: BlockStyle, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::from(style.indicator());
        for line in lines {
            text.push('\n');
            text.push_str(line.as_ref());
        }
        Self::BlockScalar { style, text }
    }

    /// Build a mapping from `(key, value)` pairs, preserving their order.
    #[must_use]
    pub fn mapping<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, TreeNode)>,
        K: Into<String>,
    {
        Self::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Short lowercase name of the variant, used in messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Mapping(_) => "mapping",
            Self::Sequence(_) => "sequence",
            Self::PlainScalar(_) => "plain scalar",
            Self::BlockScalar { .. } => "block scalar",
        }
    }

    /// Returns `true` for plain and block scalars.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::PlainScalar(_) | Self::BlockScalar { .. })
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mapping(entries) => write!(f, "mapping of {} entries", entries.len()),
            Self::Sequence(items) => write!(f, "sequence of {} items", items.len()),
            Self::PlainScalar(text) => write!(f, "'{text}'"),
            Self::BlockScalar { style, .. } => write!(f, "{} block scalar", style.indicator()),
        }
    }
}
