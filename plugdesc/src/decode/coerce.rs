//! Value coercion for each rule kind.
//!
//! Every function here inspects a single node and either produces the typed
//! value or the [`DiagnosticKind`] explaining why it could not.

use super::diagnostic::DiagnosticKind;
use crate::schema::ScalarValue;
use crate::tree::{BlockStyle, TreeNode};

/// YAML 1.1 tokens read as `true`. Only these capitalisations count.
pub const TRUE_TOKENS: [&str; 11] = [
    "y", "Y", "yes", "Yes", "YES", "true", "True", "TRUE", "on", "On", "ON",
];

/// YAML 1.1 tokens read as `false`. Only these capitalisations count.
pub const FALSE_TOKENS: [&str; 11] = [
    "n", "N", "no", "No", "NO", "false", "False", "FALSE", "off", "Off", "OFF",
];

/// Read `text` as a YAML boolean token.
///
/// # Examples
///
/// ```
/// use plugdesc::decode::parse_yaml_bool;
///
/// assert_eq!(parse_yaml_bool("Yes"), Some(true));
/// assert_eq!(parse_yaml_bool("OFF"), Some(false));
/// assert_eq!(parse_yaml_bool("yEs"), None);
/// assert_eq!(parse_yaml_bool("maybe"), None);
/// ```
#[must_use]
pub fn parse_yaml_bool(text: &str) -> Option<bool> {
    if TRUE_TOKENS.contains(&text) {
        Some(true)
    } else if FALSE_TOKENS.contains(&text) {
        Some(false)
    } else {
        None
    }
}

/// Join the body of a block scalar.
///
/// The indicator line is dropped and every remaining line is trimmed. Each
/// line, the last included, is followed by the style's join character.
///
/// # Examples
///
/// ```
/// use plugdesc::BlockStyle;
/// use plugdesc::decode::fold_block;
///
/// assert_eq!(fold_block(BlockStyle::Literal, "|\n  foo\n  bar"), "foo\nbar\n");
/// assert_eq!(fold_block(BlockStyle::Folded, ">\n  foo\n  bar"), "foo bar ");
/// assert_eq!(fold_block(BlockStyle::Folded, ">"), "");
/// ```
#[must_use]
pub fn fold_block(style: BlockStyle, text: &str) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let joiner = style.joiner();
    let mut out = String::new();
    for line in lines.iter().skip(1) {
        out.push_str(line.trim());
        out.push(joiner);
    }
    out
}

/// Text of a plain or block scalar.
pub(crate) fn scalar(node: &TreeNode) -> Result<String, DiagnosticKind> {
    match node {
        TreeNode::PlainScalar(text) => Ok(text.clone()),
        TreeNode::BlockScalar { style, text } => Ok(fold_block(*style, text)),
        TreeNode::Mapping(_) | TreeNode::Sequence(_) => Err(DiagnosticKind::ExpectedScalar),
    }
}

/// Strict boolean: only a plain scalar holding a boolean token succeeds.
pub(crate) fn strict_boolean(node: &TreeNode) -> Result<bool, DiagnosticKind> {
    match node {
        TreeNode::PlainScalar(text) => {
            parse_yaml_bool(text).ok_or(DiagnosticKind::ExpectedBoolean)
        }
        _ => Err(DiagnosticKind::ExpectedBoolean),
    }
}

/// Lenient boolean: boolean tokens become flags, other scalars stay text.
pub(crate) fn lenient_boolean(node: &TreeNode) -> Result<ScalarValue, DiagnosticKind> {
    if let TreeNode::PlainScalar(text) = node {
        if let Some(flag) = parse_yaml_bool(text) {
            return Ok(ScalarValue::Flag(flag));
        }
    }
    scalar(node).map(ScalarValue::Text)
}

/// Enum member: the plain text must equal one of `members` exactly.
pub(crate) fn enum_member<'m>(
    node: &TreeNode,
    members: &'m [&'static str],
) -> Result<&'m str, DiagnosticKind> {
    let TreeNode::PlainScalar(text) = node else {
        return Err(DiagnosticKind::ExpectedScalar);
    };

    members
        .iter()
        .copied()
        .find(|member| *member == text.as_str())
        .ok_or_else(|| DiagnosticKind::InvalidEnumValue {
            value: text.clone(),
            expected: members.iter().map(ToString::to_string).collect(),
        })
}

/// Result of decoding a list container.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ListOutcome<'a> {
    /// Decoded elements, in order.
    pub items: Vec<String>,
    /// Elements that were skipped, with their position.
    pub rejected: Vec<(usize, &'a TreeNode)>,
}

/// String list: a sequence of plain scalars, or a mapping whose entry values
/// are plain scalars.
pub(crate) fn string_list(node: &TreeNode) -> Result<ListOutcome<'_>, DiagnosticKind> {
    let elements: Vec<&TreeNode> = match node {
        TreeNode::Sequence(items) => items.iter().collect(),
        TreeNode::Mapping(entries) => entries.iter().map(|(_, value)| value).collect(),
        TreeNode::PlainScalar(_) | TreeNode::BlockScalar { .. } => {
            return Err(DiagnosticKind::ExpectedListContainer);
        }
    };

    let mut outcome = ListOutcome::default();
    for (index, element) in elements.into_iter().enumerate() {
        match element {
            TreeNode::PlainScalar(text) => outcome.items.push(text.clone()),
            other => outcome.rejected.push((index, other)),
        }
    }
    Ok(outcome)
}
