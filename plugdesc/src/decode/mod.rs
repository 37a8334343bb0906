//! The document-to-record decoder.
//!
//! [`decode`] walks the entries of a root mapping in order, dispatches each
//! key to its schema rule, coerces the value, and writes it into a fresh
//! record. Problems never stop the walk: each one becomes a
//! [`DecodeDiagnostic`] and the affected field keeps its default.
//!
//! Decoding is a pure function of the tree and the schema. It does no I/O,
//! keeps no state between calls, and returns identical output for identical
//! input.
//!
//! # Examples
//!
//! ```
//! use plugdesc::{decode_tree, PluginDescriptor, TreeNode};
//!
//! let root = TreeNode::mapping([
//!     ("name", TreeNode::plain("Example")),
//!     ("database", TreeNode::plain("maybe")),
//!     ("colour", TreeNode::plain("red")),
//! ]);
//!
//! let decoded = decode_tree(&root, PluginDescriptor::schema()).unwrap();
//! assert_eq!(decoded.record.name.as_deref(), Some("Example"));
//! assert_eq!(decoded.record.database, Some(false));
//! assert_eq!(decoded.diagnostics.len(), 2);
//! ```

mod coerce;
mod diagnostic;

pub use coerce::{fold_block, parse_yaml_bool, FALSE_TOKENS, TRUE_TOKENS};
pub use diagnostic::{DecodeDiagnostic, DiagnosticKind};

use crate::error::{Error, Result};
use crate::schema::{FieldSlot, Record, Schema};
use crate::tree::TreeNode;
use serde::Serialize;
use std::collections::HashSet;

/// A decoded record and the problems found on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Decoded<R> {
    /// The populated record. Fields with problems keep their defaults.
    pub record: R,
    /// Problems, in document order.
    pub diagnostics: Vec<DecodeDiagnostic>,
}

impl<R> Decoded<R> {
    /// Whether the document decoded without any diagnostic.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Decode the entries of a root mapping into a new record.
#[must_use]
pub fn decode<R: Record>(entries: &[(String, TreeNode)], schema: &Schema<R>) -> Decoded<R> {
    let mut record = R::default();
    let mut diagnostics = Vec::new();
    let mut seen = HashSet::new();

    for (key, value) in entries {
        let Some(binding) = schema.get(key) else {
            diagnostics.push(DecodeDiagnostic::new(
                key.as_str(),
                DiagnosticKind::UnknownKey,
                value.clone(),
            ));
            continue;
        };

        if !seen.insert(key.as_str()) {
            diagnostics.push(DecodeDiagnostic::new(
                key.as_str(),
                DiagnosticKind::DuplicateKey,
                value.clone(),
            ));
        }

        if let Some(slot) = binding.slot() {
            apply(&mut record, slot, key, value, &mut diagnostics);
        }
    }

    Decoded {
        record,
        diagnostics,
    }
}

/// Decode a root node, which must be a mapping.
///
/// # Errors
///
/// Returns [`Error::NotAMapping`] if `root` is not a mapping.
pub fn decode_tree<R: Record>(root: &TreeNode, schema: &Schema<R>) -> Result<Decoded<R>> {
    match root {
        TreeNode::Mapping(entries) => Ok(decode(entries, schema)),
        other => Err(Error::NotAMapping {
            found: other.kind_name().to_string(),
        }),
    }
}

/// Coerce one value and write it through its setter.
fn apply<R>(
    record: &mut R,
    slot: FieldSlot<R>,
    key: &str,
    value: &TreeNode,
    diagnostics: &mut Vec<DecodeDiagnostic>,
) {
    let report = |diagnostics: &mut Vec<DecodeDiagnostic>, problem| {
        diagnostics.push(DecodeDiagnostic::new(key, problem, value.clone()));
    };

    match slot {
        FieldSlot::Text(set) => match coerce::scalar(value) {
            Ok(text) => set(record, text),
            Err(problem) => report(diagnostics, problem),
        },
        FieldSlot::Flag(set) => match coerce::strict_boolean(value) {
            Ok(flag) => set(record, flag),
            Err(problem) => {
                report(diagnostics, problem);
                set(record, false);
            }
        },
        FieldSlot::FlagOrText(set) => match coerce::lenient_boolean(value) {
            Ok(scalar) => set(record, scalar),
            Err(problem) => report(diagnostics, problem),
        },
        FieldSlot::Choice { members, set } => match coerce::enum_member(value, members) {
            Ok(member) => set(record, member),
            Err(problem) => report(diagnostics, problem),
        },
        FieldSlot::TextList(set) => match coerce::string_list(value) {
            Ok(outcome) => {
                for (index, element) in outcome.rejected {
                    diagnostics.push(DecodeDiagnostic::new(
                        key,
                        DiagnosticKind::InvalidListElement { index },
                        element.clone(),
                    ));
                }
                set(record, outcome.items);
            }
            Err(problem) => report(diagnostics, problem),
        },
    }
}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BooleanPolicy, RuleKind, ScalarValue, SchemaRule};
    use crate::tree::BlockStyle;

    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    struct Settings {
        title: Option<String>,
        enabled: bool,
        mode: Option<Mode>,
        tags: Vec<String>,
        visibility: Option<ScalarValue>,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Mode {
        Always,
        PostWorld,
    }

    impl Record for Settings {
        fn slot(field: &str) -> Option<FieldSlot<Self>> {
            match field {
                "title" => Some(FieldSlot::Text(|r, v| r.title = Some(v))),
                "enabled" => Some(FieldSlot::Flag(|r, v| r.enabled = v)),
                "mode" => Some(FieldSlot::Choice {
                    members: &["ALWAYS", "POST_WORLD"],
                    set: |r, v| {
                        r.mode = match v {
                            "ALWAYS" => Some(Mode::Always),
                            "POST_WORLD" => Some(Mode::PostWorld),
                            _ => None,
                        }
                    },
                }),
                "tags" => Some(FieldSlot::TextList(|r, v| r.tags = v)),
                "visibility" => Some(FieldSlot::FlagOrText(|r, v| r.visibility = Some(v))),
                _ => None,
            }
        }
    }

    fn schema() -> Schema<Settings> {
        Schema::new([
            SchemaRule::new("title", RuleKind::Scalar, "title"),
            SchemaRule::new("enabled", RuleKind::Boolean(BooleanPolicy::Strict), "enabled"),
            SchemaRule::new("mode", RuleKind::Enum, "mode"),
            SchemaRule::new("tags", RuleKind::StringList, "tags"),
            SchemaRule::new(
                "visibility",
                RuleKind::Boolean(BooleanPolicy::Lenient),
                "visibility",
            ),
            SchemaRule::ignored("extras"),
        ])
        .unwrap()
    }

    fn entries(pairs: Vec<(&str, TreeNode)>) -> Vec<(String, TreeNode)> {
        pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn test_decode_all_kinds() {
        let root = entries(vec![
            ("title", TreeNode::plain("Hello")),
            ("enabled", TreeNode::plain("yes")),
            ("mode", TreeNode::plain("POST_WORLD")),
            (
                "tags",
                TreeNode::Sequence(vec![TreeNode::plain("a"), TreeNode::plain("b")]),
            ),
            ("visibility", TreeNode::plain("op")),
        ]);
        let decoded = decode(&root, &schema());

        assert!(decoded.is_clean());
        assert_eq!(
            decoded.record,
            Settings {
                title: Some("Hello".into()),
                enabled: true,
                mode: Some(Mode::PostWorld),
                tags: vec!["a".into(), "b".into()],
                visibility: Some(ScalarValue::Text("op".into())),
            }
        );
    }

    #[test]
    fn test_empty_mapping_gives_default_record() {
        let decoded = decode(&[], &schema());
        assert_eq!(decoded.record, Settings::default());
        assert!(decoded.is_clean());
    }

    #[test]
    fn test_unknown_key_does_not_stop_decoding() {
        let root = entries(vec![
            ("colour", TreeNode::plain("red")),
            ("title", TreeNode::plain("Hello")),
        ]);
        let decoded = decode(&root, &schema());

        assert_eq!(decoded.record.title.as_deref(), Some("Hello"));
        assert_eq!(
            decoded.diagnostics,
            vec![DecodeDiagnostic::new(
                "colour",
                DiagnosticKind::UnknownKey,
                TreeNode::plain("red")
            )]
        );
    }

    #[test]
    fn test_ignored_key_is_silent() {
        let root = entries(vec![(
            "extras",
            TreeNode::mapping([("a", TreeNode::plain("b"))]),
        )]);
        let decoded = decode(&root, &schema());
        assert!(decoded.is_clean());
        assert_eq!(decoded.record, Settings::default());
    }

    #[test]
    fn test_strict_boolean_failure_sets_false() {
        let root = entries(vec![("enabled", TreeNode::plain("maybe"))]);
        let decoded = decode(&root, &schema());
        assert!(!decoded.record.enabled);
        assert_eq!(decoded.diagnostics.len(), 1);
        assert_eq!(decoded.diagnostics[0].problem, DiagnosticKind::ExpectedBoolean);
    }

    #[test]
    fn test_scalar_failure_leaves_field_unset() {
        let root = entries(vec![("title", TreeNode::Sequence(vec![]))]);
        let decoded = decode(&root, &schema());
        assert!(decoded.record.title.is_none());
        assert_eq!(decoded.diagnostics[0].problem, DiagnosticKind::ExpectedScalar);
        assert_eq!(decoded.diagnostics[0].raw_node, TreeNode::Sequence(vec![]));
    }

    #[test]
    fn test_block_scalar_into_text_field() {
        let root = entries(vec![(
            "title",
            TreeNode::block(BlockStyle::Literal, ["  line one", "  line two"]),
        )]);
        let decoded = decode(&root, &schema());
        assert_eq!(decoded.record.title.as_deref(), Some("line one\nline two\n"));
    }

    #[test]
    fn test_invalid_list_element_reported_with_element() {
        let nested = TreeNode::mapping([("k", TreeNode::plain("v"))]);
        let root = entries(vec![(
            "tags",
            TreeNode::Sequence(vec![
                TreeNode::plain("a"),
                nested.clone(),
                TreeNode::plain("c"),
            ]),
        )]);
        let decoded = decode(&root, &schema());

        assert_eq!(decoded.record.tags, ["a", "c"]);
        assert_eq!(
            decoded.diagnostics,
            vec![DecodeDiagnostic::new(
                "tags",
                DiagnosticKind::InvalidListElement { index: 1 },
                nested
            )]
        );
    }

    #[test]
    fn test_duplicate_key_reported_and_last_wins() {
        let root = entries(vec![
            ("title", TreeNode::plain("first")),
            ("title", TreeNode::plain("second")),
        ]);
        let decoded = decode(&root, &schema());
        assert_eq!(decoded.record.title.as_deref(), Some("second"));
        assert_eq!(decoded.diagnostics.len(), 1);
        assert_eq!(decoded.diagnostics[0].problem, DiagnosticKind::DuplicateKey);
    }

    #[test]
    fn test_repeated_unknown_key_is_not_duplicate() {
        let root = entries(vec![
            ("colour", TreeNode::plain("red")),
            ("colour", TreeNode::plain("blue")),
        ]);
        let decoded = decode(&root, &schema());
        assert!(decoded
            .diagnostics
            .iter()
            .all(|d| d.problem == DiagnosticKind::UnknownKey));
    }

    #[test]
    fn test_diagnostics_keep_document_order() {
        let root = entries(vec![
            ("mode", TreeNode::plain("sometimes")),
            ("unknown", TreeNode::plain("x")),
            ("tags", TreeNode::plain("a")),
        ]);
        let decoded = decode(&root, &schema());
        let keys: Vec<_> = decoded.diagnostics.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, ["mode", "unknown", "tags"]);
    }

    #[test]
    fn test_decode_tree_requires_mapping() {
        let err = decode_tree(&TreeNode::plain("x"), &schema()).unwrap_err();
        assert!(matches!(err, Error::NotAMapping { ref found } if found == "plain scalar"));
    }
}
