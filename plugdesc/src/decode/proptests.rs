//! Property-based tests for the decoder.

use super::{decode, DiagnosticKind};
use crate::plugin::PluginDescriptor;
use crate::tree::{BlockStyle, TreeNode};
use proptest::prelude::*;

// Plain scalar text, including boolean-looking tokens.
fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9_.-]{0,12}",
        Just("yes".to_string()),
        Just("OFF".to_string()),
        Just("STARTUP".to_string()),
    ]
}

// Arbitrary trees of bounded depth.
fn node_strategy() -> impl Strategy<Value = TreeNode> {
    let leaf = prop_oneof![
        text_strategy().prop_map(TreeNode::PlainScalar),
        (any::<bool>(), prop::collection::vec("[ a-z]{0,8}", 0..4)).prop_map(|(folded, lines)| {
            let style = if folded {
                BlockStyle::Folded
            } else {
                BlockStyle::Literal
            };
            TreeNode::block(style, lines)
        }),
    ];

    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(TreeNode::Sequence),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4).prop_map(TreeNode::Mapping),
        ]
    })
}

// Keys drawn from the plugin schema plus a few unknown ones.
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("name".to_string()),
        Just("load".to_string()),
        Just("depend".to_string()),
        Just("database".to_string()),
        Just("default-permission".to_string()),
        Just("commands".to_string()),
        "x-[a-z]{1,6}",
    ]
}

fn entries_strategy() -> impl Strategy<Value = Vec<(String, TreeNode)>> {
    prop::collection::vec((key_strategy(), node_strategy()), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Decoding the same input twice gives identical output.
    #[test]
    fn decode_is_idempotent(entries in entries_strategy()) {
        let schema = PluginDescriptor::schema();
        let first = decode(&entries, schema);
        let second = decode(&entries, schema);
        prop_assert_eq!(first, second);
    }

    // Each unknown key yields exactly one UnknownKey diagnostic.
    #[test]
    fn unknown_keys_reported_once_each(entries in entries_strategy()) {
        let schema = PluginDescriptor::schema();
        let decoded = decode(&entries, schema);

        let unknown_entries = entries.iter().filter(|(k, _)| !schema.contains(k)).count();
        let unknown_diagnostics = decoded
            .diagnostics
            .iter()
            .filter(|d| d.problem == DiagnosticKind::UnknownKey)
            .count();
        prop_assert_eq!(unknown_entries, unknown_diagnostics);
    }

    // An unknown key never changes what the known keys decode to.
    #[test]
    fn unknown_key_does_not_disturb_others(
        entries in entries_strategy(),
        position in 0usize..8,
        value in node_strategy(),
    ) {
        let schema = PluginDescriptor::schema();
        let baseline = decode(&entries, schema);

        let mut with_unknown = entries.clone();
        let at = position.min(with_unknown.len());
        with_unknown.insert(at, ("zz-unknown".to_string(), value));
        let decoded = decode(&with_unknown, schema);

        prop_assert_eq!(baseline.record, decoded.record);
        prop_assert_eq!(baseline.diagnostics.len() + 1, decoded.diagnostics.len());
    }

    // Every decoded list element came from a plain scalar in the container.
    #[test]
    fn list_keeps_only_plain_scalars(items in prop::collection::vec(node_strategy(), 0..6)) {
        let plain: Vec<String> = items
            .iter()
            .filter_map(|n| match n {
                TreeNode::PlainScalar(t) => Some(t.clone()),
                _ => None,
            })
            .collect();
        let rejected = items.len() - plain.len();

        let entries = vec![("depend".to_string(), TreeNode::Sequence(items))];
        let decoded = decode(&entries, PluginDescriptor::schema());

        prop_assert_eq!(decoded.record.depend, Some(plain));
        prop_assert_eq!(decoded.diagnostics.len(), rejected);
    }

    // Strict booleans always end up set, whatever the input.
    #[test]
    fn strict_boolean_always_set(value in node_strategy()) {
        let entries = vec![("database".to_string(), value)];
        let decoded = decode(&entries, PluginDescriptor::schema());
        prop_assert!(decoded.record.database.is_some());
    }
}
