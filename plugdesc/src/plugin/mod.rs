//! Bukkit `plugin.yml` descriptors.
//!
//! This module supplies the record shape and schema for plugin descriptors.
//! The rule table below decides how each key is decoded:
//!
//! | Keys | Decoded as |
//! |------|------------|
//! | `name`, `version`, `main`, `author`, `description`, `website`, `prefix`, `api-version` | text |
//! | `authors`, `contributors`, `loadbefore`, `depend`, `softdepend`, `libraries`, `provides` | list of text |
//! | `load` | [`LoadOrder`] |
//! | `database` | strict boolean |
//! | `default-permission` | boolean, or text such as `op` |
//! | `commands`, `permissions` | accepted, not decoded |
//!
//! # Examples
//!
//! ```
//! use plugdesc::{decode, PluginDescriptor, TreeNode};
//!
//! let root = TreeNode::mapping([
//!     ("name", TreeNode::plain("Example")),
//!     ("load", TreeNode::plain("POSTWORLD")),
//!     ("depend", TreeNode::Sequence(vec![TreeNode::plain("Vault")])),
//! ]);
//! let TreeNode::Mapping(entries) = &root else { unreachable!() };
//!
//! let decoded = decode(entries, PluginDescriptor::schema());
//! assert!(decoded.is_clean());
//! assert_eq!(decoded.record.depend, Some(vec!["Vault".to_string()]));
//! assert_eq!(decoded.record.missing_required(), vec!["version", "main"]);
//! ```

mod descriptor;

pub use descriptor::{LoadOrder, PluginDescriptor};

use crate::schema::{BooleanPolicy, RuleKind, Schema, SchemaRule};
use std::sync::OnceLock;

/// Keys a loadable descriptor must define.
pub const REQUIRED_KEYS: [&str; 3] = ["name", "version", "main"];

impl PluginDescriptor {
    /// The rules for `plugin.yml`, in the order they are documented.
    #[must_use]
    pub fn rules() -> Vec<SchemaRule> {
        let text = |key: &str, field: &str| SchemaRule::new(key, RuleKind::Scalar, field);
        let list = |key: &str| SchemaRule::new(key, RuleKind::StringList, key);

        vec![
            text("name", "name"),
            text("version", "version"),
            text("main", "main"),
            text("author", "author"),
            text("description", "description"),
            text("website", "website"),
            text("prefix", "prefix"),
            text("api-version", "api_version"),
            SchemaRule::new("load", RuleKind::Enum, "load"),
            list("authors"),
            list("contributors"),
            list("loadbefore"),
            list("depend"),
            list("softdepend"),
            list("libraries"),
            list("provides"),
            SchemaRule::new(
                "database",
                RuleKind::Boolean(BooleanPolicy::Strict),
                "database",
            ),
            SchemaRule::new(
                "default-permission",
                RuleKind::Boolean(BooleanPolicy::Lenient),
                "default_permission",
            ),
            SchemaRule::ignored("commands"),
            SchemaRule::ignored("permissions"),
        ]
    }

    /// The validated `plugin.yml` schema, built on first use.
    ///
    /// # Panics
    ///
    /// Panics if [`PluginDescriptor::rules`] does not fit the record, which
    /// the unit tests rule out.
    #[must_use]
    pub fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<PluginDescriptor>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::new(Self::rules()).expect("plugin.yml rules must match PluginDescriptor")
        })
    }

    /// Required keys that were not decoded, in [`REQUIRED_KEYS`] order.
    #[must_use]
    pub fn missing_required(&self) -> Vec<&'static str> {
        let present = [&self.name, &self.version, &self.main];
        REQUIRED_KEYS
            .iter()
            .zip(present)
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| *key)
            .collect()
    }
}
