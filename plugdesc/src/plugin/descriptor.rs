//! The `plugin.yml` record.

use crate::schema::{FieldSlot, Record, ScalarValue};
use serde::Serialize;
use std::fmt;

/// When the server loads the plugin.
///
/// # Examples
///
/// ```
/// use plugdesc::plugin::LoadOrder;
///
/// assert_eq!(LoadOrder::from_name("POSTWORLD"), Some(LoadOrder::PostWorld));
/// assert_eq!(LoadOrder::from_name("postworld"), None);
/// assert_eq!(LoadOrder::Startup.to_string(), "STARTUP");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoadOrder {
    /// Loaded at server startup, before worlds.
    Startup,
    /// Loaded after the worlds.
    PostWorld,
}

impl LoadOrder {
    /// Canonical member names, in declaration order.
    pub const NAMES: &'static [&'static str] = &["STARTUP", "POSTWORLD"];

    /// Parse a canonical member name. Case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "STARTUP" => Some(Self::Startup),
            "POSTWORLD" => Some(Self::PostWorld),
            _ => None,
        }
    }

    /// The canonical member name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Startup => "STARTUP",
            Self::PostWorld => "POSTWORLD",
        }
    }
}

impl fmt::Display for LoadOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded contents of a `plugin.yml` descriptor.
///
/// Every field is optional; a field stays `None` when its key is absent or
/// could not be decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PluginDescriptor {
    /// Plugin name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Plugin version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Fully qualified main class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    /// Single author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Additional authors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    /// Contributors who are not authors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributors: Option<Vec<String>>,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Project website.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Logger prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Targeted server API version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Load phase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<LoadOrder>,
    /// Plugins that should load after this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loadbefore: Option<Vec<String>>,
    /// Hard dependencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depend: Option<Vec<String>>,
    /// Soft dependencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub softdepend: Option<Vec<String>>,
    /// Libraries to download before loading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub libraries: Option<Vec<String>>,
    /// Other plugin names this plugin stands in for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provides: Option<Vec<String>>,
    /// Whether the plugin uses the server database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<bool>,
    /// Default permission value: a boolean, or a word such as `op`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_permission: Option<ScalarValue>,
}

impl Record for PluginDescriptor {
    fn slot(field: &str) -> Option<FieldSlot<Self>> {
        let slot: FieldSlot<Self> = match field {
            "name" => FieldSlot::Text(|r, v| r.name = Some(v)),
            "version" => FieldSlot::Text(|r, v| r.version = Some(v)),
            "main" => FieldSlot::Text(|r, v| r.main = Some(v)),
            "author" => FieldSlot::Text(|r, v| r.author = Some(v)),
            "description" => FieldSlot::Text(|r, v| r.description = Some(v)),
            "website" => FieldSlot::Text(|r, v| r.website = Some(v)),
            "prefix" => FieldSlot::Text(|r, v| r.prefix = Some(v)),
            "api_version" => FieldSlot::Text(|r, v| r.api_version = Some(v)),
            "authors" => FieldSlot::TextList(|r, v| r.authors = Some(v)),
            "contributors" => FieldSlot::TextList(|r, v| r.contributors = Some(v)),
            "loadbefore" => FieldSlot::TextList(|r, v| r.loadbefore = Some(v)),
            "depend" => FieldSlot::TextList(|r, v| r.depend = Some(v)),
            "softdepend" => FieldSlot::TextList(|r, v| r.softdepend = Some(v)),
            "libraries" => FieldSlot::TextList(|r, v| r.libraries = Some(v)),
            "provides" => FieldSlot::TextList(|r, v| r.provides = Some(v)),
            "load" => FieldSlot::Choice {
                members: LoadOrder::NAMES,
                set: |r, v| r.load = LoadOrder::from_name(v),
            },
            "database" => FieldSlot::Flag(|r, v| r.database = Some(v)),
            "default_permission" => FieldSlot::FlagOrText(|r, v| r.default_permission = Some(v)),
            _ => return None,
        };
        Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_order_names_round_trip() {
        for name in LoadOrder::NAMES {
            let order = LoadOrder::from_name(name).unwrap();
            assert_eq!(order.name(), *name);
        }
    }

    #[test]
    fn test_unknown_field_has_no_slot() {
        assert!(PluginDescriptor::slot("commands").is_none());
        assert!(PluginDescriptor::slot("api-version").is_none());
    }

    #[test]
    fn test_slot_types() {
        assert_eq!(PluginDescriptor::slot("name").unwrap().type_name(), "text");
        assert_eq!(PluginDescriptor::slot("depend").unwrap().type_name(), "text list");
        assert_eq!(PluginDescriptor::slot("load").unwrap().type_name(), "enum");
        assert_eq!(PluginDescriptor::slot("database").unwrap().type_name(), "boolean");
        assert_eq!(
            PluginDescriptor::slot("default_permission").unwrap().type_name(),
            "boolean-or-text"
        );
    }

    #[test]
    fn test_serialize_skips_unset_fields() {
        let descriptor = PluginDescriptor {
            name: Some("Example".into()),
            load: Some(LoadOrder::PostWorld),
            ..Default::default()
        };
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Example", "load": "POSTWORLD"}));
    }
}
