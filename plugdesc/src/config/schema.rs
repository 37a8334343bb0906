//! Settings schema definitions.
//!
//! These are the tool's own settings, read from `config.yaml`,
//! `plugdesc.yaml` and `plugdesc.local.yaml`. They never describe a plugin.

use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};

/// Descriptor file used when no setting names one.
pub const DEFAULT_DESCRIPTOR_FILE: &str = "plugin.yml";

/// Complete settings structure.
///
/// Every field is optional so that partial files can be layered on top of
/// each other.
///
/// # Examples
///
/// ```
/// use plugdesc::config::Settings;
/// use plugdesc::OutputFormat;
///
/// let settings = Settings {
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert_eq!(settings.output_format(), OutputFormat::Json);
/// assert_eq!(settings.descriptor_file(), "plugin.yml");
/// assert!(!settings.is_strict());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// File name of the descriptor to decode, relative to the working
    /// directory.
    pub descriptor_file: Option<String>,

    /// Default output format for `decode`.
    pub output_format: Option<OutputFormat>,

    /// Treat any decode diagnostic as a failure.
    pub strict: Option<bool>,

    /// Drop unknown-key diagnostics from reports.
    pub ignore_unknown_keys: Option<bool>,
}

impl Settings {
    /// Settings with every field set to its built-in default.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            descriptor_file: Some(DEFAULT_DESCRIPTOR_FILE.to_string()),
            output_format: Some(OutputFormat::default()),
            strict: Some(false),
            ignore_unknown_keys: Some(false),
        }
    }

    /// The descriptor file name, falling back to [`DEFAULT_DESCRIPTOR_FILE`].
    #[must_use]
    pub fn descriptor_file(&self) -> &str {
        self.descriptor_file
            .as_deref()
            .unwrap_or(DEFAULT_DESCRIPTOR_FILE)
    }

    /// The output format, falling back to [`OutputFormat::Human`].
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Whether diagnostics should fail a decode.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict.unwrap_or(false)
    }

    /// Whether unknown-key diagnostics are dropped.
    #[must_use]
    pub fn ignores_unknown_keys(&self) -> bool {
        self.ignore_unknown_keys.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial() {
        let settings: Settings = serde_yaml::from_str("strict: true\n").unwrap();
        assert_eq!(settings.strict, Some(true));
        assert!(settings.descriptor_file.is_none());
    }

    #[test]
    fn test_deserialize_full() {
        let yaml = "descriptor_file: paper-plugin.yml\noutput_format: yaml\nstrict: false\nignore_unknown_keys: true\n";
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.descriptor_file(), "paper-plugin.yml");
        assert_eq!(settings.output_format(), OutputFormat::Yaml);
        assert!(!settings.is_strict());
        assert!(settings.ignores_unknown_keys());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Settings, _> = serde_yaml::from_str("colour: blue\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_output_format_rejected() {
        let result: Result<Settings, _> = serde_yaml::from_str("output_format: csv\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let defaults = Settings::with_defaults();
        assert_eq!(defaults.descriptor_file.as_deref(), Some(DEFAULT_DESCRIPTOR_FILE));
        assert_eq!(defaults.output_format, Some(OutputFormat::Human));
        assert_eq!(defaults.strict, Some(false));
        assert_eq!(defaults.ignore_unknown_keys, Some(false));
    }

    #[test]
    fn test_serialize_round_trip() {
        let settings = Settings {
            descriptor_file: Some("bungee.yml".into()),
            strict: Some(true),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&settings).unwrap();
        let back: Settings = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(settings, back);
    }
}
