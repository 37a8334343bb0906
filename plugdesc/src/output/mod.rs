//! Rendering decode results.
//!
//! A [`DecodeReport`] collects everything worth showing about one decoded
//! descriptor. An [`OutputFormatter`] turns it into text.

mod formatters;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::decode::{DecodeDiagnostic, Decoded, DiagnosticKind};
use crate::document::DocumentWarning;
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter, YamlFormatter};

/// Trait for rendering a decode report.
pub trait OutputFormatter {
    /// Render `report` as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be serialized.
    fn format(&self, report: &DecodeReport) -> Result<String>;
}

/// Available output formats.
///
/// # Examples
///
/// ```
/// use plugdesc::OutputFormat;
///
/// assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
/// assert_eq!(OutputFormat::Json.to_string(), "json");
/// assert_eq!(OutputFormat::default(), OutputFormat::Human);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
    /// Human-readable summary.
    #[default]
    Human,
}

impl OutputFormat {
    /// Create a formatter for this format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
            Self::Human => Box::new(HumanFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Human => write!(f, "human"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            "human" => Ok(Self::Human),
            _ => Err(format!(
                "invalid output format: '{s}' (expected json, yaml or human)"
            )),
        }
    }
}

/// Everything shown about one decoded descriptor.
///
/// The record is held as a JSON value so that one report type serves every
/// record shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodeReport {
    /// Where the descriptor came from, if it was a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// The decoded record.
    pub record: serde_json::Value,
    /// Decode diagnostics, in document order.
    pub diagnostics: Vec<DecodeDiagnostic>,
    /// Document warnings.
    pub warnings: Vec<DocumentWarning>,
    /// Required keys the record lacks.
    pub missing_required: Vec<String>,
}

impl DecodeReport {
    /// Build a report from a decode result.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized.
    pub fn new<R: Serialize>(
        path: Option<&Path>,
        decoded: Decoded<R>,
        warnings: Vec<DocumentWarning>,
        missing_required: &[&str],
    ) -> Result<Self> {
        Ok(Self {
            path: path.map(|p| p.display().to_string()),
            record: serde_json::to_value(&decoded.record)?,
            diagnostics: decoded.diagnostics,
            warnings,
            missing_required: missing_required.iter().map(ToString::to_string).collect(),
        })
    }

    /// Drop unknown-key diagnostics.
    pub fn drop_unknown_keys(&mut self) {
        self.diagnostics
            .retain(|d| d.problem != DiagnosticKind::UnknownKey);
    }

    /// Whether there are no diagnostics.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Whether no required key is missing.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_required.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::PluginDescriptor;
    use crate::tree::TreeNode;

    fn sample() -> DecodeReport {
        let decoded = Decoded {
            record: PluginDescriptor {
                name: Some("Example".into()),
                ..Default::default()
            },
            diagnostics: vec![
                DecodeDiagnostic::new("colour", DiagnosticKind::UnknownKey, TreeNode::plain("red")),
                DecodeDiagnostic::new(
                    "website",
                    DiagnosticKind::ExpectedScalar,
                    TreeNode::Sequence(vec![]),
                ),
            ],
        };
        let missing = decoded.record.missing_required();
        DecodeReport::new(Some(Path::new("plugin.yml")), decoded, Vec::new(), &missing).unwrap()
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_report_new() {
        let report = sample();
        assert_eq!(report.path.as_deref(), Some("plugin.yml"));
        assert_eq!(report.record, serde_json::json!({"name": "Example"}));
        assert_eq!(report.missing_required, vec!["version", "main"]);
        assert!(!report.is_clean());
        assert!(!report.is_complete());
    }

    #[test]
    fn test_drop_unknown_keys() {
        let mut report = sample();
        report.drop_unknown_keys();
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].key, "website");
    }

    #[test]
    fn test_create_formatter() {
        let report = sample();
        for format in [OutputFormat::Json, OutputFormat::Yaml, OutputFormat::Human] {
            let output = format.create_formatter().format(&report).unwrap();
            assert!(output.contains("Example"), "{format}: {output}");
        }
    }
}
