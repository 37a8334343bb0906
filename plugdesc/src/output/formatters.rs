//! Output formatter implementations.

use serde_json::Value;

use crate::Result;

use super::{DecodeReport, OutputFormatter};

/// Formatter for pretty-printed JSON.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &DecodeReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

/// Formatter for YAML.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, report: &DecodeReport) -> Result<String> {
        Ok(serde_yaml::to_string(report)?)
    }
}

/// Formatter for a human-readable summary.
///
/// Fields are printed one per line, sorted by name; lists are joined with
/// commas. Diagnostics, missing keys and warnings follow in their own
/// sections when present.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, report: &DecodeReport) -> Result<String> {
        let mut lines = vec![report.path.clone().unwrap_or_else(|| "<input>".to_string())];

        match &report.record {
            Value::Object(fields) if !fields.is_empty() => {
                for (name, value) in fields {
                    lines.push(format!("  {name}: {}", render_value(value)));
                }
            }
            _ => lines.push("  (no fields decoded)".to_string()),
        }

        if !report.diagnostics.is_empty() {
            lines.push(String::new());
            lines.push(format!("Diagnostics ({}):", report.diagnostics.len()));
            for diagnostic in &report.diagnostics {
                lines.push(format!("  {diagnostic}"));
            }
        }

        if !report.missing_required.is_empty() {
            lines.push(String::new());
            lines.push(format!(
                "Missing required keys: {}",
                report.missing_required.join(", ")
            ));
        }

        if !report.warnings.is_empty() {
            lines.push(String::new());
            lines.push("Warnings:".to_string());
            for warning in &report.warnings {
                lines.push(format!("  {warning}"));
            }
        }

        Ok(lines.join("\n"))
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.replace('\n', "\\n"),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
