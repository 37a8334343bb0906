//! Check command implementation.
//!
//! This module implements the `check` command, which prints one line per
//! problem in a descriptor and fails if there are any.

use crate::error::CliError;
use crate::utils::{load_report, load_settings, resolve_descriptor_path, GlobalOptions};
use clap::Args;
use plugdesc::DecodeReport;
use serde::Serialize;
use std::path::PathBuf;

/// Check a descriptor for problems.
#[derive(Args)]
pub struct CheckCommand {
    /// Descriptor to check (defaults to the configured file in the working directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable check result.
#[derive(Debug, Serialize)]
struct CheckSummary<'a> {
    path: &'a str,
    ok: bool,
    problems: &'a [String],
}

/// One line per diagnostic, then one per missing required key.
fn problems(report: &DecodeReport) -> Vec<String> {
    let diagnostics = report.diagnostics.iter().map(ToString::to_string);
    let missing = report
        .missing_required
        .iter()
        .map(|key| format!("{key}: required key is missing"));
    diagnostics.chain(missing).collect()
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = load_settings(global)?;
        let path = resolve_descriptor_path(self.path, &settings)?;
        let report = load_report(&path, &settings, &global.logger)?;

        let problems = problems(&report);
        let display_path = path.display().to_string();

        if self.json {
            let summary = CheckSummary {
                path: &display_path,
                ok: problems.is_empty(),
                problems: &problems,
            };
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| CliError::Library(e.into()))?;
            println!("{json}");
        } else if problems.is_empty() {
            println!("{display_path}: OK");
        } else {
            for problem in &problems {
                println!("{display_path}: {problem}");
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{display_path} has {} problem(s)",
                problems.len()
            )))
        }
    }
}
