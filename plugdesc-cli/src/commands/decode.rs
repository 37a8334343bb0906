//! Decode command implementation.
//!
//! This module implements the `decode` command, which decodes a descriptor
//! and prints the record with its diagnostics in the chosen format.

use crate::error::CliError;
use crate::utils::{load_report, load_settings, resolve_descriptor_path, GlobalOptions};
use clap::Args;
use plugdesc::OutputFormat;
use std::path::PathBuf;

/// Decode a descriptor and print the result.
#[derive(Args)]
pub struct DecodeCommand {
    /// Descriptor to decode (defaults to the configured file in the working directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,

    /// Exit with status 1 if there are any diagnostics
    #[arg(long)]
    pub strict: bool,
}

impl DecodeCommand {
    /// Execute the decode command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = load_settings(global)?;
        let path = resolve_descriptor_path(self.path, &settings)?;
        let report = load_report(&path, &settings, &global.logger)?;
        for diagnostic in &report.diagnostics {
            global.logger.diagnostic(diagnostic);
        }

        let format = self.format.unwrap_or_else(|| settings.output_format());
        let text = format.create_formatter().format(&report)?;
        println!("{}", text.trim_end_matches('\n'));

        if (self.strict || settings.is_strict()) && !report.is_clean() {
            return Err(CliError::SemanticFailure(format!(
                "{} has {} diagnostic(s)",
                path.display(),
                report.diagnostics.len()
            )));
        }
        Ok(())
    }
}
