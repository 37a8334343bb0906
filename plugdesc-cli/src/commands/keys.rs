//! Keys command implementation.
//!
//! This module implements the `keys` command, which lists every key the
//! `plugin.yml` schema recognizes and how it is decoded.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use plugdesc::{PluginDescriptor, SchemaRule};

/// List the recognized descriptor keys.
#[derive(Args)]
pub struct KeysCommand {
    /// Print the rules as JSON
    #[arg(long)]
    pub json: bool,
}

/// Tab-separated key and kind, one rule per line.
fn render_table(rules: &[&SchemaRule]) -> String {
    rules
        .iter()
        .map(|rule| format!("{}\t{}", rule.key, rule.kind))
        .collect::<Vec<_>>()
        .join("\n")
}

impl KeysCommand {
    /// Execute the keys command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let rules: Vec<&SchemaRule> = PluginDescriptor::schema().rules().collect();

        if self.json {
            let json = serde_json::to_string_pretty(&rules)
                .map_err(|e| CliError::Library(e.into()))?;
            println!("{json}");
        } else {
            println!("{}", render_table(&rules));
        }
        Ok(())
    }
}
