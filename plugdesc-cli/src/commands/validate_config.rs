//! Command to validate a plugdesc settings file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use plugdesc::config::{SettingsLoader, SettingsValidator};
use std::path::PathBuf;

/// Validate a plugdesc settings file.
#[derive(Args)]
pub struct ValidateConfigCommand {
    /// Settings file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateConfigCommand {
    /// Execute the validate-config command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        let settings = match SettingsLoader::load_file(&self.config_path) {
            Ok(s) => s,
            Err(e) => {
                global.logger.error(&format!("Parse error: {e}"));
                return Err(CliError::SemanticFailure(
                    "Settings file is invalid".to_string(),
                ));
            }
        };

        match SettingsValidator::validate(&settings) {
            Ok(()) => {
                println!("Settings file is valid");
                Ok(())
            }
            Err(e) => {
                global.logger.error(&format!("Validation error: {e}"));
                Err(CliError::SemanticFailure(
                    "Settings validation failed".to_string(),
                ))
            }
        }
    }
}
