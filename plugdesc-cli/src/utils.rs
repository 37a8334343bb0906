//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across CLI commands: global options,
//! settings loading, and descriptor path resolution.

use crate::error::CliError;
use plugdesc::{load_descriptor, DecodeReport, Logger, PluginDescriptor, Settings, SettingsBuilder};
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug)]
pub struct GlobalOptions {
    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,

    /// Logger built from `--verbose`, `--quiet` and `PLUGDESC_LOG_MODE`.
    pub logger: Logger,
}

/// Load hierarchical settings.
///
/// Settings are merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. Project files (`plugdesc.local.yaml`, then `plugdesc.yaml`)
/// 3. User file (`config.yaml` in the configuration directory)
/// 4. Built-in defaults (lowest priority)
pub fn load_settings(global: &GlobalOptions) -> Result<Settings, CliError> {
    let working_dir = env::current_dir()?;
    let mut builder = SettingsBuilder::new().with_working_dir(&working_dir);
    if let Some(dir) = &global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    let settings = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    global.logger.debug(&format!(
        "Using descriptor file name '{}'",
        settings.descriptor_file()
    ));
    Ok(settings)
}

/// Resolve the descriptor to read.
///
/// An explicit path is used as given. Otherwise the configured descriptor
/// file name is looked up in the working directory.
pub fn resolve_descriptor_path(
    path: Option<PathBuf>,
    settings: &Settings,
) -> Result<PathBuf, CliError> {
    match path {
        Some(p) => Ok(p),
        None => Ok(env::current_dir()?.join(settings.descriptor_file())),
    }
}

/// Load, decode and summarize the descriptor at `path`.
///
/// Document warnings are reported through the logger. Unknown-key
/// diagnostics are dropped when the settings ask for it.
pub fn load_report(
    path: &Path,
    settings: &Settings,
    logger: &Logger,
) -> Result<DecodeReport, CliError> {
    if !path.exists() {
        return Err(CliError::InvalidArguments(format!(
            "Descriptor not found: {}",
            path.display()
        )));
    }

    let loaded = load_descriptor(path, PluginDescriptor::schema())?;
    let missing = loaded.decoded.record.missing_required();
    let mut report = DecodeReport::new(Some(path), loaded.decoded, loaded.warnings, &missing)?;
    if settings.ignores_unknown_keys() {
        report.drop_unknown_keys();
    }

    for warning in &report.warnings {
        logger.document_warning(warning);
    }
    Ok(report)
}
