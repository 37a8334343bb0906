//! Environment variable overrides for settings.
//!
//! `PLUGDESC_*` variables override every settings file.

use crate::config::schema::Settings;
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use std::env;

/// Overrides `descriptor_file`.
pub const ENV_DESCRIPTOR_FILE: &str = "PLUGDESC_DESCRIPTOR_FILE";
/// Overrides `output_format`.
pub const ENV_OUTPUT_FORMAT: &str = "PLUGDESC_OUTPUT_FORMAT";
/// Overrides `strict`.
pub const ENV_STRICT: &str = "PLUGDESC_STRICT";
/// Overrides `ignore_unknown_keys`.
pub const ENV_IGNORE_UNKNOWN_KEYS: &str = "PLUGDESC_IGNORE_UNKNOWN_KEYS";

/// Applies environment variable overrides to settings.
///
/// # Examples
///
/// ```no_run
/// use plugdesc::config::{EnvironmentSettings, Settings};
///
/// let mut settings = Settings::default();
/// EnvironmentSettings::apply_overrides(&mut settings).unwrap();
/// ```
pub struct EnvironmentSettings;

impl EnvironmentSettings {
    /// Apply every `PLUGDESC_*` override that is set.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn apply_overrides(settings: &mut Settings) -> Result<()> {
        if let Ok(file) = env::var(ENV_DESCRIPTOR_FILE) {
            settings.descriptor_file = Some(file);
        }

        if let Ok(format) = env::var(ENV_OUTPUT_FORMAT) {
            let parsed = format.parse::<OutputFormat>().map_err(|message| Error::Validation {
                field: ENV_OUTPUT_FORMAT.into(),
                message,
            })?;
            settings.output_format = Some(parsed);
        }

        if let Ok(val) = env::var(ENV_STRICT) {
            settings.strict = Some(Self::parse_bool(ENV_STRICT, &val)?);
        }

        if let Ok(val) = env::var(ENV_IGNORE_UNKNOWN_KEYS) {
            settings.ignore_unknown_keys = Some(Self::parse_bool(ENV_IGNORE_UNKNOWN_KEYS, &val)?);
        }

        Ok(())
    }

    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
