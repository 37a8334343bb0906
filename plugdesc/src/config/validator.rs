//! Settings validation.

use crate::config::schema::Settings;
use crate::error::{Error, Result};

/// Extensions a descriptor file may have.
pub const DESCRIPTOR_EXTENSIONS: [&str; 2] = [".yml", ".yaml"];

/// Validates settings values.
///
/// # Examples
///
/// ```
/// use plugdesc::config::{Settings, SettingsValidator};
///
/// SettingsValidator::validate(&Settings::with_defaults()).unwrap();
///
/// let bad = Settings { descriptor_file: Some("plugin.json".into()), ..Default::default() };
/// assert!(SettingsValidator::validate(&bad).is_err());
/// ```
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate every field that is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first invalid field.
    pub fn validate(settings: &Settings) -> Result<()> {
        if let Some(ref file) = settings.descriptor_file {
            Self::validate_descriptor_file(file)?;
        }
        Ok(())
    }

    /// Check a descriptor file name.
    ///
    /// The name must be non-empty, contain no NUL byte, and end in `.yml` or
    /// `.yaml`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] describing the problem.
    pub fn validate_descriptor_file(name: &str) -> Result<()> {
        let fail = |message: &str| {
            Err(Error::Validation {
                field: "descriptor_file".into(),
                message: message.into(),
            })
        };

        if name.trim().is_empty() {
            return fail("Descriptor file name cannot be empty");
        }
        if name.contains('\0') {
            return fail("Descriptor file name cannot contain NUL bytes");
        }
        let has_extension = DESCRIPTOR_EXTENSIONS
            .iter()
            .any(|ext| name.len() > ext.len() && name.ends_with(ext));
        if !has_extension {
            return fail("Descriptor file must end in .yml or .yaml");
        }
        Ok(())
    }
}
