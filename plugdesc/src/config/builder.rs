//! Builder that assembles the effective settings.

use crate::config::environment::EnvironmentSettings;
use crate::config::loader::SettingsLoader;
use crate::config::merger::SettingsMerger;
use crate::config::schema::Settings;
use crate::config::validator::SettingsValidator;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Builds [`Settings`] from defaults, files, environment and overrides.
///
/// # Examples
///
/// ```
/// use plugdesc::config::{Settings, SettingsBuilder};
///
/// let settings = SettingsBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_settings(Settings { strict: Some(true), ..Default::default() })
///     .build()
///     .unwrap();
///
/// assert!(settings.is_strict());
/// assert_eq!(settings.descriptor_file(), "plugin.yml");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    working_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Settings>,
}

impl SettingsBuilder {
    /// Create a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not read any settings file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read `PLUGDESC_*` variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Start project discovery from `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Read the user settings from `dir` instead of `~/.plugdesc`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: &Path) -> Self {
        self.config_dir = Some(dir.to_path_buf());
        self
    }

    /// Apply `settings` on top of every other source.
    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.overrides = Some(settings);
        self
    }

    /// Merge every source and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file cannot be loaded, an environment
    /// variable is invalid, or the merged settings fail validation.
    pub fn build(self) -> Result<Settings> {
        let mut settings = Settings::with_defaults();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            let sources = SettingsLoader::load_all(&working_dir, self.config_dir.as_deref())?;
            log::debug!("Merging {} settings files", sources.len());
            SettingsMerger::merge_into(&mut settings, &SettingsMerger::merge(sources));
        }

        if !self.skip_env {
            EnvironmentSettings::apply_overrides(&mut settings)?;
        }

        if let Some(ref overrides) = self.overrides {
            SettingsMerger::merge_into(&mut settings, overrides);
        }

        SettingsValidator::validate(&settings)?;
        Ok(settings)
    }
}
