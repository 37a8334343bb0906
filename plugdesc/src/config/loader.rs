//! Settings file discovery and loading.
//!
//! This module finds the user settings file and the project files, and loads
//! each with its precedence.

use crate::config::schema::Settings;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the user settings file inside the config directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Name of the shared project settings file.
pub const PROJECT_CONFIG_FILE: &str = "plugdesc.yaml";

/// Name of the private project settings file.
pub const LOCAL_CONFIG_FILE: &str = "plugdesc.local.yaml";

/// Settings file with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use plugdesc::config::SettingsSource;
/// use std::path::PathBuf;
///
/// let user = SettingsSource {
///     path: PathBuf::from("~/.plugdesc/config.yaml"),
///     precedence: 1,
///     settings: Default::default(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct SettingsSource {
    /// Path to the settings file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed settings.
    pub settings: Settings,
}

/// Loads settings from the user and project files.
///
/// # Examples
///
/// ```no_run
/// use plugdesc::config::SettingsLoader;
/// use std::path::Path;
///
/// let sources = SettingsLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} settings files", sources.len());
/// ```
pub struct SettingsLoader;

impl SettingsLoader {
    /// Discover and load all settings files.
    ///
    /// Searches for:
    /// 1. User settings at `~/.plugdesc/config.yaml` (precedence 1)
    /// 2. `plugdesc.yaml` walking up from `working_dir` (precedence 2)
    /// 3. `plugdesc.local.yaml` next to it (precedence 3)
    ///
    /// `config_dir` replaces `~/.plugdesc` when given.
    ///
    /// # Errors
    ///
    /// Returns an error if any settings file exists but cannot be read or
    /// parsed.
    pub fn load_all(working_dir: &Path, config_dir: Option<&Path>) -> Result<Vec<SettingsSource>> {
        let mut sources = Vec::new();

        if let Some(user) = Self::load_user_settings(config_dir)? {
            sources.push(user);
        }
        sources.extend(Self::discover_project_settings(working_dir)?);

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    fn load_user_settings(config_dir: Option<&Path>) -> Result<Option<SettingsSource>> {
        let path = match config_dir {
            Some(dir) => dir.join(USER_CONFIG_FILE),
            None => Self::default_config_dir()?.join(USER_CONFIG_FILE),
        };

        if !path.exists() {
            log::debug!("No user settings at {}", path.display());
            return Ok(None);
        }

        let settings = Self::load_file(&path)?;
        Ok(Some(SettingsSource {
            path,
            precedence: 1,
            settings,
        }))
    }

    /// Discover project settings by walking up from `start_dir`.
    ///
    /// Stops at the first directory holding either project file.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_settings(start_dir: &Path) -> Result<Vec<SettingsSource>> {
        let mut found = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (name, precedence) in [(PROJECT_CONFIG_FILE, 2), (LOCAL_CONFIG_FILE, 3)] {
                let path = current.join(name);
                if path.exists() {
                    let settings = Self::load_file(&path)?;
                    found.push(SettingsSource {
                        path,
                        precedence,
                        settings,
                    });
                }
            }

            if !found.is_empty() || !current.pop() {
                break;
            }
        }

        for source in &found {
            log::debug!("Found project settings at {}", source.path.display());
        }
        Ok(found)
    }

    /// Load and parse one YAML settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Settings> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read settings file: {e}"),
        })?;

        // An empty file holds no settings.
        if contents.trim().is_empty() {
            return Ok(Settings::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// The default user config directory, `~/.plugdesc`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_config_dir() -> Result<PathBuf> {
        home::home_dir()
            .map(|home| home.join(".plugdesc"))
            .ok_or_else(|| Error::Validation {
                field: "home_directory".into(),
                message: "Cannot determine home directory".into(),
            })
    }
}
