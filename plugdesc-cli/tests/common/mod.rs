//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers with an isolated configuration directory
//! - Descriptor fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak settings into a test run.
const PLUGDESC_ENV_VARS: [&str; 6] = [
    "PLUGDESC_DESCRIPTOR_FILE",
    "PLUGDESC_OUTPUT_FORMAT",
    "PLUGDESC_STRICT",
    "PLUGDESC_IGNORE_UNKNOWN_KEYS",
    "PLUGDESC_LOG_MODE",
    "PLUGDESC_CONFIG_DIR",
];

/// A descriptor with every required key and nothing to complain about.
pub const VALID_DESCRIPTOR: &str = "\
name: Example
version: 1.2.0
main: com.example.Example
load: POSTWORLD
authors: [alice, bob]
depend:
  - Vault
database: false
";

/// A descriptor with an unknown key, a bad enum and no `main`.
pub const PROBLEM_DESCRIPTOR: &str = "\
name: Example
version: 1.0
load: sometime
colour: red
";

/// Test environment with an isolated working and configuration directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory, used as the working directory
    pub temp_path: PathBuf,
    /// Path to the user configuration directory
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_dir = temp_path.join("plugdesc-config");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// Get a bare command builder running in the temp directory.
    ///
    /// Inherited `PLUGDESC_*` variables are cleared so only the test's own
    /// settings apply.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("plugdesc").expect("Failed to find plugdesc binary");
        cmd.current_dir(&self.temp_path);
        for var in PLUGDESC_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the configuration directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file relative to the temp directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write `plugin.yml` in the working directory.
    pub fn write_descriptor(&self, contents: &str) -> PathBuf {
        self.write_file("plugin.yml", contents)
    }

    /// Write the user settings file.
    pub fn write_user_settings(&self, contents: &str) -> PathBuf {
        let path = self.config_dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write settings");
        path
    }
}
