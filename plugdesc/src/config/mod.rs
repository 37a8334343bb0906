//! Settings for the plugdesc tool.
//!
//! Settings control how descriptors are found and reported. They are layered
//! from several sources, highest precedence first:
//!
//! 1. Programmatic overrides (via `SettingsBuilder::with_settings`)
//! 2. Environment variables (`PLUGDESC_*`)
//! 3. Private project settings (`plugdesc.local.yaml`)
//! 4. Project settings (`plugdesc.yaml`)
//! 5. User settings (`~/.plugdesc/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use plugdesc::config::SettingsBuilder;
//! use std::path::Path;
//!
//! let settings = SettingsBuilder::new()
//!     .with_working_dir(Path::new("/path/to/plugin"))
//!     .build()
//!     .unwrap();
//! println!("Decoding {}", settings.descriptor_file());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::SettingsBuilder;
pub use environment::EnvironmentSettings;
pub use loader::{SettingsLoader, SettingsSource};
pub use merger::SettingsMerger;
pub use schema::{Settings, DEFAULT_DESCRIPTOR_FILE};
pub use validator::SettingsValidator;
