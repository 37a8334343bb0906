//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `decode`: Decode a descriptor and print the report
//! - `check`: Report descriptor problems, one per line
//! - `keys`: List the recognized descriptor keys
//! - `validate_config`: Validate a settings file
//! - `completions`: Generate shell completion scripts

pub mod check;
pub mod completions;
pub mod decode;
pub mod keys;
pub mod validate_config;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use decode::DecodeCommand;
pub use keys::KeysCommand;
pub use validate_config::ValidateConfigCommand;
