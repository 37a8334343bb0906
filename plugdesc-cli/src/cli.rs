//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CheckCommand, CompletionsCommand, DecodeCommand, KeysCommand, ValidateConfigCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for decoding and checking plugin descriptors.
#[derive(Parser)]
#[command(name = "plugdesc")]
#[command(version, about = "Decode and check plugin.yml descriptors", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "PLUGDESC_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Decode a descriptor and print the result
    Decode(DecodeCommand),

    /// Check a descriptor for problems
    Check(CheckCommand),

    /// List the recognized descriptor keys
    Keys(KeysCommand),

    /// Validate a plugdesc settings file
    ValidateConfig(ValidateConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
