//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "plugdesc";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        eprintln!("# Run the following command to enable completions:");

        match self.shell {
            Shell::Bash => {
                eprintln!(
                    "#   plugdesc completions bash > ~/.local/share/bash-completion/completions/plugdesc"
                );
                eprintln!("# Or source it directly in ~/.bashrc:");
                eprintln!("#   eval \"$(plugdesc completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   plugdesc completions zsh > ~/.zsh/completions/_plugdesc");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
                eprintln!("# Or add to ~/.zshrc:");
                eprintln!("#   eval \"$(plugdesc completions zsh)\"");
            }
            Shell::Fish => {
                eprintln!("#   plugdesc completions fish > ~/.config/fish/completions/plugdesc.fish");
                eprintln!("# Or add to config.fish:");
                eprintln!("#   plugdesc completions fish | source");
            }
            Shell::PowerShell => {
                eprintln!("#   plugdesc completions powershell > $PROFILE");
                eprintln!("# Or run:");
                eprintln!("#   plugdesc completions powershell | Out-String | Invoke-Expression");
            }
            _ => {}
        }

        eprintln!();

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
