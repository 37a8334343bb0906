//! Main entry point for the plugdesc CLI.
//!
//! This is the command-line interface for the plugdesc descriptor decoder.
//! It provides commands for working with `plugin.yml` files:
//! - `decode`: Decode a descriptor and print the record
//! - `check`: Report problems and exit non-zero if there are any
//! - `keys`: List the recognized keys
//! - `validate-config`: Validate a settings file
//! - `completions`: Generate shell completions

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = plugdesc::init_logger(cli.verbose, cli.quiet);
    logger.install();

    let global = GlobalOptions {
        config_dir: cli.config_dir,
        logger,
    };

    let result = match cli.command {
        cli::Command::Decode(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Keys(cmd) => cmd.execute(&global),
        cli::Command::ValidateConfig(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
