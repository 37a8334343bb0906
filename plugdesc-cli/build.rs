//! Build script for plugdesc-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated page is placed in OUT_DIR for inclusion in release builds.
//!
//! The command structure is built by hand here because a build script cannot
//! depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    let path_arg = || {
        Arg::new("path")
            .value_name("PATH")
            .help("Descriptor to read (defaults to the configured file in the working directory)")
    };

    Command::new("plugdesc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Decode and check plugin.yml descriptors")
        .long_about(
            "Command-line tool for decoding plugin.yml descriptors into typed records and reporting their problems",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("PATH")
                .global(true)
                .env("PLUGDESC_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("decode")
                .about("Decode a descriptor and print the result")
                .long_about("Decode a descriptor and print the record, diagnostics and warnings")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FORMAT")
                        .value_parser(["json", "yaml", "human"])
                        .help("Output format"),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Exit with status 1 if there are any diagnostics"),
                ),
            Command::new("check")
                .about("Check a descriptor for problems")
                .long_about("Print one line per problem and exit with status 1 if there are any")
                .arg(path_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the result as JSON"),
                ),
            Command::new("keys")
                .about("List the recognized descriptor keys")
                .long_about("List every key the plugin.yml schema recognizes and how it is decoded")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the rules as JSON"),
                ),
            Command::new("validate-config")
                .about("Validate a plugdesc settings file")
                .long_about("Check a plugdesc settings file for errors")
                .arg(Arg::new("config-path").value_name("CONFIG_PATH").required(true)),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("plugdesc.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
