//! Build script for winfs-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("winfs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("List, delete and extract directories and resolve subst drives")
        .long_about(
            "Command-line tool for ordered directory listings, recursive deletion, \
             archive extraction and drive substitution lookups",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("PATH")
                .global(true)
                .env("WINFS_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("list")
                .about("List directory entries")
                .long_about("List the entries of a directory by name or date, filtered by a regular expression"),
            Command::new("latest")
                .about("Print the most recently modified entry")
                .long_about("Print the name of the newest entry matching a regular expression"),
            Command::new("delete")
                .about("Delete a directory and everything below it")
                .long_about("Remove a directory tree without following symbolic links"),
            Command::new("extract")
                .about("Extract an archive into a directory")
                .long_about("Extract a zip archive with the native reader or a configured external program"),
            Command::new("subst")
                .about("Inspect drive substitutions and translate paths")
                .long_about("Print the subst table and convert paths between virtual drives and real locations"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("winfs.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
