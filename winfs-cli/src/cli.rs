//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, DeleteCommand, ExtractCommand, LatestCommand, ListCommand, SubstCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for Windows-style path utilities.
#[derive(Parser)]
#[command(name = "winfs")]
#[command(
    version,
    about = "List, delete and extract directories and resolve subst drives",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "WINFS_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List directory entries
    List(ListCommand),

    /// Print the most recently modified entry
    Latest(LatestCommand),

    /// Delete a directory and everything below it
    Delete(DeleteCommand),

    /// Extract an archive into a directory
    Extract(ExtractCommand),

    /// Inspect drive substitutions and translate paths
    Subst(SubstCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
