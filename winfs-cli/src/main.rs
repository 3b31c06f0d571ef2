//! Main entry point for the winfs CLI.
//!
//! This is the command-line interface over the winfs filesystem utilities:
//! - `list`: Ordered, pattern-filtered directory listing
//! - `latest`: Most recently modified matching entry
//! - `delete`: Recursive directory deletion
//! - `extract`: Archive extraction
//! - `subst`: Drive substitution table and path translation

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let _level = winfs::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
    };

    let result = match cli.command {
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Latest(cmd) => cmd.execute(&global),
        cli::Command::Delete(cmd) => cmd.execute(&global),
        cli::Command::Extract(cmd) => cmd.execute(&global),
        cli::Command::Subst(cmd) => cmd.execute(&global),
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
