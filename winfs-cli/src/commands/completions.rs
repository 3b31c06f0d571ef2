//! Shell completion scripts.
//!
//! The script goes to stdout so it can be redirected; installation hints go
//! to stderr and are suppressed by `--quiet`.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::{status, GlobalOptions};
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "winfs";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if let Some(hint) = install_hint(self.shell) {
            status(global, &format!("# To enable {} completions:\n#   {hint}", self.shell));
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

/// One-line installation command for the shells we document.
fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::PowerShell => Some("winfs completions powershell | Out-String | Invoke-Expression"),
        Shell::Bash => Some("eval \"$(winfs completions bash)\""),
        Shell::Zsh => Some("winfs completions zsh > ~/.zsh/completions/_winfs"),
        Shell::Fish => Some("winfs completions fish | source"),
        _ => None,
    }
}
