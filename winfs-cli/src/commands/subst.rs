//! Subst command implementation.
//!
//! This module implements the `subst` command family: printing the drive
//! substitution table and translating paths between virtual and real form.

use crate::error::CliError;
use crate::utils::{load_configuration, subst_resolver, GlobalOptions};
use clap::{Args, Subcommand};
use winfs::FsPath;

/// Inspect drive substitutions and translate paths.
#[derive(Args)]
pub struct SubstCommand {
    #[command(subcommand)]
    pub action: SubstAction,
}

/// Subst subcommands.
#[derive(Subcommand)]
pub enum SubstAction {
    /// Print the drive substitution table
    Table,

    /// Translate a virtual-drive path to its real location
    ToReal {
        /// Path to translate
        path: String,
    },

    /// Translate a real path to its virtual-drive form
    ToVirtual {
        /// Path to translate
        path: String,
    },
}

impl SubstCommand {
    /// Execute the subst command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let resolver = subst_resolver(&config);

        match self.action {
            SubstAction::Table => {
                let table = resolver.try_table()?;
                for mapping in table.iter() {
                    println!("{}\t{}", mapping.drive, mapping.target);
                }
            }
            SubstAction::ToReal { path } => {
                println!("{}", resolver.to_real(&FsPath::new(path)));
            }
            SubstAction::ToVirtual { path } => {
                println!("{}", resolver.to_virtual(&FsPath::new(path)));
            }
        }

        Ok(())
    }
}
