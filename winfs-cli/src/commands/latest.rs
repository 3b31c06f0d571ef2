//! Latest command implementation.
//!
//! Prints the name of the most recently modified entry matching a pattern.

use crate::error::CliError;
use crate::utils::{filesystem, load_configuration, to_fs_path, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use winfs::DirectoryLister;

/// Print the most recently modified entry.
#[derive(Args)]
pub struct LatestCommand {
    /// Directory to search
    pub dir: PathBuf,

    /// Regular expression matched against entry names
    #[arg(long, value_name = "REGEX")]
    pub pattern: Option<String>,
}

impl LatestCommand {
    /// Execute the latest command.
    ///
    /// Exits with status 1 when nothing matches.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let pattern = self
            .pattern
            .as_deref()
            .unwrap_or_else(|| config.list_pattern());

        let dir = to_fs_path(&self.dir);
        let lister = DirectoryLister::new(filesystem());

        match lister.last_modified(&dir, pattern)? {
            Some(name) => {
                println!("{name}");
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "No entry in {dir} matches '{pattern}'"
            ))),
        }
    }
}
