//! Delete command implementation.

use crate::error::CliError;
use crate::utils::{filesystem, status, to_fs_path, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use winfs::RecursiveDeleter;

/// Delete a directory and everything below it.
#[derive(Args)]
pub struct DeleteCommand {
    /// Directory to delete
    pub dir: PathBuf,
}

impl DeleteCommand {
    /// Execute the delete command.
    ///
    /// A path that is not a directory is left alone and reported as success.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let fs = filesystem();
        let dir = to_fs_path(&self.dir);

        if !dir.is_dir(fs.as_ref()) {
            status(global, &format!("{dir} is not a directory, nothing deleted"));
            return Ok(());
        }

        RecursiveDeleter::new(fs).delete_all(&dir)?;
        println!("{dir}");
        Ok(())
    }
}
