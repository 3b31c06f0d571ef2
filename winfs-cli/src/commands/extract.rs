//! Extract command implementation.

use crate::error::CliError;
use crate::utils::{extractor, load_configuration, status, to_fs_path, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use winfs::ExtractorBackend;

/// Extract an archive into a directory.
#[derive(Args)]
pub struct ExtractCommand {
    /// Archive to extract
    pub archive: PathBuf,

    /// Destination directory (created if missing)
    pub dest: PathBuf,
}

impl ExtractCommand {
    /// Execute the extract command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let extractor = extractor(&config);
        let archive = to_fs_path(&self.archive);
        let dest = to_fs_path(&self.dest);

        if let ExtractorBackend::External { program, .. } = extractor.backend() {
            status(global, &format!("Extracting with {program}"));
        }

        extractor.extract(&archive, &dest)?;
        status(global, &format!("Extracted {archive} into {dest}"));
        Ok(())
    }
}
