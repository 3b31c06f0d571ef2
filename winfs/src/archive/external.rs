//! Extraction through an external decompressor.

use super::create_dir_chain;
use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::path::FsPath;
use crate::process::CommandRunner;

/// Replace the `{archive}` and `{dest}` placeholders in an argument template.
pub(super) fn expand_args(template: &[String], archive: &FsPath, dest: &FsPath) -> Vec<String> {
    template
        .iter()
        .map(|arg| {
            arg.replace("{archive}", archive.as_str())
                .replace("{dest}", dest.as_str())
        })
        .collect()
}

pub(super) fn extract(
    fs: &dyn FileSystem,
    runner: &dyn CommandRunner,
    program: &str,
    template: &[String],
    archive: &FsPath,
    dest: &FsPath,
) -> Result<()> {
    create_dir_chain(fs, dest)?;

    let args = expand_args(template, archive, dest);
    runner.run(program, &args).map_err(|source| {
        log::error!("{program} could not extract {archive}: {source}");
        Error::ExternalExtractor {
            program: program.to_string(),
            source,
        }
    })?;

    log::info!("extracted {archive} into {dest} with {program}");
    Ok(())
}
