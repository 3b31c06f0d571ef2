//! Built-in zip extraction.

use std::io::{self, Write};

use zip::ZipArchive;

use super::create_dir_chain;
use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::path::FsPath;

/// Unpack every entry of a zip archive, in container order.
///
/// Nothing is written when the archive cannot be opened. Afterwards the first
/// failing entry aborts the extraction.
pub(super) fn extract(fs: &dyn FileSystem, archive: &FsPath, dest: &FsPath) -> Result<()> {
    let reader = fs
        .open(archive)
        .map_err(|e| open_failed(archive, zip::result::ZipError::Io(e)))?;
    let mut zip = ZipArchive::new(reader).map_err(|e| open_failed(archive, e))?;

    create_dir_chain(fs, dest)?;

    for index in 0..zip.len() {
        let mut entry = zip.by_index(index).map_err(|source| {
            log::error!("cannot read entry #{index} of {archive}: {source}");
            Error::ArchiveEntry {
                archive: archive.clone(),
                index,
                source,
            }
        })?;

        if entry.enclosed_name().is_none() {
            log::error!("refusing unsafe entry '{}' in {archive}", entry.name());
            return Err(Error::UnsafeEntryName {
                name: entry.name().to_string(),
            });
        }

        let target = dest.add(entry.name());

        if entry.is_dir() {
            create_dir_chain(fs, &target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            create_dir_chain(fs, &parent)?;
        }

        let mut out = fs.create(&target).map_err(|source| {
            log::error!("cannot create {target}: {source}");
            Error::CreateFile {
                path: target.clone(),
                source,
            }
        })?;

        let written = io::copy(&mut entry, &mut out)
            .and_then(|written| out.flush().map(|()| written))
            .map_err(|source| {
                log::error!("cannot write {target}: {source}");
                Error::CopyEntry {
                    path: target.clone(),
                    source,
                }
            })?;
        log::debug!("extracted {target} ({written} bytes)");
    }

    log::info!("extracted {} entries from {archive} into {dest}", zip.len());
    Ok(())
}

fn open_failed(archive: &FsPath, source: zip::result::ZipError) -> Error {
    log::error!("cannot open archive {archive}: {source}");
    Error::ArchiveOpen {
        path: archive.clone(),
        source,
    }
}
