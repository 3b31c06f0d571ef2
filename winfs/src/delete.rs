//! Recursive directory deletion.
//!
//! Deletion is not transactional. A failure part way through leaves the
//! directory partially deleted; callers must treat an error as "unknown
//! partial state", never as "nothing happened".

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::listing::DirectoryLister;
use crate::path::FsPath;

/// Deletes a directory's contents and then the directory itself.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use winfs::{FsPath, RecursiveDeleter, StdFileSystem};
///
/// let tmp = tempfile::tempdir().unwrap();
/// let dir = FsPath::from(tmp.path()).add("build");
/// std::fs::create_dir_all(dir.add("obj").as_std_path()).unwrap();
///
/// let deleter = RecursiveDeleter::new(Arc::new(StdFileSystem));
/// deleter.delete_all(&dir).unwrap();
/// assert!(!dir.as_std_path().exists());
/// ```
#[derive(Clone)]
pub struct RecursiveDeleter {
    fs: Arc<dyn FileSystem>,
    lister: DirectoryLister,
}

impl RecursiveDeleter {
    /// Create a deleter over the given filesystem.
    #[must_use]
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        let lister = DirectoryLister::new(Arc::clone(&fs));
        Self { fs, lister }
    }

    /// Delete `dir` and everything below it.
    ///
    /// Paths that are not directories (including missing paths) succeed
    /// without doing anything. Children are removed one at a time in listing
    /// order; the first failure stops the deletion, leaving the remaining
    /// children and the directory itself in place.
    ///
    /// # Errors
    ///
    /// - `Error::ListDirectory` if the children cannot be listed (nothing is deleted)
    /// - `Error::DeleteEntry` naming the first child that could not be removed
    /// - `Error::RemoveDirectory` if the emptied directory cannot be removed
    pub fn delete_all(&self, dir: &FsPath) -> Result<()> {
        if !dir.is_dir(self.fs.as_ref()) {
            return Ok(());
        }

        let children = self.lister.list_filtered(dir, "")?;

        for child in &children {
            let path = dir.add(&child.name);
            self.fs.remove_path(&path).map_err(|source| {
                log::error!("cannot delete {path}: {source}");
                Error::DeleteEntry {
                    path: path.clone(),
                    source,
                }
            })?;
            log::debug!("deleted {path}");
        }

        self.fs.remove_dir(dir).map_err(|source| {
            log::error!("cannot remove directory {dir}: {source}");
            Error::RemoveDirectory {
                path: dir.clone(),
                source,
            }
        })?;

        log::info!("deleted {dir} ({} entries)", children.len());
        Ok(())
    }
}
