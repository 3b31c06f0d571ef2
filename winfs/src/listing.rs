//! Pattern-filtered directory listing with name and date orderings.
//!
//! # Result contract
//!
//! - A path that is not a directory lists as `Ok(vec![])`.
//! - A directory that cannot be opened or read is `Err(Error::ListDirectory)`,
//!   so "unreadable" stays distinguishable from "empty".
//! - A non-empty directory where the pattern removes every entry is
//!   `Ok(vec![])` with a logged warning.

use std::sync::Arc;

use regex::Regex;

use crate::error::{Error, Result};
use crate::fs::{DirectoryEntry, FileSystem};
use crate::path::FsPath;

/// Enumerates and orders directory entries.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use winfs::{DirectoryLister, FsPath, StdFileSystem};
///
/// let lister = DirectoryLister::new(Arc::new(StdFileSystem));
/// let sources = lister.by_name(&FsPath::new_dir("C:/src"), r"\.go$").unwrap();
/// for entry in sources {
///     println!("{}", entry.name);
/// }
/// ```
#[derive(Clone)]
pub struct DirectoryLister {
    fs: Arc<dyn FileSystem>,
}

impl DirectoryLister {
    /// Create a lister over the given filesystem.
    #[must_use]
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// List the entries of `dir` whose name matches `pattern`.
    ///
    /// An empty pattern matches everything. Otherwise the pattern is a regular
    /// expression searched anywhere in the bare entry name; anchor it with
    /// `^`/`$` for whole-name matching. Entries come back in the order the
    /// filesystem reported them.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPattern` if `pattern` does not compile and
    /// `Error::ListDirectory` if the directory cannot be read.
    pub fn list_filtered(&self, dir: &FsPath, pattern: &str) -> Result<Vec<DirectoryEntry>> {
        let matcher = compile_pattern(pattern)?;

        if !dir.is_dir(self.fs.as_ref()) {
            return Ok(Vec::new());
        }

        let entries = self.fs.read_dir(dir).map_err(|source| {
            log::error!("cannot list directory {dir}: {source}");
            Error::ListDirectory {
                path: dir.clone(),
                source,
            }
        })?;

        let Some(matcher) = matcher else {
            return Ok(entries);
        };

        let total = entries.len();
        let filtered: Vec<DirectoryEntry> = entries
            .into_iter()
            .filter(|entry| matcher.is_match(&entry.name))
            .collect();

        if filtered.is_empty() && total > 0 {
            log::warn!("none of the {total} entries in {dir} match pattern '{pattern}'");
        }

        Ok(filtered)
    }

    /// Filtered listing, most recently modified first.
    ///
    /// Entries with identical timestamps have no guaranteed relative order.
    ///
    /// # Errors
    ///
    /// Same as [`DirectoryLister::list_filtered`].
    pub fn by_date(&self, dir: &FsPath, pattern: &str) -> Result<Vec<DirectoryEntry>> {
        let mut entries = self.list_filtered(dir, pattern)?;
        sort_by_date(&mut entries);
        Ok(entries)
    }

    /// Filtered listing, ascending by name.
    ///
    /// # Errors
    ///
    /// Same as [`DirectoryLister::list_filtered`].
    pub fn by_name(&self, dir: &FsPath, pattern: &str) -> Result<Vec<DirectoryEntry>> {
        let mut entries = self.list_filtered(dir, pattern)?;
        sort_by_name(&mut entries);
        Ok(entries)
    }

    /// Name of the most recently modified matching entry.
    ///
    /// `Ok(None)` means the listing succeeded but nothing matched.
    ///
    /// # Errors
    ///
    /// Same as [`DirectoryLister::list_filtered`]; the failure is also logged.
    pub fn last_modified(&self, dir: &FsPath, pattern: &str) -> Result<Option<String>> {
        let entries = self.by_date(dir, pattern).inspect_err(|e| {
            log::error!("cannot determine last modified entry in {dir}: {e}");
        })?;
        Ok(entries.into_iter().next().map(|entry| entry.name))
    }
}

fn compile_pattern(pattern: &str) -> Result<Option<Regex>> {
    if pattern.is_empty() {
        return Ok(None);
    }
    Regex::new(pattern)
        .map(Some)
        .map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Sort entries most recently modified first.
pub fn sort_by_date(entries: &mut [DirectoryEntry]) {
    entries.sort_by(|a, b| b.modified.cmp(&a.modified));
}

/// Sort entries ascending by name.
pub fn sort_by_name(entries: &mut [DirectoryEntry]) {
    entries.sort_by(|a, b| a.name.cmp(&b.name));
}
