//! Filesystem primitives behind a replaceable seam.
//!
//! Every component reaches the disk through the [`FileSystem`] trait so its
//! logic can be exercised without real I/O. [`StdFileSystem`] maps each
//! primitive directly onto `std::fs`.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Seek, Write};
use std::time::SystemTime;

use crate::path::FsPath;

/// A listing entry as reported by the filesystem.
///
/// # Examples
///
/// ```
/// use std::time::SystemTime;
/// use winfs::DirectoryEntry;
///
/// let entry = DirectoryEntry::new("notes.txt", 12, SystemTime::UNIX_EPOCH, false);
/// assert_eq!(entry.name, "notes.txt");
/// assert!(!entry.is_dir);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Bare entry name (no directory part).
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time.
    pub modified: SystemTime,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

impl DirectoryEntry {
    /// Create an entry.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, modified: SystemTime, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            size,
            modified,
            is_dir,
        }
    }
}

/// A readable, seekable stream, as required by the zip reader.
pub trait ReadSeek: Read + Seek + Send {}

impl<T: Read + Seek + Send> ReadSeek for T {}

/// Filesystem primitives used by winfs components.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem: Send + Sync {
    /// Metadata for a single path. The entry name is the path's last component.
    fn stat(&self, path: &FsPath) -> io::Result<DirectoryEntry>;

    /// All entries of a directory, read in one pass.
    fn read_dir(&self, path: &FsPath) -> io::Result<Vec<DirectoryEntry>>;

    /// Remove a file, or a directory together with everything below it.
    fn remove_path(&self, path: &FsPath) -> io::Result<()>;

    /// Remove an empty directory.
    fn remove_dir(&self, path: &FsPath) -> io::Result<()>;

    /// Create a directory and all missing parents.
    fn create_dir_all(&self, path: &FsPath) -> io::Result<()>;

    /// Open a file for reading.
    fn open(&self, path: &FsPath) -> io::Result<Box<dyn ReadSeek>>;

    /// Create or truncate a file for writing.
    fn create(&self, path: &FsPath) -> io::Result<Box<dyn Write + Send>>;
}

/// The host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

fn entry_from_metadata(name: String, metadata: &fs::Metadata) -> DirectoryEntry {
    DirectoryEntry {
        name,
        size: metadata.len(),
        modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        is_dir: metadata.is_dir(),
    }
}

impl FileSystem for StdFileSystem {
    fn stat(&self, path: &FsPath) -> io::Result<DirectoryEntry> {
        let metadata = fs::metadata(path.as_std_path())?;
        let name = path.file_name().unwrap_or(path.as_str()).to_string();
        Ok(entry_from_metadata(name, &metadata))
    }

    fn read_dir(&self, path: &FsPath) -> io::Result<Vec<DirectoryEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path.as_std_path())? {
            let entry = entry?;
            let metadata = entry.metadata()?;
            let name = entry.file_name().to_string_lossy().into_owned();
            entries.push(entry_from_metadata(name, &metadata));
        }
        Ok(entries)
    }

    fn remove_path(&self, path: &FsPath) -> io::Result<()> {
        let metadata = fs::symlink_metadata(path.as_std_path())?;
        if metadata.is_dir() {
            fs::remove_dir_all(path.as_std_path())
        } else {
            fs::remove_file(path.as_std_path())
        }
    }

    fn remove_dir(&self, path: &FsPath) -> io::Result<()> {
        fs::remove_dir(path.as_std_path())
    }

    fn create_dir_all(&self, path: &FsPath) -> io::Result<()> {
        fs::create_dir_all(path.as_std_path())
    }

    fn open(&self, path: &FsPath) -> io::Result<Box<dyn ReadSeek>> {
        Ok(Box::new(File::open(path.as_std_path())?))
    }

    fn create(&self, path: &FsPath) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(BufWriter::new(File::create(path.as_std_path())?)))
    }
}
