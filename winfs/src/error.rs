//! Error types for the winfs library.
//!
//! This module provides the error hierarchy for all operations in the winfs
//! library, using `thiserror` for ergonomic error handling. Every failure that
//! touches the filesystem carries the path it was operating on.

use thiserror::Error;

use crate::path::FsPath;

/// Result type alias for operations that may fail with a winfs error.
///
/// # Examples
///
/// ```
/// use winfs::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the winfs library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {path}: {reason}")]
    InvalidPath {
        /// The invalid path.
        path: FsPath,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A listing pattern could not be compiled as a regular expression.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// The regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// A directory could not be opened or its entries could not be read.
    #[error("cannot list directory {path}: {source}")]
    ListDirectory {
        /// The directory being listed.
        path: FsPath,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A child of a directory being deleted could not be removed.
    #[error("cannot delete {path}: {source}")]
    DeleteEntry {
        /// The child that failed to delete.
        path: FsPath,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A directory could not be removed after its children were deleted.
    #[error("cannot remove directory {path}: {source}")]
    RemoveDirectory {
        /// The directory that failed to delete.
        path: FsPath,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An archive could not be opened as a zip container.
    #[error("cannot open archive {path}: {source}")]
    ArchiveOpen {
        /// The archive path.
        path: FsPath,
        /// The underlying zip error.
        #[source]
        source: zip::result::ZipError,
    },

    /// An archive entry could not be read.
    #[error("cannot read entry #{index} of archive {archive}: {source}")]
    ArchiveEntry {
        /// The archive path.
        archive: FsPath,
        /// Position of the entry in the container.
        index: usize,
        /// The underlying zip error.
        #[source]
        source: zip::result::ZipError,
    },

    /// An archive entry name would escape the destination directory.
    #[error("archive entry '{name}' escapes the destination directory")]
    UnsafeEntryName {
        /// The stored entry name.
        name: String,
    },

    /// A directory chain could not be created.
    #[error("cannot create directory {path}: {source}")]
    CreateDirectory {
        /// The directory that could not be created.
        path: FsPath,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A destination file could not be created.
    #[error("cannot create file {path}: {source}")]
    CreateFile {
        /// The file that could not be created.
        path: FsPath,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Entry content could not be copied into its destination file.
    #[error("cannot write {path}: {source}")]
    CopyEntry {
        /// The destination file.
        path: FsPath,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The external extractor program failed.
    #[error("external extractor '{program}' failed: {source}")]
    ExternalExtractor {
        /// The program that was invoked.
        program: String,
        /// The underlying I/O or exit-status error.
        #[source]
        source: std::io::Error,
    },

    /// The drive substitution query command failed.
    #[error("drive substitution query '{program}' failed: {source}")]
    SubstQuery {
        /// The program that was invoked.
        program: String,
        /// The underlying I/O or exit-status error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error is an access failure on the filesystem.
    ///
    /// Access failures are the open/list/remove/create/copy class; pattern,
    /// configuration and subprocess failures are not included.
    ///
    /// # Examples
    ///
    /// ```
    /// use winfs::{Error, FsPath};
    ///
    /// let err = Error::ListDirectory {
    ///     path: FsPath::new_dir("/restricted"),
    ///     source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    /// };
    /// assert!(err.is_access_failure());
    /// ```
    #[must_use]
    pub fn is_access_failure(&self) -> bool {
        matches!(
            self,
            Self::ListDirectory { .. }
                | Self::DeleteEntry { .. }
                | Self::RemoveDirectory { .. }
                | Self::ArchiveOpen { .. }
                | Self::CreateDirectory { .. }
                | Self::CreateFile { .. }
                | Self::CopyEntry { .. }
                | Self::Io(_)
        )
    }

    /// Returns the path named by the failure, if the failure has one.
    ///
    /// # Examples
    ///
    /// ```
    /// use winfs::{Error, FsPath};
    ///
    /// let path = FsPath::new("/data/locked.txt");
    /// let err = Error::DeleteEntry {
    ///     path: path.clone(),
    ///     source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    /// };
    /// assert_eq!(err.failing_path(), Some(&path));
    /// ```
    #[must_use]
    pub fn failing_path(&self) -> Option<&FsPath> {
        match self {
            Self::InvalidPath { path, .. }
            | Self::ListDirectory { path, .. }
            | Self::DeleteEntry { path, .. }
            | Self::RemoveDirectory { path, .. }
            | Self::ArchiveOpen { path, .. }
            | Self::CreateDirectory { path, .. }
            | Self::CreateFile { path, .. }
            | Self::CopyEntry { path, .. } => Some(path),
            Self::ArchiveEntry { archive, .. } => Some(archive),
            _ => None,
        }
    }
}
