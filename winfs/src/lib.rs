#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # winfs
//!
//! A filesystem utility layer for Windows-style paths.
//!
//! This library models normalized paths, lists and orders directory contents,
//! deletes directory trees, extracts zip archives, and resolves drive-letter
//! substitutions so that a virtual drive path and its real long-path form can
//! be reconciled.
//!
//! ## Core Types
//!
//! - [`FsPath`]: Normalized path value type
//! - [`DirectoryLister`] and [`RecursiveDeleter`]: Directory enumeration and removal
//! - [`ArchiveExtractor`]: Zip extraction into a directory tree
//! - [`SubstResolver`] and [`SubstTable`]: Drive substitution lookup and translation
//! - [`FileSystem`] and [`CommandRunner`]: Replaceable I/O seams
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use winfs::FsPath;
//!
//! let dir = FsPath::new_dir("C:/tools");
//! let exe = dir.add("bin/tool.exe");
//! assert_eq!(exe, FsPath::new("C:\\tools\\bin\\tool.exe"));
//! assert_eq!(dir.add(""), dir);
//! ```

pub mod archive;
pub mod config;
pub mod delete;
pub mod error;
pub mod fs;
pub mod listing;
pub mod logging;
pub mod path;
pub mod process;
pub mod subst;

// Re-export key types at crate root for convenience
pub use archive::{ArchiveExtractor, ExtractorBackend};
pub use config::{Config, ConfigBuilder};
pub use delete::RecursiveDeleter;
pub use error::{Error, Result};
pub use fs::{DirectoryEntry, FileSystem, StdFileSystem};
pub use listing::DirectoryLister;
pub use logging::{init_logger, LogLevel, Logger};
pub use path::FsPath;
pub use process::{CommandRunner, StdCommandRunner};
pub use subst::{SubstMapping, SubstResolver, SubstTable};
