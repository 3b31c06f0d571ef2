//! Normalized path values.
//!
//! This module provides [`FsPath`], the value type every other component of
//! winfs operates on.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization converts path text to a canonical form by:
//! - Converting both `/` and `\` to the native separator
//! - Collapsing runs of separators into one
//! - Preserving a leading double separator (UNC prefix)
//!
//! Normalization is purely textual and idempotent. It does not touch the
//! filesystem, resolve `.`/`..`, or follow links.
//!
//! ## Directory hint
//!
//! A path whose normalized text ends with a separator is a directory path.
//! [`FsPath::new_dir`] forces that form.
//!
//! # Examples
//!
//! ```
//! use winfs::path::FsPath;
//!
//! let dir = FsPath::new_dir("P:\\paths");
//! assert!(dir.is_dir_hint());
//!
//! let file = dir.add("paths.go");
//! assert_eq!(file.file_name(), Some("paths.go"));
//! assert_eq!(file.parent(), Some(dir));
//! ```

pub mod normalize;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use normalize::SEPARATOR;
pub use types::FsPath;
