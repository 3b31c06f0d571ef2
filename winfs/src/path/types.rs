//! The `FsPath` value type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path;

use super::normalize::{is_separator, normalize, SEPARATOR};
use crate::fs::FileSystem;

/// A normalized filesystem location.
///
/// `FsPath` keeps the text it was built from alongside its normalized form.
/// Equality, hashing and display use only the normalized form, so two paths
/// built from text that normalizes identically are equal. Values are never
/// mutated; joining produces a new path.
///
/// # Examples
///
/// ```
/// use winfs::FsPath;
///
/// let a = FsPath::new("C:\\a\\b");
/// let b = FsPath::new("C:/a//b");
/// assert_eq!(a, b);
/// assert_ne!(a.raw(), b.raw());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FsPath {
    raw: String,
    normalized: String,
    dir_hint: bool,
}

impl FsPath {
    /// Create a path from text.
    ///
    /// Text ending in a separator keeps that trailing separator and is
    /// treated as a directory path.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let raw = text.into();
        let normalized = normalize(&raw);
        let dir_hint = normalized.ends_with(SEPARATOR);
        Self {
            raw,
            normalized,
            dir_hint,
        }
    }

    /// Create a directory path from text.
    ///
    /// The normalized form always ends with a separator, even for empty
    /// text, which yields the bare separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use winfs::FsPath;
    ///
    /// assert_eq!(FsPath::new_dir("C:/tools"), FsPath::new("C:/tools/"));
    /// assert_eq!(FsPath::new_dir("C:/tools/"), FsPath::new("C:/tools/"));
    /// ```
    #[must_use]
    pub fn new_dir(text: impl Into<String>) -> Self {
        let raw = text.into();
        let mut normalized = normalize(&raw);
        if !normalized.ends_with(SEPARATOR) {
            normalized.push(SEPARATOR);
        }
        Self {
            raw,
            normalized,
            dir_hint: true,
        }
    }

    /// Join a segment onto this path.
    ///
    /// Joining the empty string returns an equal path. Leading separators on
    /// `segment` are ignored so the result always stays below `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use winfs::FsPath;
    ///
    /// let base = FsPath::new("C:/a");
    /// assert_eq!(base.add("b\\c.txt"), FsPath::new("C:/a/b/c.txt"));
    /// assert_eq!(base.add("/b"), FsPath::new("C:/a/b"));
    /// assert_eq!(base.add(""), base);
    /// ```
    #[must_use]
    pub fn add(&self, segment: &str) -> Self {
        if segment.is_empty() {
            return self.clone();
        }
        if self.normalized.is_empty() {
            return Self::new(segment);
        }

        let mut joined = self.normalized.clone();
        if !joined.ends_with(SEPARATOR) {
            joined.push(SEPARATOR);
        }
        joined.push_str(segment.trim_start_matches(is_separator));
        Self::new(joined)
    }

    /// The text this path was built from.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// The normalized text as a standard library path.
    #[must_use]
    pub fn as_std_path(&self) -> &Path {
        Path::new(&self.normalized)
    }

    /// Whether the normalized text ends with a separator.
    #[must_use]
    pub fn is_dir_hint(&self) -> bool {
        self.dir_hint
    }

    /// Whether the normalized text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// The last component, ignoring a trailing separator.
    ///
    /// Returns `None` for the empty path and for bare roots such as `/`.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.normalized.trim_end_matches(SEPARATOR);
        let name = match trimmed.rfind(SEPARATOR) {
            Some(index) => &trimmed[index + 1..],
            None => trimmed,
        };
        (!name.is_empty()).then_some(name)
    }

    /// The enclosing directory, as a directory path.
    ///
    /// Returns `None` when there is no separator left to split on.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.normalized.trim_end_matches(SEPARATOR);
        let index = trimmed.rfind(SEPARATOR)?;
        Some(Self::new_dir(&trimmed[..=index]))
    }

    /// Whether the path exists. Access failures report `false`.
    pub fn exists(&self, fs: &dyn FileSystem) -> bool {
        fs.stat(self).is_ok()
    }

    /// Whether the path is an existing directory. Access failures report `false`.
    pub fn is_dir(&self, fs: &dyn FileSystem) -> bool {
        fs.stat(self).is_ok_and(|entry| entry.is_dir)
    }

    /// Create the full directory chain for this path.
    ///
    /// Returns `false` and logs on failure.
    pub fn mkdir_all(&self, fs: &dyn FileSystem) -> bool {
        match fs.create_dir_all(self) {
            Ok(()) => true,
            Err(e) => {
                log::error!("cannot create directory {self}: {e}");
                false
            }
        }
    }
}

impl PartialEq for FsPath {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for FsPath {}

impl Hash for FsPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl fmt::Display for FsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl From<&str> for FsPath {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for FsPath {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&Path> for FsPath {
    fn from(path: &Path) -> Self {
        Self::new(path.to_string_lossy().into_owned())
    }
}

impl AsRef<Path> for FsPath {
    fn as_ref(&self) -> &Path {
        self.as_std_path()
    }
}
