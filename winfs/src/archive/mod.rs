//! Archive extraction into a directory tree.
//!
//! Extraction is delegated to an [`ExtractorBackend`] chosen once at startup:
//! the built-in zip reader, or an external decompressor for broader format
//! support when one is configured and present on the host.
//!
//! Extraction is not transactional. Entries written before a failure stay on
//! disk; callers needing atomicity should extract into a temporary directory
//! and rename it on success.

mod external;
mod native;

use std::sync::Arc;

use crate::config::ExtractorConfig;
use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::path::FsPath;
use crate::process::CommandRunner;

/// Default argument template for an external extractor (7-Zip syntax).
pub const DEFAULT_EXTERNAL_ARGS: [&str; 4] = ["x", "-y", "-o{dest}", "{archive}"];

/// Strategy used to unpack archives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractorBackend {
    /// Built-in zip reader.
    NativeZip,
    /// External decompressor invoked as a subprocess.
    External {
        /// Program to run.
        program: String,
        /// Argument template; `{archive}` and `{dest}` are substituted.
        args: Vec<String>,
    },
}

impl ExtractorBackend {
    /// Choose the backend from configuration.
    ///
    /// Selects `External` only when a program is configured and exists on
    /// the host; a configured but missing program falls back to `NativeZip`
    /// with a warning.
    ///
    /// # Examples
    ///
    /// ```
    /// use winfs::config::ExtractorConfig;
    /// use winfs::{ExtractorBackend, StdFileSystem};
    ///
    /// let backend = ExtractorBackend::detect(&ExtractorConfig::default(), &StdFileSystem);
    /// assert_eq!(backend, ExtractorBackend::NativeZip);
    /// ```
    pub fn detect(config: &ExtractorConfig, fs: &dyn FileSystem) -> Self {
        let Some(program) = config.external.as_deref() else {
            return Self::NativeZip;
        };

        if !FsPath::new(program).exists(fs) {
            log::warn!("external extractor {program} not found, using built-in zip support");
            return Self::NativeZip;
        }

        let args = config.args.clone().unwrap_or_else(|| {
            DEFAULT_EXTERNAL_ARGS
                .iter()
                .map(ToString::to_string)
                .collect()
        });
        log::debug!("using external extractor {program}");
        Self::External {
            program: program.to_string(),
            args,
        }
    }
}

/// Unpacks archives into a destination directory.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use winfs::{ArchiveExtractor, FsPath, StdCommandRunner, StdFileSystem};
///
/// let extractor = ArchiveExtractor::native(Arc::new(StdFileSystem), Arc::new(StdCommandRunner));
/// extractor
///     .extract(&FsPath::new("C:/downloads/tool.zip"), &FsPath::new_dir("C:/tools/tool"))
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ArchiveExtractor {
    fs: Arc<dyn FileSystem>,
    runner: Arc<dyn CommandRunner>,
    backend: ExtractorBackend,
}

impl ArchiveExtractor {
    /// Create an extractor using the given backend.
    #[must_use]
    pub fn new(
        fs: Arc<dyn FileSystem>,
        runner: Arc<dyn CommandRunner>,
        backend: ExtractorBackend,
    ) -> Self {
        Self {
            fs,
            runner,
            backend,
        }
    }

    /// Create an extractor using the built-in zip reader.
    #[must_use]
    pub fn native(fs: Arc<dyn FileSystem>, runner: Arc<dyn CommandRunner>) -> Self {
        Self::new(fs, runner, ExtractorBackend::NativeZip)
    }

    /// The backend in use.
    #[must_use]
    pub fn backend(&self) -> &ExtractorBackend {
        &self.backend
    }

    /// Extract `archive` into `dest`.
    ///
    /// # Errors
    ///
    /// Returns the first failure encountered; see the backend modules for the
    /// individual cases. Entries extracted before the failure remain on disk.
    pub fn extract(&self, archive: &FsPath, dest: &FsPath) -> Result<()> {
        match &self.backend {
            ExtractorBackend::NativeZip => native::extract(self.fs.as_ref(), archive, dest),
            ExtractorBackend::External { program, args } => external::extract(
                self.fs.as_ref(),
                self.runner.as_ref(),
                program,
                args,
                archive,
                dest,
            ),
        }
    }

    /// Extract and report only whether every entry was written.
    ///
    /// Failures are logged by [`ArchiveExtractor::extract`].
    pub fn try_extract(&self, archive: &FsPath, dest: &FsPath) -> bool {
        self.extract(archive, dest).is_ok()
    }
}

/// Create `path` and any missing parents, as an access failure on error.
fn create_dir_chain(fs: &dyn FileSystem, path: &FsPath) -> Result<()> {
    fs.create_dir_all(path).map_err(|source| {
        log::error!("cannot create directory {path}: {source}");
        Error::CreateDirectory {
            path: path.clone(),
            source,
        }
    })
}

