//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, component construction and output
//! formatting.

use crate::error::CliError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use winfs::{
    ArchiveExtractor, CommandRunner, Config, ConfigBuilder, ExtractorBackend, FileSystem, FsPath,
    StdCommandRunner, StdFileSystem, SubstResolver,
};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// The user configuration directory comes from `--config-dir` when given.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// The filesystem used by every command.
pub fn filesystem() -> Arc<dyn FileSystem> {
    Arc::new(StdFileSystem)
}

/// The process runner used by every command.
pub fn runner() -> Arc<dyn CommandRunner> {
    Arc::new(StdCommandRunner)
}

/// Build an extractor with the backend chosen by configuration.
pub fn extractor(config: &Config) -> ArchiveExtractor {
    let fs = filesystem();
    let backend = ExtractorBackend::detect(&config.extractor.clone().unwrap_or_default(), fs.as_ref());
    ArchiveExtractor::new(fs, runner(), backend)
}

/// Build a subst resolver from configuration.
pub fn subst_resolver(config: &Config) -> SubstResolver {
    SubstResolver::from_config(runner(), &config.subst.clone().unwrap_or_default())
}

/// Convert a command-line path to an `FsPath`.
pub fn to_fs_path(path: &Path) -> FsPath {
    FsPath::from(path)
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: SystemTime) -> String {
    use chrono::{DateTime, Utc};
    let dt: DateTime<Utc> = ts.into();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Print a status line to stderr unless `--quiet` was given.
pub fn status(global: &GlobalOptions, message: &str) {
    if !global.quiet {
        eprintln!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_timestamp() {
        let ts = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        assert_eq!(format_timestamp(ts), "2023-11-14 22:13:20");
    }

    #[test]
    fn test_to_fs_path_normalizes() {
        assert_eq!(to_fs_path(Path::new("a//b")), FsPath::new("a/b"));
    }

    #[test]
    fn test_default_extractor_is_native() {
        let extractor = extractor(&Config::default());
        assert_eq!(extractor.backend(), &ExtractorBackend::NativeZip);
    }
}
