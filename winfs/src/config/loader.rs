//! Locating and parsing configuration files.
//!
//! User configuration lives in one directory; project configuration is the
//! nearest directory at or above the working directory that holds
//! `winfs.yaml` or `winfs.local.yaml`.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::FsPath;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the shared project configuration.
pub const PROJECT_CONFIG_FILE: &str = "winfs.yaml";

/// File name of the private project configuration.
pub const LOCAL_CONFIG_FILE: &str = "winfs.local.yaml";

/// File name of the user configuration inside the config directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

const USER_PRECEDENCE: u8 = 1;
const PROJECT_PRECEDENCE: u8 = 2;
const LOCAL_PRECEDENCE: u8 = 3;

/// A parsed configuration file and where it ranks.
///
/// ```
/// use std::path::PathBuf;
/// use winfs::config::ConfigSource;
///
/// let source = ConfigSource {
///     path: PathBuf::from("winfs.yaml"),
///     precedence: 2,
///     config: Default::default(),
/// };
/// assert!(source.config.subst.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// File the configuration was read from.
    pub path: PathBuf,
    /// Rank among sources; higher overrides lower.
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Finds and reads configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Every configuration file that applies to `working_dir`, lowest
    /// precedence first.
    ///
    /// The user file is read from `config_dir`, or from `~/.winfs` when it
    /// is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, config_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources: Vec<ConfigSource> = Self::user_source(config_dir)?.into_iter().collect();
        sources.extend(Self::discover_project_configs(working_dir)?);
        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    fn user_source(config_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let Some(dir) = config_dir.map(Path::to_path_buf).or_else(Self::default_config_dir) else {
            log::debug!("no home directory, skipping user configuration");
            return Ok(None);
        };
        Self::source_if_present(dir.join(USER_CONFIG_FILE), USER_PRECEDENCE)
    }

    fn source_if_present(path: PathBuf, precedence: u8) -> Result<Option<ConfigSource>> {
        if !path.is_file() {
            return Ok(None);
        }
        let config = Self::load_file(&path)?;
        Ok(Some(ConfigSource {
            path,
            precedence,
            config,
        }))
    }

    /// Project files from the nearest directory at or above `start_dir`
    /// holding either `winfs.yaml` or `winfs.local.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        for dir in start_dir.ancestors() {
            let mut found = Vec::new();
            for (name, precedence) in [
                (PROJECT_CONFIG_FILE, PROJECT_PRECEDENCE),
                (LOCAL_CONFIG_FILE, LOCAL_PRECEDENCE),
            ] {
                found.extend(Self::source_if_present(dir.join(name), precedence)?);
            }
            if !found.is_empty() {
                return Ok(found);
            }
        }
        Ok(Vec::new())
    }

    /// Parse one YAML file.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPath` if the file cannot be read and
    /// `Error::Configuration` if the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: FsPath::from(path),
            reason: format!("failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            log::error!("invalid configuration in {}: {e}", path.display());
            Error::Configuration(e)
        })
    }

    /// `~/.winfs`, if a home directory is known.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(".winfs"))
    }
}
