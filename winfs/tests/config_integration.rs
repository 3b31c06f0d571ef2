//! Integration tests for the configuration system.
//!
//! Tests that modify environment variables are marked with `#[serial]` to
//! ensure they run sequentially. Environment variables are process-global, so
//! concurrent access would cause race conditions.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use winfs::config::{ConfigBuilder, ListOrder};
use winfs::error::Error;

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}

fn clear_env() -> Vec<EnvGuard> {
    [
        "WINFS_SUBST_PROGRAM",
        "WINFS_SUBST_ARGS",
        "WINFS_EXTERNAL_EXTRACTOR",
        "WINFS_LIST_ORDER",
        "WINFS_LIST_PATTERN",
    ]
    .iter()
    .map(|key| EnvGuard::remove(key))
    .collect()
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
#[serial]
fn test_full_precedence_chain() {
    let _clean = clear_env();
    let user = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    write(
        user.path(),
        "config.yaml",
        "subst:\n  program: user\n  args: [/u]\nlisting:\n  order: date\n  pattern: user\n",
    );
    write(project.path(), "winfs.yaml", "subst:\n  program: project\nlisting:\n  pattern: project\n");
    write(project.path(), "winfs.local.yaml", "listing:\n  pattern: local\n");
    let _pattern = EnvGuard::new("WINFS_LIST_PATTERN", "env");

    let config = ConfigBuilder::new()
        .with_working_dir(project.path())
        .with_config_dir(user.path())
        .build()
        .unwrap();

    assert_eq!(config.subst_program(), "project");
    assert_eq!(config.subst.as_ref().unwrap().args, Some(vec!["/u".to_string()]));
    assert_eq!(config.list_order(), ListOrder::Date);
    assert_eq!(config.list_pattern(), "env");
}

#[test]
#[serial]
fn test_discovery_walks_up_from_subdirectory() {
    let _clean = clear_env();
    let project = TempDir::new().unwrap();
    let nested = project.path().join("src").join("deep");
    fs::create_dir_all(&nested).unwrap();
    write(project.path(), "winfs.yaml", "extractor:\n  external: /opt/7z\n");

    let config = ConfigBuilder::new()
        .with_working_dir(&nested)
        .with_config_dir(&nested)
        .build()
        .unwrap();

    assert_eq!(
        config.extractor.unwrap().external.as_deref(),
        Some("/opt/7z")
    );
}

#[test]
#[serial]
fn test_env_subst_args_split_on_whitespace() {
    let _clean = clear_env();
    let _args = EnvGuard::new("WINFS_SUBST_ARGS", "/a  /b");

    let config = ConfigBuilder::new().skip_files().build().unwrap();

    assert_eq!(
        config.subst.unwrap().args,
        Some(vec!["/a".to_string(), "/b".to_string()])
    );
}

#[test]
#[serial]
fn test_invalid_env_pattern_fails_validation() {
    let _clean = clear_env();
    let _pattern = EnvGuard::new("WINFS_LIST_PATTERN", "f[");

    let result = ConfigBuilder::new().skip_files().build();

    assert!(matches!(result, Err(Error::Validation { ref field, .. }) if field == "listing.pattern"));
}

#[test]
#[serial]
fn test_skip_env_ignores_variables() {
    let _clean = clear_env();
    let _program = EnvGuard::new("WINFS_SUBST_PROGRAM", "from-env");

    let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();

    assert_eq!(config.subst_program(), "subst");
}

#[test]
fn test_unknown_field_in_file_is_error() {
    let project = TempDir::new().unwrap();
    write(project.path(), "winfs.yaml", "subst:\n  program: x\nports: 5\n");

    let result = ConfigBuilder::new()
        .with_working_dir(project.path())
        .with_config_dir(project.path())
        .skip_env()
        .build();

    assert!(matches!(result, Err(Error::Configuration(_))));
}
