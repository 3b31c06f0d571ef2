//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers with isolated configuration
//! - Test data fixtures

use assert_cmd::Command;
use filetime::FileTime;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Environment variables that would leak host configuration into a test.
const WINFS_ENV_VARS: [&str; 6] = [
    "WINFS_CONFIG_DIR",
    "WINFS_SUBST_PROGRAM",
    "WINFS_SUBST_ARGS",
    "WINFS_EXTERNAL_EXTRACTOR",
    "WINFS_LIST_ORDER",
    "WINFS_LIST_PATTERN",
];

/// Test environment with an isolated configuration directory.
///
/// Commands run with the temporary directory as their working directory,
/// so project configuration written with [`TestEnv::write_project_config`]
/// is picked up and nothing from the host is.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the user configuration directory
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_dir = temp_path.join("winfs-config");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("winfs").expect("Failed to find winfs binary");
        for var in WINFS_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get a command builder with the configuration directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file and set its modification time to `unix_seconds`.
    pub fn write_file_at(&self, dir: &Path, name: &str, unix_seconds: i64) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, name).expect("Failed to write test file");
        filetime::set_file_mtime(&path, FileTime::from_unix_time(unix_seconds, 0))
            .expect("Failed to set mtime");
        path
    }

    /// Write `winfs.yaml` into the working directory.
    pub fn write_project_config(&self, yaml: &str) {
        std::fs::write(self.temp_path.join("winfs.yaml"), yaml)
            .expect("Failed to write project config");
    }

    /// Write a zip archive. `None` content adds a directory entry.
    pub fn write_zip(&self, name: &str, entries: &[(&str, Option<&str>)]) -> PathBuf {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (entry, content) in entries {
            match content {
                Some(text) => {
                    writer
                        .start_file(*entry, SimpleFileOptions::default())
                        .expect("Failed to start zip entry");
                    writer
                        .write_all(text.as_bytes())
                        .expect("Failed to write zip entry");
                }
                None => writer
                    .add_directory(*entry, SimpleFileOptions::default())
                    .expect("Failed to add zip directory"),
            }
        }
        let bytes = writer.finish().expect("Failed to finish zip").into_inner();
        let path = self.temp_path.join(name);
        std::fs::write(&path, bytes).expect("Failed to write zip");
        path
    }

    /// Run a command expected to succeed and return its stdout.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run winfs");

        assert!(
            output.status.success(),
            "winfs {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Six files `f1.go` .. `f6` written an hour apart, oldest first.
#[allow(dead_code)]
pub fn six_files(env: &TestEnv) -> PathBuf {
    let dir = env.create_dir("listing");
    let base = 1_700_000_000;
    for (i, name) in ["f1.go", "f2", "f3", "f4", "f5", "f6"].iter().enumerate() {
        let offset = i64::try_from(i).expect("small index") * 3600;
        env.write_file_at(&dir, name, base + offset);
    }
    dir
}
