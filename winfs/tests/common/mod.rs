//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixtures for testing the winfs
//! library against real directories.

use std::fs;
use std::io::{self, Cursor, Write};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use filetime::FileTime;
use winfs::{CommandRunner, FsPath};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// The temporary directory as an `FsPath`.
#[allow(dead_code)]
pub fn fs_path(dir: &Path) -> FsPath {
    FsPath::from(dir)
}

/// Writes `content` to `dir/name` and sets its modification time to
/// `unix_seconds`.
#[allow(dead_code)]
pub fn write_file_at(dir: &Path, name: &str, content: &str, unix_seconds: i64) {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    filetime::set_file_mtime(&path, FileTime::from_unix_time(unix_seconds, 0)).unwrap();
}

/// Builds an in-memory zip archive. `None` content adds a directory entry.
#[allow(dead_code)]
pub fn build_zip(entries: &[(&str, Option<&str>)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        match content {
            Some(text) => {
                writer.start_file(*name, SimpleFileOptions::default()).unwrap();
                writer.write_all(text.as_bytes()).unwrap();
            }
            None => writer
                .add_directory(*name, SimpleFileOptions::default())
                .unwrap(),
        }
    }
    writer.finish().unwrap().into_inner()
}

/// A command runner that replays canned output and counts its calls.
#[allow(dead_code)]
pub struct FakeRunner {
    output: io::Result<String>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl FakeRunner {
    /// A runner whose every call prints `output`.
    pub fn printing(output: &str) -> Self {
        Self {
            output: Ok(output.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// A runner whose every call fails.
    pub fn failing() -> Self {
        Self {
            output: Err(io::Error::from(io::ErrorKind::NotFound)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, _program: &str, _args: &[String]) -> io::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.output {
            Ok(text) => Ok(text.clone()),
            Err(e) => Err(io::Error::new(e.kind(), e.to_string())),
        }
    }
}
