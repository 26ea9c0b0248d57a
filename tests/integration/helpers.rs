//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

/// A temporary config directory with files written into it.
pub struct TestConfigDir {
    /// Keeps the directory alive for the duration of the test.
    pub dir: TempDir,
}

impl TestConfigDir {
    /// Create an empty config directory
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Write `contents` to `name` inside the directory and return its path
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write config file");
        path
    }

    /// Path of `name` inside the directory, whether or not it exists
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
