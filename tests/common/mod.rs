// ABOUTME: Common utilities for integration tests
// ABOUTME: Provides a tempdir-backed fixture environment for documents and value files

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a document file and return its absolute path as a string.
    pub fn write_document(&self, name: &str, content: &str) -> String {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write document");
        path.to_string_lossy().into_owned()
    }

    /// Write a YAML value file and return its path.
    pub fn write_values(&self, content: &str) -> PathBuf {
        let path = self.path().join("values.yaml");
        fs::write(&path, content).expect("Failed to write value file");
        path
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }
}
