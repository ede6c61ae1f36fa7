//! Test utilities: temporary directory trees and an in-memory `DirSource`.
//!
//! This module is only compiled for tests and benchmarks.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::tree::{DirSource, ListedEntry};

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
enum MockListing {
    Entries(Vec<ListedEntry>),
    Fails(io::ErrorKind),
}

/// In-memory directory source.
///
/// Listings come back in exactly the order they were declared. Any path
/// that was never declared fails with `NotFound`.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    dirs: HashMap<PathBuf, MockListing>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a directory and its children as `(name, is_dir)` pairs.
    pub fn dir(mut self, path: &str, children: &[(&str, bool)]) -> Self {
        let path = PathBuf::from(path);
        let entries = children
            .iter()
            .map(|&(name, is_dir)| ListedEntry::new(name, path.join(name), is_dir))
            .collect();
        self.dirs.insert(path, MockListing::Entries(entries));
        self
    }

    /// Declare a directory whose listing fails with `kind`.
    pub fn failing(mut self, path: &str, kind: io::ErrorKind) -> Self {
        self.dirs.insert(PathBuf::from(path), MockListing::Fails(kind));
        self
    }
}

impl DirSource for MockSource {
    fn list(&self, dir: &Path) -> io::Result<Vec<ListedEntry>> {
        match self.dirs.get(dir) {
            Some(MockListing::Entries(entries)) => Ok(entries.clone()),
            Some(MockListing::Fails(kind)) => Err(io::Error::from(*kind)),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }
}
