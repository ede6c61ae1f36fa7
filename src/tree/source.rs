//! Directory listing behind a trait, so the walker can run against
//! something other than the real filesystem.

use std::borrow::Cow;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    /// Base name, as returned by the listing.
    pub name: OsString,
    pub path: PathBuf,
    /// Follows symlinks: a link to a directory counts as a directory.
    pub is_dir: bool,
}

impl ListedEntry {
    pub fn new(name: impl Into<OsString>, path: impl Into<PathBuf>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_dir,
        }
    }

    /// Name for display; invalid UTF-8 is replaced lossily.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

/// Something that can list the immediate children of a directory.
pub trait DirSource {
    /// List `dir` in whatever order the backing store yields.
    fn list(&self, dir: &Path) -> io::Result<Vec<ListedEntry>>;
}

/// Lists directories on the real filesystem. Order is `read_dir` order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl DirSource for FsSource {
    fn list(&self, dir: &Path) -> io::Result<Vec<ListedEntry>> {
        std::fs::read_dir(dir)?
            .map(|entry| {
                let entry = entry?;
                let path = entry.path();
                let is_dir = path.is_dir();
                Ok(ListedEntry {
                    name: entry.file_name(),
                    path,
                    is_dir,
                })
            })
            .collect()
    }
}
