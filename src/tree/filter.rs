//! Name-based filtering for tree walking

use std::ffi::OsStr;

/// Names hidden from every listing: VCS metadata, editor settings,
/// environment files and dependency caches.
pub const DEFAULT_IGNORED: &[&str] = &[
    ".git",
    ".DS_Store",
    ".vscode",
    ".idea",
    ".env",
    ".env.local",
    ".env.development",
    ".env.production",
    ".env.test",
    ".env.development.local",
    ".env.production.local",
    ".env.test.local",
    "node_modules",
];

/// A fixed set of literal entry names.
///
/// Matching is exact and case-sensitive against an entry's base name,
/// never its full path. No globbing, no prefixes.
#[derive(Debug, Clone, Copy)]
pub struct IgnoreSet {
    names: &'static [&'static str],
}

impl IgnoreSet {
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    /// An ignore set that lets everything through.
    pub const fn empty() -> Self {
        Self::new(&[])
    }

    /// Check if an entry with this base name should be skipped.
    pub fn is_ignored(&self, name: &OsStr) -> bool {
        self.names.iter().any(|ignored| OsStr::new(ignored) == name)
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORED)
    }
}
