//! TreeWalker - prints a directory tree depth-first as it goes

use std::path::Path;

use log::{debug, trace};

use crate::error::{Result, WalkError};

use super::config::WalkerConfig;
use super::source::{DirSource, FsSource};

/// Receives tree lines as the walker produces them.
pub trait TreeOutput {
    fn entry(&mut self, name: &str, is_dir: bool, indent: usize) -> std::io::Result<()>;

    /// Placeholder for a directory whose contents could not be listed.
    fn permission_denied(&mut self, indent: usize) -> std::io::Result<()>;
}

/// Counts collected during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub dirs: usize,
    pub files: usize,
    pub denied: usize,
}

/// Pre-order depth-first walker.
///
/// Each child is printed before its own children, and a subdirectory is
/// exhausted before its next sibling is printed. Uses O(depth) listings.
pub struct TreeWalker<S = FsSource> {
    config: WalkerConfig,
    source: S,
}

impl TreeWalker<FsSource> {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            source: FsSource,
        }
    }
}

impl<S: DirSource> TreeWalker<S> {
    /// Swap the directory source, e.g. for an in-memory one in tests.
    pub fn with_source<T: DirSource>(self, source: T) -> TreeWalker<T> {
        TreeWalker {
            config: self.config,
            source,
        }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walk the children of `root` starting at indent 0.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<WalkSummary> {
        self.walk_from(root, 0, output)
    }

    /// Walk the children of `root` with their lines indented by `indent`.
    pub fn walk_from<O: TreeOutput>(
        &self,
        root: &Path,
        indent: usize,
        output: &mut O,
    ) -> Result<WalkSummary> {
        let mut summary = WalkSummary::default();
        self.walk_dir(root, indent, output, &mut summary)?;
        Ok(summary)
    }

    fn walk_dir<O: TreeOutput>(
        &self,
        path: &Path,
        indent: usize,
        output: &mut O,
        summary: &mut WalkSummary,
    ) -> Result<()> {
        let entries = match self.source.list(path) {
            Ok(entries) => entries,
            Err(e) => {
                let err = WalkError::io(path, e);
                if !err.is_recoverable() {
                    return Err(err);
                }
                debug!("{}", err);
                output.permission_denied(indent)?;
                summary.denied += 1;
                return Ok(());
            }
        };
        trace!("listed {} ({} entries)", path.display(), entries.len());

        for entry in entries {
            if self.config.ignore.is_ignored(&entry.name) {
                trace!("skipping {}", entry.path.display());
                continue;
            }

            output.entry(&entry.display_name(), entry.is_dir, indent)?;

            if entry.is_dir {
                summary.dirs += 1;
                self.walk_dir(
                    &entry.path,
                    indent + self.config.indent_step,
                    output,
                    summary,
                )?;
            } else {
                summary.files += 1;
            }
        }

        Ok(())
    }
}
