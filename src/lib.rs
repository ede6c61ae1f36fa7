//! Sapling - print a directory tree, minus the clutter

pub mod app;
pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use app::{AppConfig, Outcome, run};
pub use error::WalkError;
pub use output::{ConsoleFormatter, OutputConfig};
pub use tree::{
    DEFAULT_IGNORED, DirSource, FsSource, INDENT_STEP, IgnoreSet, ListedEntry, TreeOutput,
    TreeWalker, WalkSummary, WalkerConfig,
};
