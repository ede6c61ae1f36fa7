//! Directory tree walking logic
//!
//! `TreeWalker` lists a directory through a `DirSource`, drops names in the
//! `IgnoreSet`, and hands each remaining entry to a `TreeOutput` before
//! descending into it.

mod config;
mod filter;
mod source;
mod walker;

pub use config::{INDENT_STEP, WalkerConfig};
pub use filter::{DEFAULT_IGNORED, IgnoreSet};
pub use source::{DirSource, FsSource, ListedEntry};
pub use walker::{TreeOutput, TreeWalker, WalkSummary};
