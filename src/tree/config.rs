//! Configuration types for the tree walker

use super::filter::IgnoreSet;

/// Spaces added per level of nesting.
pub const INDENT_STEP: usize = 4;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Entry names skipped entirely (not printed, not descended into).
    pub ignore: IgnoreSet,
    pub indent_step: usize,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            ignore: IgnoreSet::default(),
            indent_step: INDENT_STEP,
        }
    }
}
