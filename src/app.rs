//! Interactive entry point: resolve a target under the root, then print it.

use std::io::BufRead;
use std::path::PathBuf;

use log::debug;
use termcolor::WriteColor;

use crate::error::Result;
use crate::output::ConsoleFormatter;
use crate::tree::{TreeWalker, WalkSummary, WalkerConfig};

pub const PROMPT: &str = "Enter the directory path to list its structure: ";

/// Inputs for a single run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory relative targets are resolved against.
    pub root: PathBuf,
    /// Target given up front; when `None` the user is prompted.
    pub target: Option<String>,
    pub walker: WalkerConfig,
}

impl AppConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            target: None,
            walker: WalkerConfig::default(),
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Printed(WalkSummary),
    /// Target was empty or did not exist; an error line was printed.
    Missing,
}

/// Print the root, obtain a target path, and print its tree.
///
/// A missing target is reported on `out` and is not an error.
pub fn run<R: BufRead, W: WriteColor>(
    config: &AppConfig,
    input: &mut R,
    out: &mut ConsoleFormatter<W>,
) -> Result<Outcome> {
    out.line(&format!("Current directory: {}", config.root.display()))?;

    let target = match &config.target {
        Some(target) => target.trim().to_string(),
        None => {
            out.prompt(PROMPT)?;
            let mut answer = String::new();
            input.read_line(&mut answer)?;
            answer.trim().to_string()
        }
    };

    let resolved = config.root.join(&target);
    debug!("target '{}' resolves to {}", target, resolved.display());

    if target.is_empty() || !resolved.exists() {
        out.line(&format!(
            "Error: The directory '{}' does not exist.",
            target
        ))?;
        return Ok(Outcome::Missing);
    }

    out.line(&format!("Directory structure of: {}", target))?;
    let summary = TreeWalker::new(config.walker.clone()).walk(&resolved, out)?;
    debug!(
        "printed {} directories, {} files, {} denied",
        summary.dirs, summary.files, summary.denied
    );
    Ok(Outcome::Printed(summary))
}
