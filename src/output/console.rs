//! Console output formatter
//!
//! `ConsoleFormatter` writes tree lines as the walker reaches them, with no
//! buffering of its own. Colors only decorate; the text is the same either way.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::tree::TreeOutput;

use super::config::OutputConfig;
use super::utils::{BRANCH, PERMISSION_DENIED, indent_prefix};

/// Streams tree and status lines to any `WriteColor` sink.
pub struct ConsoleFormatter<W> {
    config: OutputConfig,
    out: W,
}

impl<W: WriteColor> ConsoleFormatter<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self { config, out }
    }

    /// Write a plain line such as a header or status message.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Write a prompt without a trailing newline and flush it.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_name(&mut self, name: &str, color: Option<&ColorSpec>) -> io::Result<()> {
        match color {
            Some(spec) if self.config.use_color => {
                self.out.set_color(spec)?;
                write!(self.out, "{}", name)?;
                self.out.reset()?;
            }
            _ => write!(self.out, "{}", name)?,
        }
        writeln!(self.out)
    }
}

impl<W: WriteColor> TreeOutput for ConsoleFormatter<W> {
    fn entry(&mut self, name: &str, is_dir: bool, indent: usize) -> io::Result<()> {
        write!(self.out, "{}{}", indent_prefix(indent), BRANCH)?;
        if is_dir {
            let spec = dir_spec();
            self.write_name(name, Some(&spec))
        } else {
            self.write_name(name, None)
        }
    }

    fn permission_denied(&mut self, indent: usize) -> io::Result<()> {
        write!(self.out, "{}{}", indent_prefix(indent), BRANCH)?;
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red));
        self.write_name(PERMISSION_DENIED, Some(&spec))
    }
}

fn dir_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Blue)).set_bold(true);
    spec
}
