//! CLI entry point for sapling

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use log::debug;
use termcolor::{ColorChoice, StandardStream};

use sapling::{AppConfig, ConsoleFormatter, OutputConfig, WalkerConfig};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sapling")]
#[command(about = "Print a directory tree, skipping VCS, editor and dependency clutter")]
#[command(version)]
struct Args {
    /// Directory to display (prompted for when omitted)
    path: Option<String>,

    /// Change into this directory first; relative paths resolve against it
    #[arg(long = "root", value_name = "DIR")]
    root: Option<PathBuf>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Enter `root` if one was given, then report the working directory.
fn resolve_root(root: Option<&Path>) -> io::Result<PathBuf> {
    if let Some(root) = root {
        std::env::set_current_dir(root)?;
    }
    std::env::current_dir()
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let root = resolve_root(args.root.as_deref()).unwrap_or_else(|e| {
        match &args.root {
            Some(dir) => eprintln!("sapling: cannot enter '{}': {}", dir.display(), e),
            None => eprintln!("sapling: cannot determine current directory: {}", e),
        }
        process::exit(1);
    });
    debug!("root is {}", root.display());

    let use_color = should_use_color(args.color);
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut formatter =
        ConsoleFormatter::new(StandardStream::stdout(choice), OutputConfig { use_color });

    let config = AppConfig {
        root,
        target: args.path,
        walker: WalkerConfig::default(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    if let Err(e) = sapling::run(&config, &mut input, &mut formatter) {
        eprintln!("sapling: {}", e);
        process::exit(1);
    }
}
