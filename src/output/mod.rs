//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `utils` - Line pieces (branch marker, indentation, placeholder text)
//! - `console` - Streaming formatter for console output

mod config;
mod console;
mod utils;

pub use config::OutputConfig;
pub use console::ConsoleFormatter;
pub use utils::{BRANCH, PERMISSION_DENIED, indent_prefix};
