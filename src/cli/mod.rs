//! Command-line interface.
//!
//! Flags are parsed before the terminal is touched so `--version` and
//! argument errors print to a normal terminal.

pub mod args;
pub mod once;
pub mod version;

pub use args::{parse_args, CliCommand, CliOptions};
pub use once::{run_once, OnceReport};
pub use version::{handle_version_command, version_line, VERSION};
