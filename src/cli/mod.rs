// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, LogLevel, ShellCommand, DEFAULT_ACCOUNTS_FILE, DEFAULT_LIBRARY_FILE};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing subcommand, or --help), clap
/// prints an error or the help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
