use crate::shell::{RecordKind, ShellConfig};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Default data file of the bank shell
pub const DEFAULT_ACCOUNTS_FILE: &str = "accounts.txt";

/// Default data file of the library shell
pub const DEFAULT_LIBRARY_FILE: &str = "library.txt";

/// Menu-driven record keeping for bank accounts and library books
#[derive(Parser, Debug)]
#[command(name = "record-keeper")]
#[command(about = "Menu-driven record keeping for bank accounts and library books", long_about = None)]
pub struct CliArgs {
    /// Diagnostic log level (written to stderr)
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        global = true,
        help = "Diagnostic log level: trace, debug, info, warn or error"
    )]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Which shell to start
#[derive(Subcommand, Debug, Clone)]
pub enum ShellCommand {
    /// Bank account ledger
    Bank {
        #[arg(
            long = "file",
            value_name = "PATH",
            default_value = DEFAULT_ACCOUNTS_FILE,
            help = "File used by the save and load commands"
        )]
        file: PathBuf,
    },

    /// Library book catalog
    Library {
        #[arg(
            long = "file",
            value_name = "PATH",
            default_value = DEFAULT_LIBRARY_FILE,
            help = "File used by the save and load commands"
        )]
        file: PathBuf,
    },
}

/// Log levels accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Level spec understood by the logger backend
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl CliArgs {
    /// Build the shell configuration selected by the subcommand
    pub fn to_shell_config(&self) -> ShellConfig {
        match &self.command {
            ShellCommand::Bank { file } => ShellConfig::new(RecordKind::Bank, file.clone()),
            ShellCommand::Library { file } => ShellConfig::new(RecordKind::Library, file.clone()),
        }
    }
}
