//! Record Keeper CLI
//!
//! Menu-driven record keeping for bank accounts or library books.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- bank
//! cargo run -- bank --file /tmp/accounts.txt
//! cargo run -- --log-level debug library
//! ```
//!
//! The selected shell reads menu choices and arguments from stdin and prints
//! results to stdout. Diagnostics are logged to stderr.
//!
//! # Exit Codes
//!
//! - 0: Session ended by the exit command or end of input
//! - 1: Fatal error (allocation failure, broken stdin/stdout)

use log::error;
use record_keeper::cli;
use record_keeper::logging;
use record_keeper::shell;
use std::io;
use std::process;

fn main() {
    let args = cli::parse_args();

    // Keep the handle alive for the whole session
    let _logger = match logging::init_logging(args.log_level.as_str()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: {}", e);
            None
        }
    };

    let config = args.to_shell_config();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = shell::run(&config, stdin.lock(), stdout.lock()) {
        error!("session aborted: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
