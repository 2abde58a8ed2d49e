//! Interactive shells
//!
//! Each shell prints a numbered menu, reads a choice and its arguments, runs
//! the matching operation on the session's store and prints one result.
//! Store errors are turned into advisory messages and the loop carries on;
//! only a failed allocation or a broken output stream ends the session early.
//!
//! - `console` - Prompting over generic input/output streams
//! - `bank` - Account ledger menu
//! - `library` - Book catalog menu

pub mod bank;
pub mod console;
pub mod library;

pub use bank::BankShell;
pub use console::Console;
pub use library::LibraryShell;

use crate::types::StoreError;
use log::{debug, info};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that end a shell session
#[derive(Debug, Error)]
pub enum ShellError {
    /// End of input; treated as a request to exit
    #[error("input closed")]
    InputClosed,

    /// Reading input or writing output failed
    #[error("console I/O error: {0}")]
    Console(#[from] std::io::Error),

    /// A fatal store error
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Record kind served by a shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Bank,
    Library,
}

/// Settings of one shell session
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub kind: RecordKind,

    /// File used by the save and load commands
    pub data_file: PathBuf,
}

impl ShellConfig {
    pub fn new(kind: RecordKind, data_file: impl Into<PathBuf>) -> Self {
        ShellConfig {
            kind,
            data_file: data_file.into(),
        }
    }
}

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A numbered menu of operations over one store
pub trait Menu {
    /// Heading printed above the entries
    const TITLE: &'static str;

    /// Entry labels; the last entry is always "Exit"
    const ENTRIES: &'static [&'static str];

    /// Run the operation for `choice`, which is in `1..ENTRIES.len()`
    fn dispatch<I, O>(
        &mut self,
        choice: usize,
        console: &mut Console<I, O>,
        data_file: &Path,
    ) -> Result<(), ShellError>
    where
        I: BufRead,
        O: Write;
}

/// Print an advisory for a store error, or hand back a fatal one
pub(crate) fn advise<I, O>(
    console: &mut Console<I, O>,
    error: StoreError,
    message: &str,
) -> Result<(), ShellError>
where
    I: BufRead,
    O: Write,
{
    if error.is_fatal() {
        return Err(error.into());
    }
    debug!("advisory: {}", error);
    console.say(message)
}

/// Drive `menu` until exit or end of input
pub fn run_menu<M, I, O>(
    menu: &mut M,
    console: &mut Console<I, O>,
    data_file: &Path,
) -> Result<(), ShellError>
where
    M: Menu,
    I: BufRead,
    O: Write,
{
    let exit_choice = M::ENTRIES.len();

    loop {
        print_menu::<M, I, O>(console)?;

        let choice = match console.ask_line("Enter your choice: ") {
            Ok(reply) => reply.trim().parse::<usize>().ok(),
            Err(ShellError::InputClosed) => {
                debug!("input closed, leaving {}", M::TITLE);
                break;
            }
            Err(e) => return Err(e),
        };

        let flow = match choice {
            Some(choice) if choice == exit_choice => Flow::Exit,
            Some(choice) if (1..exit_choice).contains(&choice) => {
                match menu.dispatch(choice, console, data_file) {
                    Ok(()) => Flow::Continue,
                    Err(ShellError::InputClosed) => Flow::Exit,
                    Err(e) => return Err(e),
                }
            }
            _ => {
                debug!("invalid menu choice {:?}", choice);
                console.say("Invalid choice. Please try again.")?;
                Flow::Continue
            }
        };

        if flow == Flow::Exit {
            break;
        }
    }

    console.say("Exiting program. Goodbye!")
}

fn print_menu<M, I, O>(console: &mut Console<I, O>) -> Result<(), ShellError>
where
    M: Menu,
    I: BufRead,
    O: Write,
{
    console.say("")?;
    console.say(format!("--- {} ---", M::TITLE))?;
    for (index, entry) in M::ENTRIES.iter().enumerate() {
        console.say(format!("{}. {}", index + 1, entry))?;
    }
    Ok(())
}

/// Run the shell selected by `config` over the given streams
///
/// The store starts empty and is dropped when the session ends.
pub fn run<I, O>(config: &ShellConfig, input: I, output: O) -> Result<(), ShellError>
where
    I: BufRead,
    O: Write,
{
    let mut console = Console::new(input, output);
    info!(
        "event=session_start kind={:?} data_file={}",
        config.kind,
        config.data_file.display()
    );

    let result = match config.kind {
        RecordKind::Bank => run_menu(&mut BankShell::new(), &mut console, &config.data_file),
        RecordKind::Library => {
            run_menu(&mut LibraryShell::new(), &mut console, &config.data_file)
        }
    };

    info!("event=session_end kind={:?} ok={}", config.kind, result.is_ok());
    result
}
