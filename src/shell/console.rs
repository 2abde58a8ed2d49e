//! Line-oriented prompting over any input and output stream
//!
//! The shells never touch stdin/stdout directly; they go through a
//! [`Console`] so that sessions can be driven from scripted input in tests.

use crate::shell::ShellError;
use crate::types::BoundedText;
use log::debug;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Prompting front end of a shell session
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Console { input, output }
    }

    /// Print one line
    pub fn say(&mut self, message: impl AsRef<str>) -> Result<(), ShellError> {
        writeln!(self.output, "{}", message.as_ref())?;
        Ok(())
    }

    /// Print a prompt and read the reply line without its line terminator
    ///
    /// # Errors
    ///
    /// `ShellError::InputClosed` at end of input.
    pub fn ask_line(&mut self, prompt: &str) -> Result<String, ShellError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::InputClosed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Ask for a text field, clamped to the record field bound
    pub fn ask_text(&mut self, prompt: &str) -> Result<BoundedText, ShellError> {
        self.ask_line(prompt).map(BoundedText::new)
    }

    /// Ask for a value parsed from the trimmed reply
    ///
    /// # Returns
    ///
    /// * `Ok(Some(T))` - The parsed value
    /// * `Ok(None)` - The reply did not parse; "Invalid input." was printed
    pub fn ask<T: FromStr>(&mut self, prompt: &str) -> Result<Option<T>, ShellError> {
        let reply = self.ask_line(prompt)?;
        match reply.trim().parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                debug!("unparsable reply {:?} to prompt {:?}", reply, prompt);
                self.say("Invalid input.")?;
                Ok(None)
            }
        }
    }

    /// Give back the output stream
    pub fn into_output(self) -> O {
        self.output
    }
}
