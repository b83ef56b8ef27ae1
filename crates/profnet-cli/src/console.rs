//! Console input port.
//!
//! All keyboard input flows through an explicit [`Console`] value threaded
//! through the menu functions; there is no process-wide input stream.

use anyhow::Result;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use thiserror::Error;

/// Raised when the user closes the input stream (Ctrl-C / Ctrl-D); the
/// top-level loop turns it into a clean exit.
#[derive(Debug, Error)]
#[error("input stream closed")]
pub struct InputClosed;

pub struct Console {
    editor: DefaultEditor,
}

impl Console {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    /// Reads one line, trimmed. Non-empty lines land in the history.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim().to_string();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(&line);
                }
                Ok(trimmed)
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Err(InputClosed.into()),
            Err(err) => Err(err.into()),
        }
    }

    /// Reads a numeric menu choice, re-prompting until one parses.
    pub fn read_choice(&mut self) -> Result<u32> {
        loop {
            let line = self.read_line("Please make your choice: ")?;
            match line.parse() {
                Ok(choice) => return Ok(choice),
                Err(_) => println!("{}", "Your input is invalid!".red()),
            }
        }
    }

    /// Reads an integer id; `None` (with a printed hint) when it does not
    /// parse.
    pub fn read_id(&mut self, prompt: &str) -> Result<Option<i64>> {
        let line = self.read_line(prompt)?;
        match line.parse() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                println!("{}", "The id must be an integer.".red());
                Ok(None)
            }
        }
    }

    /// Reads a 1-based list index; `None` when it does not parse or is out
    /// of range.
    pub fn read_index(&mut self, prompt: &str, len: usize) -> Result<Option<usize>> {
        let line = self.read_line(prompt)?;
        match line.parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => Ok(Some(n - 1)),
            _ => {
                println!("{}", "That is not a number from the list.".red());
                Ok(None)
            }
        }
    }
}
