//! Terminal front end for the seating desk.
//!
//! The form talks to the operator only through the [`Dialog`] trait: one call
//! to ask for a line of text, one to show a message.  That keeps the menu loop
//! in [`form`] independent of where the text comes from.
//!
//! # Testability
//!
//! [`TerminalDialog`] is generic over `BufRead` / `Write`, so it can run over
//! stdin/stdout or over in-memory buffers.  [`mock::ScriptedDialog`] replays a
//! fixed list of answers and records every message for assertions.

use std::io::{BufRead, Write};

use tracing::warn;

pub mod form;
pub mod mock;

/// Typing this on its own line dismisses the current prompt.
pub const CANCEL_TOKEN: &str = ":cancel";

/// Operator interaction used by the form.
pub trait Dialog {
    /// Shows `message` and waits for one line of input.
    ///
    /// Returns `None` when the operator cancels or input has ended.  An empty
    /// line is returned as `Some("")` so validation can report it.
    fn prompt(&mut self, message: &str) -> Option<String>;

    /// Shows an informational or error message.
    fn show_message(&mut self, message: &str);
}

/// A [`Dialog`] over a line reader and a writer (normally stdin / stdout).
pub struct TerminalDialog<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalDialog<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the writer, e.g. to inspect a buffer in tests.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Dialog for TerminalDialog<R, W> {
    fn prompt(&mut self, message: &str) -> Option<String> {
        if let Err(e) = write!(self.output, "{message} ").and_then(|()| self.output.flush()) {
            warn!("failed to write prompt: {e}");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let line = line.trim_end_matches(['\r', '\n']);
                if line.trim() == CANCEL_TOKEN {
                    None
                } else {
                    Some(line.to_string())
                }
            }
            Err(e) => {
                warn!("failed to read input: {e}");
                None
            }
        }
    }

    fn show_message(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{message}") {
            warn!("failed to write message: {e}");
        }
    }
}
