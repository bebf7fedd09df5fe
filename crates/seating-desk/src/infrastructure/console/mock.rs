//! Scripted dialog for testing.
//!
//! Replays a fixed sequence of answers, recording every prompt and message so
//! tests can assert on what the operator would have seen, without a terminal.

use std::collections::VecDeque;

use super::Dialog;

/// A [`Dialog`] that answers prompts from a script.
///
/// Each scripted answer is `Some(text)` for typed input or `None` for a
/// dismissed prompt.  Once the script runs out every prompt returns `None`,
/// which ends the form loop.
#[derive(Debug, Default)]
pub struct ScriptedDialog {
    answers: VecDeque<Option<String>>,
    prompts: Vec<String>,
    messages: Vec<String>,
}

impl ScriptedDialog {
    /// Creates a dialog that types each of `answers` in turn.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(|a| Some(a.into())).collect(),
            ..Self::default()
        }
    }

    /// Appends a typed answer.
    pub fn then_type(mut self, answer: impl Into<String>) -> Self {
        self.answers.push_back(Some(answer.into()));
        self
    }

    /// Appends a dismissed prompt.
    pub fn then_cancel(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every message shown so far, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Number of scripted answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Dialog for ScriptedDialog {
    fn prompt(&mut self, message: &str) -> Option<String> {
        self.prompts.push(message.to_string());
        self.answers.pop_front().flatten()
    }

    fn show_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
