//! Prompt abstraction for the operator session.
//!
//! All operator input flows through [`PromptSource`], so the session can be
//! driven by a real terminal in production and by a scripted list of answers
//! in tests or batch harnesses.

use crate::error::{InventoryError, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

pub trait PromptSource {
    /// Presents `prompt` and returns one line of operator input, without the
    /// trailing newline. End of input is an error: the session's re-prompt
    /// loops must not spin on a closed source.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Production prompt source: writes the prompt to stdout, reads from stdin.
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl StdinPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl PromptSource for StdinPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        std::io::stdout().flush()?;

        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(InventoryError::PromptExhausted);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Scripted prompt source: answers come from a fixed queue. Used by tests
/// and usable by any non-interactive harness.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub transcript: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }
}

impl PromptSource for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.transcript.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or(InventoryError::PromptExhausted)
    }
}
