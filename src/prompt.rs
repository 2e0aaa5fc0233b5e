// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::io::{BufRead, Write};
use std::num::NonZeroUsize;

use crate::errors::GenError;

pub const LENGTH_PROMPT: &str = "Enter the sequence length: ";
pub const ID_PROMPT: &str = "Enter the sequence ID: ";
pub const DESCRIPTION_PROMPT: &str = "Provide a description of the sequence: ";
pub const NAME_PROMPT: &str = "Enter your name: ";

/// Asks questions on `output` and reads one-line answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Shows `question` (no newline) and returns the answer with surrounding whitespace removed.
    pub fn ask(&mut self, question: &str) -> Result<String, GenError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GenError::InvalidInput(format!(
                "end of input at prompt '{}'",
                question.trim_end()
            )));
        }
        Ok(line.trim().to_string())
    }
}

/// Parses a sequence length. Anything that is not an integer, or is not positive, is rejected.
pub fn parse_length(text: &str) -> Result<NonZeroUsize, GenError> {
    let text = text.trim();
    let value: i64 = text.parse().map_err(|_| {
        GenError::InvalidInput(format!("'{}' is not an integer.", text))
    })?;
    if value <= 0 {
        return Err(GenError::InvalidInput(String::from(
            "Length must be a positive integer.",
        )));
    }
    usize::try_from(value)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| GenError::InvalidInput(format!("{} is too large a length.", value)))
}
