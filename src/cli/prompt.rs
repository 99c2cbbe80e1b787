//! Sequential line prompts with typed parsing.
//!
//! Each prompt writes its question, flushes, reads one line and either
//! returns a typed value or a [`PromptError`] naming the field. Nothing is
//! coerced to a default.

use std::io::{BufRead, Write};

use alloy::primitives::utils::parse_ether;
use alloy::primitives::U256;
use thiserror::Error;

/// Errors raised at the input boundary.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Console error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before the question was answered.
    #[error("Input closed while waiting for {0}")]
    Closed(&'static str),

    #[error("Invalid {field} '{value}': {reason}")]
    Invalid {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// Parse an unsigned decimal integer.
pub fn parse_integer(field: &'static str, raw: &str) -> Result<U256, PromptError> {
    let value = raw.trim();
    let invalid = |reason: String| PromptError::Invalid {
        field,
        value: value.to_string(),
        reason,
    };

    if value.is_empty() {
        return Err(invalid("a whole number is required".to_string()));
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected a whole number".to_string()));
    }
    U256::from_str_radix(value, 10).map_err(|e| invalid(e.to_string()))
}

/// Parse a decimal ether amount into wei.
pub fn parse_wei(field: &'static str, raw: &str) -> Result<U256, PromptError> {
    let value = raw.trim();
    let invalid = |reason: String| PromptError::Invalid {
        field,
        value: value.to_string(),
        reason,
    };

    if value.is_empty() {
        return Err(invalid("an amount is required".to_string()));
    }
    if value.starts_with('-') {
        return Err(invalid("amount cannot be negative".to_string()));
    }
    parse_ether(value).map_err(|e| invalid(e.to_string()))
}

/// Question/answer loop over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask a question and return the answer without its line ending.
    pub fn ask(&mut self, field: &'static str, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed(field));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask a question whose answer must not be blank.
    pub fn ask_required(&mut self, field: &'static str, question: &str) -> Result<String, PromptError> {
        let answer = self.ask(field, question)?;
        if answer.trim().is_empty() {
            return Err(PromptError::Invalid {
                field,
                value: String::new(),
                reason: "a value is required".to_string(),
            });
        }
        Ok(answer)
    }

    pub fn ask_integer(&mut self, field: &'static str, question: &str) -> Result<U256, PromptError> {
        let answer = self.ask(field, question)?;
        parse_integer(field, &answer)
    }

    pub fn ask_wei(&mut self, field: &'static str, question: &str) -> Result<U256, PromptError> {
        let answer = self.ask(field, question)?;
        parse_wei(field, &answer)
    }

    /// Writer used for command output after the prompts.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
