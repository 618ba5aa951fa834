//! Line-oriented console I/O
//!
//! Every read consumes a whole line, so no stray input is left behind between
//! prompts. Generic over the reader and writer so sessions can be scripted.

use std::io::{BufRead, Write};

use crate::core::error::{Result, WarError};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for free-form output
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Read one line without its line terminator.
    ///
    /// Returns `InputClosed` at end of input. A line that is not valid UTF-8
    /// is consumed whole and reported as `InvalidInput`.
    pub fn read_line(&mut self) -> Result<String> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(WarError::InputClosed);
        }
        while matches!(bytes.last(), Some(b'\n' | b'\r')) {
            bytes.pop();
        }
        String::from_utf8(bytes)
            .map_err(|_| WarError::InvalidInput("input is not valid UTF-8 text".into()))
    }

    /// Print `label` and read the answer
    pub fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompt until `parse` accepts the answer.
    ///
    /// Recoverable errors are shown to the player and the prompt repeats;
    /// anything else is returned.
    pub fn prompt_with<T, F>(&mut self, label: &str, mut parse: F) -> Result<T>
    where
        F: FnMut(&str) -> Result<T>,
    {
        loop {
            match self.prompt(label).and_then(|answer| parse(&answer)) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_recoverable() => {
                    tracing::debug!(label, error = %e, "rejected input");
                    writeln!(self.output, "{e}. Try again.")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Prompt for a whole number no smaller than `min`
    pub fn prompt_number(&mut self, label: &str, min: u32) -> Result<u32> {
        self.prompt_with(label, |answer| parse_number(answer, min))
    }

    /// Wait for the player to press Enter
    pub fn pause(&mut self) -> Result<()> {
        match self.prompt("\nPress Enter to continue...") {
            Ok(_) | Err(WarError::InvalidInput(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Parse a whole number, rejecting anything below `min`
pub fn parse_number(text: &str, min: u32) -> Result<u32> {
    let trimmed = text.trim();
    let value: u32 = trimmed
        .parse()
        .map_err(|_| WarError::InvalidInput(format!("'{trimmed}' is not a valid number")))?;
    if value < min {
        return Err(WarError::InvalidInput(format!(
            "{value} is too small (minimum {min})"
        )));
    }
    Ok(value)
}
