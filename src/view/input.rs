//! Console prompts.
//!
//! Raw lines are parsed into typed values here; the game core only ever sees
//! sizes, [`Lane`]s and yes/no answers.

use std::io::{BufRead, Write};

use crate::error::InputError;
use crate::state::{validate_length, Lane};

/// Parse a bridge length typed by the player.
pub fn parse_bridge_size(line: &str) -> Result<usize, InputError> {
    let invalid = || InputError::InvalidSize(line.to_string());
    let size: usize = line.trim().parse().map_err(|_| invalid())?;
    validate_length(size).map_err(|_| invalid())?;
    Ok(size)
}

/// Parse a move: `U` or `D`.
pub fn parse_move(line: &str) -> Result<Lane, InputError> {
    line.trim()
        .parse()
        .map_err(|_| InputError::InvalidMove(line.to_string()))
}

/// Parse a retry answer: `Y` to retry, `N` to quit.
pub fn parse_retry(line: &str) -> Result<bool, InputError> {
    match line.trim() {
        "Y" => Ok(true),
        "N" => Ok(false),
        _ => Err(InputError::InvalidRetry(line.to_string())),
    }
}

/// Prompts the player and reads answers line by line.
pub struct InputView<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> InputView<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn ask_bridge_size(&mut self) -> Result<usize, InputError> {
        self.ask("Enter the bridge length.", parse_bridge_size)
    }

    pub fn ask_move(&mut self) -> Result<Lane, InputError> {
        self.ask("Choose the next lane. (up: U, down: D)", parse_move)
    }

    pub fn ask_retry(&mut self) -> Result<bool, InputError> {
        self.ask("Try again? (retry: Y, quit: N)", parse_retry)
    }

    /// Print `prompt` and keep asking until `parse` accepts a line.
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, InputError> {
        loop {
            writeln!(self.writer, "{prompt}")?;
            self.writer.flush()?;

            let line = self.read_line()?;
            match parse(&line) {
                Ok(value) => {
                    writeln!(self.writer)?;
                    return Ok(value);
                }
                Err(err) if err.is_recoverable() => {
                    tracing::debug!(input = %line.trim(), "rejected input");
                    writeln!(self.writer, "[ERROR] {err}")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn read_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(line)
    }
}
