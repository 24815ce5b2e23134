use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;
use thiserror::Error;

/// Failures of the console itself, as opposed to the database behind it.
/// Both are fatal for the menu loop.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("standard input was closed")]
    Closed,
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Line-oriented prompt helper. Generic over its reader and writer so the
/// menu can be driven from a script in tests.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Write `text` without a newline and flush so prompts show up before
    /// the read blocks.
    pub fn msg(&mut self, text: &str) -> ConsoleResult<()> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn msgln(&mut self, text: &str) -> ConsoleResult<()> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    pub fn success(&mut self, text: &str) -> ConsoleResult<()> {
        writeln!(self.writer, "{}", text.green())?;
        Ok(())
    }

    pub fn failure(&mut self, text: &str) -> ConsoleResult<()> {
        writeln!(self.writer, "{}", text.red())?;
        Ok(())
    }

    /// Read one line with the line terminator removed.
    pub fn read_line(&mut self) -> ConsoleResult<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Prompt until the user types an integer inside `[min, max]`.
    pub fn read_int(&mut self, prompt: &str, min: i64, max: i64) -> ConsoleResult<i64> {
        loop {
            self.msg(prompt)?;
            let line = self.read_line()?;
            match line.trim().parse::<i64>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                Ok(_) => self.failure(&format!("The value must be between {min} and {max}."))?,
                Err(_) => self.failure("Please enter a whole number.")?,
            }
        }
    }

    /// Prompt until the user types an integer no lower than `min`.
    pub fn read_int_at_least(&mut self, prompt: &str, min: i64) -> ConsoleResult<i64> {
        self.read_int(prompt, min, i64::MAX)
    }

    /// Prompt until the user types a non-blank line; the answer is trimmed.
    pub fn read_text(&mut self, prompt: &str) -> ConsoleResult<String> {
        loop {
            self.msg(prompt)?;
            let line = self.read_line()?;
            let text = line.trim();
            if !text.is_empty() {
                return Ok(text.to_string());
            }
            self.failure("A value is required.")?;
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
