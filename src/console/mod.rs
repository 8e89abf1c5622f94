//! Console I/O for the interactive calculator
//!
//! `Console` wraps any reader/writer pair so the menu flow can be driven from
//! real stdin/stdout or from in-memory buffers in tests. It owns the
//! retry-until-valid loop around the pure validators in `crate::input`.

pub mod style;

use std::io::{BufRead, Write};

use tracing::debug;

pub use style::{paint, Tone};

use crate::error::{CalcError, CalcResult};
use crate::input::{parse_number, NumericInput};

/// Line-oriented console over a reader and a writer
pub struct Console<R, W> {
    reader: R,
    writer: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given reader and writer
    pub fn new(reader: R, writer: W, color: bool) -> Self {
        Self {
            reader,
            writer,
            color,
        }
    }

    /// Write one plain line
    pub fn line(&mut self, text: &str) -> CalcResult<()> {
        self.styled(Tone::Plain, text)
    }

    /// Write one empty line
    pub fn blank(&mut self) -> CalcResult<()> {
        writeln!(self.writer)?;
        Ok(())
    }

    /// Write one line in the given tone
    pub fn styled(&mut self, tone: Tone, text: &str) -> CalcResult<()> {
        writeln!(self.writer, "{}", paint(text, tone, self.color))?;
        Ok(())
    }

    /// Write "<label> <value>" with only the label styled
    pub fn labelled(&mut self, tone: Tone, label: &str, value: &str) -> CalcResult<()> {
        writeln!(self.writer, "{} {}", paint(label, tone, self.color), value)?;
        Ok(())
    }

    /// Write one error line
    pub fn error(&mut self, text: &str) -> CalcResult<()> {
        self.styled(Tone::Error, text)
    }

    /// Show `prompt` and read one trimmed line
    ///
    /// Returns `CalcError::EndOfInput` once the reader is exhausted.
    pub fn prompt(&mut self, prompt: &str) -> CalcResult<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Err(CalcError::EndOfInput);
        }
        Ok(input.trim().to_string())
    }

    /// Prompt until the answer parses as `T`
    ///
    /// Each rejected answer prints one error line and re-asks with
    /// "<field>: ".
    pub fn prompt_number<T: NumericInput>(&mut self, prompt: &str, field: &str) -> CalcResult<T> {
        let mut raw = self.prompt(prompt)?;
        loop {
            match parse_number::<T>(&raw) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(field, error = %err, "rejected numeric input");
                    self.error(&format!(
                        "Invalid input for {}. Please enter a valid {}.",
                        field,
                        T::KIND
                    ))?;
                    raw = self.prompt(&format!("{}: ", field))?;
                }
            }
        }
    }

    /// Show numbered options and prompt until `parse` accepts the answer
    ///
    /// An invalid answer prints `invalid` and redisplays the same options.
    pub fn prompt_choice<T>(
        &mut self,
        options: &[&str],
        prompt: &str,
        invalid: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> CalcResult<T> {
        loop {
            for (index, option) in options.iter().enumerate() {
                self.line(&format!("{}. {}", index + 1, option))?;
            }
            let answer = self.prompt(prompt)?;
            match parse(&answer) {
                Some(choice) => return Ok(choice),
                None => {
                    debug!(answer = %answer, "rejected menu selection");
                    self.error(invalid)?;
                }
            }
        }
    }

    /// Consume the console and hand back its writer
    pub fn into_writer(self) -> W {
        self.writer
    }
}
