//! Interactive input collection

use crate::config::PartialConfig;
use crate::error::{RangeDbError, RangeDbResult};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const FILE_PROMPT: &str = "Enter the path to the Excel file: ";
pub const RANGE_PROMPT: &str = "Enter the Excel range (e.g., A1:D10): ";
pub const DIRECTORY_PROMPT: &str = "Enter the directory to save the Access database: ";
pub const NAME_PROMPT: &str = "Enter the name of the Access database: ";
pub const SORT_PROMPT: &str = "Enter the sorting criteria (e.g., column name): ";

/// Asks for whichever of the five inputs are still missing, in order.
///
/// Answers are taken verbatim apart from the line terminator.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn complete(&mut self, mut partial: PartialConfig) -> RangeDbResult<PartialConfig> {
        if partial.file.is_none() {
            partial.file = Some(PathBuf::from(self.ask(FILE_PROMPT)?));
        }
        if partial.range.is_none() {
            partial.range = Some(self.ask(RANGE_PROMPT)?);
        }
        if partial.directory.is_none() {
            partial.directory = Some(PathBuf::from(self.ask(DIRECTORY_PROMPT)?));
        }
        if partial.database_name.is_none() {
            partial.database_name = Some(self.ask(NAME_PROMPT)?);
        }
        if partial.sort.is_none() {
            partial.sort = Some(self.ask(SORT_PROMPT)?);
        }
        Ok(partial)
    }

    fn ask(&mut self, prompt: &str) -> RangeDbResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(RangeDbError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("no answer for \"{}\"", prompt.trim_end()),
            )));
        }
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        Ok(answer.strip_suffix('\r').unwrap_or(answer).to_string())
    }
}
