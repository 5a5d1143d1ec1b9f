use crate::error::FinanceError;
use std::io::{BufRead, Write};

/// The prompt/read/report capability the calculators talk through.
pub trait Console {
    /// Shows `prompt` and returns the next line without its line ending.
    /// End of input is an error; there is nothing left to ask.
    fn read_line(&mut self, prompt: &str) -> Result<String, FinanceError>;

    fn report(&mut self, message: &str) -> Result<(), FinanceError>;
}

/// Line-oriented console over any reader/writer pair.
pub struct Terminal<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, FinanceError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(FinanceError::EndOfInput);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        Ok(trimmed.to_string())
    }

    fn report(&mut self, message: &str) -> Result<(), FinanceError> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }
}
