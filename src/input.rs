// Input module: the prompt-and-retry loop used for every integer the
// calculator asks for. Tokens come from a `ScannerAscii`, which splits any
// `Read` source on whitespace at the byte level, so the tests can drive it
// with in-memory buffers instead of a real terminal.

use scanner_rust::{ScannerAscii, ScannerError};
use std::io::{self, Read, Write};
use thiserror::Error;

/// Message printed after a token that is not an integer.
pub const INVALID_INPUT_MESSAGE: &str = "Enter valid input ";

#[derive(Error, Debug)]
pub enum InputError {
    #[error("input stream closed")]
    Closed,
    #[error("no valid integer after {0} attempts")]
    RetriesExhausted(u32),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<ScannerError> for InputError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::IOError(e) => InputError::Io(e),
            other => InputError::Io(io::Error::new(io::ErrorKind::InvalidData, other.to_string())),
        }
    }
}

/// Console pairs the token scanner with the output stream prompts go to.
pub struct Console<R: Read, W> {
    scanner: ScannerAscii<R>,
    out: W,
    max_retries: Option<u32>,
}

impl<R: Read, W: Write> Console<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Console {
            scanner: ScannerAscii::new(reader),
            out,
            max_retries: None,
        }
    }

    /// Cap the number of consecutive invalid tokens accepted per prompt.
    /// `None` retries forever.
    pub fn with_max_retries(mut self, max_retries: Option<u32>) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Show `prompt` and block until the user supplies an integer.
    ///
    /// A token that is not a whole `i64` (including bytes that are not
    /// UTF-8) prints `Enter valid input`, drops the rest of its line and
    /// prompts again. Tokens left on a line after a good read are kept for
    /// the next prompt.
    pub fn read_integer(&mut self, prompt: &str) -> Result<i64, InputError> {
        let mut failures: u32 = 0;
        loop {
            write!(self.out, "{}", prompt)?;
            self.out.flush()?;

            match self.scanner.next_i64() {
                Ok(Some(value)) => return Ok(value),
                Ok(None) => return Err(InputError::Closed),
                Err(ScannerError::IOError(e)) => return Err(InputError::Io(e)),
                Err(e) => {
                    failures += 1;
                    log::info!("rejected non-integer token: {} (attempt {})", e, failures);
                }
            }

            writeln!(self.out, "{}", INVALID_INPUT_MESSAGE)?;
            // Streams the rest of the line away without buffering it, so an
            // overlong bad line costs no memory.
            self.scanner.drop_next_line()?;

            if let Some(max) = self.max_retries {
                if failures >= max {
                    return Err(InputError::RetriesExhausted(failures));
                }
            }
        }
    }
}
