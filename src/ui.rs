// UI layer: the menu loop. It reads a choice and two operands through
// `input::Console`, hands them to `calculator`, and prints the outcome.
// The loop is generic over the reader/writer so the binary can pass
// stdin/stdout while tests pass in-memory buffers.

use crate::calculator::{ArithmeticError, Operation};
use crate::config::Settings;
use crate::input::{Console, InputError};
use crossterm::style::{style, Stylize};
use std::io::{self, Read, Write};
use thiserror::Error;

pub const CHOICE_PROMPT: &str = "Enter calculation choice : ";
pub const A_PROMPT: &str = "Enter the value of a : ";
pub const B_PROMPT: &str = "Enter the value of b : ";
pub const INVALID_CHOICE_MESSAGE: &str = "❌ Invalid menu choice. Try again.";
pub const REENTER_MESSAGE: &str = "Re - enter the values : ";
pub const EXIT_BANNER: &str = " ======= Exiting calculator ======= ";

/// What the user picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Compute(Operation),
}

impl TryFrom<i64> for MenuChoice {
    type Error = i64;

    /// Out-of-range numbers come back unchanged as the error.
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value == 0 {
            return Ok(MenuChoice::Exit);
        }
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.menu_number() == value)
            .map(MenuChoice::Compute)
            .ok_or(value)
    }
}

/// Anything that ends a session other than the user choosing exit.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to write to console: {0}")]
    Output(#[from] io::Error),
}

/// Optional colouring for error and notice lines.
#[derive(Debug, Clone, Copy, Default)]
struct Palette {
    color: bool,
}

impl Palette {
    fn error(&self, text: &str) -> String {
        if self.color {
            style(text).red().to_string()
        } else {
            text.to_string()
        }
    }

    fn notice(&self, text: &str) -> String {
        if self.color {
            style(text).yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn result(&self, value: i64) -> String {
        let text = format!("Result == {}", value);
        if self.color {
            style(text).green().to_string()
        } else {
            text
        }
    }
}

/// One interactive calculator run.
pub struct Session<R: Read, W> {
    console: Console<R, W>,
    palette: Palette,
}

impl<R: Read, W: Write> Session<R, W> {
    /// Uncoloured session that retries invalid input forever.
    pub fn new(reader: R, out: W) -> Self {
        Session {
            console: Console::new(reader, out),
            palette: Palette::default(),
        }
    }

    pub fn from_settings(reader: R, out: W, settings: &Settings) -> Self {
        Session {
            console: Console::new(reader, out).with_max_retries(settings.max_retries),
            palette: Palette {
                color: settings.use_color(),
            },
        }
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Run the menu loop until the user enters 0.
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            self.show_menu()?;
            let raw = self.console.read_integer(CHOICE_PROMPT)?;

            let op = match MenuChoice::try_from(raw) {
                Ok(MenuChoice::Exit) => {
                    log::debug!("exit requested");
                    writeln!(self.console.out(), "{}", EXIT_BANNER)?;
                    self.console.out().flush()?;
                    return Ok(());
                }
                Ok(MenuChoice::Compute(op)) => op,
                Err(n) => {
                    log::info!("menu choice {} out of range", n);
                    let line = self.palette.error(INVALID_CHOICE_MESSAGE);
                    writeln!(self.console.out(), "{}", line)?;
                    continue;
                }
            };

            log::debug!("selected {}", op);
            let value = self.compute(op)?;
            let line = self.palette.result(value);
            writeln!(self.console.out(), "{}", line)?;
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        let out = self.console.out();
        writeln!(out)?;
        writeln!(out, " ======= Calculator ======= ")?;
        for op in Operation::ALL {
            writeln!(out, " {}. {}", op.menu_number(), op.label())?;
        }
        writeln!(out, " 0. Exit")?;
        Ok(())
    }

    /// Read operands and apply `op`, asking for new operands after every
    /// zero-divisor failure until the computation succeeds.
    fn compute(&mut self, op: Operation) -> Result<i64, SessionError> {
        let (mut a, mut b) = self.read_operands()?;
        loop {
            match op.apply(a, b) {
                Ok(value) => {
                    log::debug!("{}({}, {}) = {}", op, a, b, value);
                    return Ok(value);
                }
                Err(err @ ArithmeticError::DivisionByZero(_)) => {
                    log::info!("{}({}, {}) failed: {}", op, a, b, err);
                    let line = self.palette.error(&format!("⚠️ Error: {}", err));
                    writeln!(self.console.out(), "{}", line)?;
                    let line = self.palette.notice(REENTER_MESSAGE);
                    writeln!(self.console.out(), "{}", line)?;
                    (a, b) = self.read_operands()?;
                }
            }
        }
    }

    fn read_operands(&mut self) -> Result<(i64, i64), InputError> {
        let a = self.console.read_integer(A_PROMPT)?;
        let b = self.console.read_integer(B_PROMPT)?;
        Ok((a, b))
    }
}

/// Run a calculator session over `reader`/`out` configured by `settings`.
/// Blocks until the user exits or the input fails.
pub fn main_menu<R: Read, W: Write>(
    reader: R,
    out: W,
    settings: &Settings,
) -> Result<(), SessionError> {
    let mut session = Session::from_settings(reader, out, settings);
    let outcome = session.run();
    if let Err(e) = &outcome {
        log::error!("session ended: {}", e);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn transcript(input: &str) -> (Result<(), SessionError>, String) {
        let mut session = Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let outcome = session.run();
        let text = String::from_utf8(session.into_output()).unwrap();
        (outcome, text)
    }

    #[test]
    fn menu_choice_mapping() {
        assert_eq!(MenuChoice::try_from(0), Ok(MenuChoice::Exit));
        assert_eq!(
            MenuChoice::try_from(1),
            Ok(MenuChoice::Compute(Operation::Add))
        );
        assert_eq!(
            MenuChoice::try_from(5),
            Ok(MenuChoice::Compute(Operation::Remainder))
        );
        assert_eq!(MenuChoice::try_from(6), Err(6));
        assert_eq!(MenuChoice::try_from(-1), Err(-1));
    }

    #[test]
    fn menu_lists_every_operation() {
        let (outcome, text) = transcript("0\n");
        assert!(outcome.is_ok());
        for op in Operation::ALL {
            assert!(text.contains(&format!(" {}. {}", op.menu_number(), op.label())));
        }
        assert!(text.contains(" 0. Exit"));
        assert!(text.trim_end().ends_with(EXIT_BANNER.trim()));
    }

    #[test]
    fn out_of_range_choice_redisplays_menu() {
        let (outcome, text) = transcript("9\n0\n");
        assert!(outcome.is_ok());
        assert_eq!(text.matches(INVALID_CHOICE_MESSAGE).count(), 1);
        assert_eq!(text.matches(" ======= Calculator ======= ").count(), 2);
        assert!(!text.contains(A_PROMPT));
    }

    #[test]
    fn zero_divisor_retries_same_operation() {
        let (outcome, text) = transcript("5\n4 0\n4 3\n0\n");
        assert!(outcome.is_ok());
        assert!(text.contains("⚠️ Error: Modulo by zero is not allowed"));
        assert!(text.contains(REENTER_MESSAGE));
        assert!(text.contains("Result == 1"));
        assert_eq!(text.matches(CHOICE_PROMPT).count(), 2);
    }

    #[test]
    fn closed_input_ends_with_error() {
        let (outcome, text) = transcript("1\n2\n");
        assert!(matches!(
            outcome,
            Err(SessionError::Input(InputError::Closed))
        ));
        assert!(!text.contains("Result =="));
    }

    #[test]
    fn colour_only_when_enabled() {
        let plain = Palette { color: false };
        assert_eq!(plain.result(3), "Result == 3");
        let coloured = Palette { color: true };
        assert!(coloured.result(3).contains("Result == 3"));
        assert!(coloured.error(INVALID_CHOICE_MESSAGE).contains(INVALID_CHOICE_MESSAGE));
    }
}
