//! Line-oriented console input
//!
//! Everything the user types comes through here. Numeric fields follow a
//! parse-or-default policy: text that does not parse silently becomes zero,
//! so the rest of the crate only ever sees `Decimal` values.
//!
//! # Example
//!
//! ```
//! use bank_accounts::io::Console;
//! use std::io::Cursor;
//!
//! let mut out = Vec::new();
//! let mut console = Console::new(Cursor::new("Alice\nabc\n"), &mut out);
//!
//! assert_eq!(console.prompt("Holder: ").unwrap().as_deref(), Some("Alice"));
//! assert_eq!(console.prompt_decimal("Balance: ").unwrap(), Some(Default::default()));
//! assert_eq!(console.prompt("More: ").unwrap(), None);
//! ```

use crate::types::BankError;
use log::debug;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Parse a decimal, falling back to zero
///
/// Accepts plain (`12.5`) and scientific (`1.25e1`) notation, surrounded by
/// any whitespace.
pub fn parse_decimal_or_default(input: &str) -> Decimal {
    let trimmed = input.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or_else(|_| {
            debug!("Could not parse '{}' as a number, using 0", trimmed);
            Decimal::ZERO
        })
}

/// Strip the line terminator (`\n` or `\r\n`) and nothing else
fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// Prompting reader/writer pair
///
/// Generic over the streams so that a session can run against stdin/stdout
/// or against in-memory buffers.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Console { reader, writer }
    }

    /// Read one line without its terminator
    ///
    /// # Returns
    ///
    /// * `Ok(Some(line))` - A line was read (possibly empty)
    /// * `Ok(None)` - End of input
    /// * `Err(BankError::IoError)` - The stream failed
    pub fn read_line(&mut self) -> Result<Option<String>, BankError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        strip_line_ending(&mut line);
        Ok(Some(line))
    }

    /// Write `label` without a newline, flush, and read the answer
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>, BankError> {
        write!(self.writer, "{label}")?;
        self.writer.flush()?;
        self.read_line()
    }

    /// Prompt for an identifier; surrounding whitespace is ignored
    pub fn prompt_trimmed(&mut self, label: &str) -> Result<Option<String>, BankError> {
        Ok(self.prompt(label)?.map(|line| line.trim().to_string()))
    }

    /// Prompt for a number, applying the parse-or-default policy
    pub fn prompt_decimal(&mut self, label: &str) -> Result<Option<Decimal>, BankError> {
        Ok(self
            .prompt(label)?
            .map(|line| parse_decimal_or_default(&line)))
    }

    /// Write a full line
    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<(), BankError> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), BankError> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    #[rstest]
    #[case::integer("100", Decimal::from(100))]
    #[case::fraction("12.50", Decimal::new(1250, 2))]
    #[case::negative("-1", Decimal::from(-1))]
    #[case::padded("  7.5 \t", Decimal::new(75, 1))]
    #[case::scientific("1.5e2", Decimal::from(150))]
    #[case::empty("", Decimal::ZERO)]
    #[case::text("abc", Decimal::ZERO)]
    #[case::comma_separator("100,50", Decimal::ZERO)]
    fn test_parse_decimal_or_default(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(parse_decimal_or_default(input), expected);
    }

    #[test]
    fn test_read_line_strips_terminators_only() {
        let mut console = Console::new(Cursor::new("  Alice  \r\nBob\nlast"), Vec::new());

        assert_eq!(console.read_line().unwrap().as_deref(), Some("  Alice  "));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("Bob"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_prompt_writes_label() {
        let mut console = Console::new(Cursor::new("x\n"), Vec::new());
        console.prompt("Holder: ").unwrap();
        assert_eq!(console.into_writer(), b"Holder: ".to_vec());
    }

    #[test]
    fn test_prompt_trimmed() {
        let mut console = Console::new(Cursor::new(" FR123 \n"), Vec::new());
        assert_eq!(
            console.prompt_trimmed("IBAN: ").unwrap().as_deref(),
            Some("FR123")
        );
    }

    #[test]
    fn test_prompt_decimal_at_end_of_input() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        assert_eq!(console.prompt_decimal("Amount: ").unwrap(), None);
    }

    #[test]
    fn test_say_appends_newline() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.say("hello").unwrap();
        assert_eq!(String::from_utf8(console.into_writer()).unwrap(), "hello\n");
    }
}
