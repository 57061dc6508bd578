use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

use crate::interpreter::value::core::Value;

/// The input and output streams behind the `read` and `write` built-ins.
pub trait Console {
    /// Returns the next whitespace-separated number from the input.
    ///
    /// # Errors
    /// `UnexpectedEof` when the input is exhausted, `InvalidData` when the
    /// next token is not a number, or any error of the underlying stream.
    fn read_number(&mut self) -> io::Result<f64>;

    /// Writes a value followed by a newline.
    fn write_value(&mut self, value: &Value) -> io::Result<()>;
}

/// Splits input into numeric tokens, refilling from a line source on demand.
#[derive(Debug, Default)]
struct TokenBuffer {
    pending: VecDeque<String>,
}

impl TokenBuffer {
    fn next_number(&mut self,
                   mut refill: impl FnMut(&mut String) -> io::Result<usize>)
                   -> io::Result<f64> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if refill(&mut line)? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
            }

            self.pending.extend(line.split_whitespace().map(str::to_string));
        }

        let token = self.pending.pop_front().unwrap_or_default();
        token.parse().map_err(|_| {
                         io::Error::new(io::ErrorKind::InvalidData,
                                        format!("'{token}' is not a number"))
                     })
    }
}

/// Reads from standard input and writes to standard output.
#[derive(Debug, Default)]
pub struct StdConsole {
    tokens: TokenBuffer,
}

impl StdConsole {
    /// Creates a console over the process's standard streams.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Console for StdConsole {
    fn read_number(&mut self) -> io::Result<f64> {
        io::stdout().flush()?;
        self.tokens.next_number(|line| io::stdin().lock().read_line(line))
    }

    fn write_value(&mut self, value: &Value) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{value}")?;
        out.flush()
    }
}

/// An in-memory console with scripted input and captured output.
///
/// # Example
/// ```
/// use seqfn::interpreter::{
///     console::{BufferConsole, Console},
///     value::core::Value,
/// };
///
/// let mut console = BufferConsole::with_input("4 2.5");
/// assert_eq!(console.read_number().unwrap(), 4.0);
///
/// console.write_value(&Value::Scalar(1.5)).unwrap();
/// assert_eq!(console.output(), "1.5\n");
/// ```
#[derive(Debug, Default)]
pub struct BufferConsole {
    input:  VecDeque<String>,
    tokens: TokenBuffer,
    output: String,
}

impl BufferConsole {
    /// Creates a console whose input is the given text.
    #[must_use]
    pub fn with_input(input: &str) -> Self {
        Self { input: input.lines().map(str::to_string).collect(),
               ..Self::default() }
    }

    /// Everything written so far.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Discards the captured output and returns it.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl Console for BufferConsole {
    fn read_number(&mut self) -> io::Result<f64> {
        let input = &mut self.input;
        self.tokens.next_number(|line| {
                       Ok(input.pop_front().map_or(0, |next| {
                                               line.push_str(&next);
                                               line.push('\n');
                                               line.len()
                                           }))
                   })
    }

    fn write_value(&mut self, value: &Value) -> io::Result<()> {
        use std::fmt::Write as _;

        writeln!(self.output, "{value}").map_err(io::Error::other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_span_lines() {
        let mut console = BufferConsole::with_input("1 2\n\n3");

        assert_eq!(console.read_number().unwrap(), 1.0);
        assert_eq!(console.read_number().unwrap(), 2.0);
        assert_eq!(console.read_number().unwrap(), 3.0);
        assert_eq!(console.read_number().unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn non_numeric_token_is_invalid_data() {
        let mut console = BufferConsole::with_input("abc");
        assert_eq!(console.read_number().unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn output_is_captured() {
        let mut console = BufferConsole::default();
        console.write_value(&Value::from(vec![Value::Scalar(1.0)])).unwrap();

        assert_eq!(console.take_output(), "[1]\n");
        assert_eq!(console.output(), "");
    }
}
