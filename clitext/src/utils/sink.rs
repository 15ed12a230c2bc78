//! # Output Sinks
//!
//! Where prompts, help texts and rejection notices are written.
//!
//! A [`Sink`] receives one message at a time together with [`SinkOptions`].
//! The crate ships three kinds of sink:
//!
//! - [`Console`]: any `io::Write`, stdout by default.
//! - [`crate::utils::Typewriter`]: prints one character at a time.
//! - Any `FnMut(&str, &SinkOptions)` closure, handy for capturing output.
//!
//! ```rust
//! use clitext::utils::{Sink, SinkOptions};
//!
//! let mut lines = Vec::new();
//! let mut sink = |message: &str, _: &SinkOptions| lines.push(message.to_string());
//! sink.emit("hello", &SinkOptions::default()).unwrap();
//! assert_eq!(lines, ["hello"]);
//! ```
use std::io::{self, Stdout, Write};

/// Options forwarded to the sink with every message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SinkOptions {
    /// Written after the message.
    pub end: String,
    /// Flush the underlying writer after each message.
    pub flush: bool,
}

impl Default for SinkOptions {
    fn default() -> Self {
        Self {
            end: "\n".to_string(),
            flush: true,
        }
    }
}

pub trait Sink {
    fn emit(&mut self, message: &str, options: &SinkOptions) -> io::Result<()>;
}

impl<F> Sink for F
where
    F: FnMut(&str, &SinkOptions),
{
    fn emit(&mut self, message: &str, options: &SinkOptions) -> io::Result<()> {
        self(message, options);
        Ok(())
    }
}

/// A sink writing straight to an `io::Write`.
#[derive(Debug)]
pub struct Console<W: Write> {
    writer: W,
}

impl Console<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Writes `text` as is, without options.
    pub(crate) fn write_raw(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}

impl<W: Write> Sink for Console<W> {
    fn emit(&mut self, message: &str, options: &SinkOptions) -> io::Result<()> {
        self.writer.write_all(message.as_bytes())?;
        self.writer.write_all(options.end.as_bytes())?;
        if options.flush {
            self.writer.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_default_options() {
        let mut console = Console::new(Vec::new());
        console.emit("hello", &SinkOptions::default()).unwrap();
        assert_eq!(console.into_inner(), b"hello\n");
    }

    #[test]
    fn test_console_custom_end() {
        let mut console = Console::new(Vec::new());
        let options = SinkOptions {
            end: " | ".to_string(),
            flush: false,
        };
        console.emit("a", &options).unwrap();
        console.emit("b", &options).unwrap();
        assert_eq!(console.get_ref().as_slice(), b"a | b | ");
    }

    #[test]
    fn test_closure_sink_sees_options() {
        let mut seen = Vec::new();
        {
            let mut sink = |message: &str, options: &SinkOptions| {
                seen.push(format!("{}{}", message, options.end));
            };
            let options = SinkOptions {
                end: "!".to_string(),
                ..SinkOptions::default()
            };
            sink.emit("hi", &options).unwrap();
        }
        assert_eq!(seen, ["hi!"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_sink_options_deserialize_partial() {
        let options: SinkOptions = serde_json::from_str(r#"{"end": ""}"#).unwrap();
        assert_eq!(options.end, "");
        assert!(options.flush);
    }
}
