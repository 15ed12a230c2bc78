//! # Terminal Input Helper
//!
//! Asks the user a question and keeps asking until the answer can be coerced
//! into the requested [`DesiredType`], or until the user cancels.
//!
//! Before coercion every line is checked against a tiny control protocol:
//!
//! - `?cancel?`, `cancel`, `cancel.` or an empty line cancels the prompt and
//!   [`Terminal::read`] returns `Ok(None)`. When the prompt does not allow
//!   cancelling, the entry is refused and the question is asked again.
//! - `?help?` or `?h?` prints the prompt's help text and asks again. A prompt
//!   without help text gets a fixed notice on the console instead, even when a
//!   custom sink was given.
//!
//! Refused entries are never returned. The user sees a notice and the same
//! question again, with no limit on the number of attempts.
//!
//! ## Usage
//!
//! ### Example 1: Integer input
//! ```rust,no_run
//! use clitext::utils::{DesiredType, Prompt, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! let prompt = Prompt::new("How old are you?", DesiredType::Integer)
//!     .with_help("Enter your age in years");
//!
//! match terminal.read(&prompt)? {
//!     Some(answer) => println!("Age: {}", answer),
//!     None => println!("Cancelled"),
//! }
//! # Ok::<(), clitext::Error>(())
//! ```
//!
//! ### Example 2: Custom type
//! ```rust,no_run
//! use clitext::utils::{CustomTypes, DesiredType, Prompt, Terminal};
//!
//! let types = CustomTypes::new().with("port", "Enter a port between 1 and 65535", |raw| {
//!     raw.parse::<u16>().ok().filter(|port| *port != 0)
//! });
//! let mut terminal = Terminal::stdio().with_custom_types(types);
//!
//! let prompt = Prompt::new("Listen on which port?", DesiredType::Custom("port".into()))
//!     .with_cancel(false);
//! let port = terminal.read(&prompt)?.and_then(|answer| answer.downcast::<u16>());
//! # Ok::<(), clitext::Error>(())
//! ```
use crate::check_type;
use crate::error::{Error, Result};
use crate::utils::custom::{CustomTypes, CustomValue};
use crate::utils::escape::expand;
use crate::utils::float::parse_float;
use crate::utils::sanitize::{
    ControlEntry, DesiredType, FLOAT_HELP, INT_HELP, Rejection, bool_help, parse_bool,
};
use crate::utils::sink::{Console, Sink, SinkOptions};
use std::any::Any;
use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::{debug, trace, warn};

/// Written to the console right before each line is read.
pub const INPUT_MARKER: &str = "for help enter '?help?'>>> ";

/// Written to the console when help is requested on a prompt without help text.
pub const HELP_NOT_FOUND: &str = "Help message not found.";

/// A single question and the rules its answer must follow.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub message: String,
    pub kind: DesiredType,
    pub can_cancel: bool,
    /// Expand literal `\n` and `\t` in string answers.
    pub allow_newlines: bool,
    pub help_message: Option<String>,
    pub sink_options: SinkOptions,
}

impl Prompt {
    /// A prompt that may be cancelled, expands escapes and has no help text.
    pub fn new(message: impl Into<String>, kind: DesiredType) -> Self {
        Self {
            message: message.into(),
            kind,
            can_cancel: true,
            allow_newlines: true,
            help_message: None,
            sink_options: SinkOptions::default(),
        }
    }

    pub fn with_cancel(mut self, can_cancel: bool) -> Self {
        self.can_cancel = can_cancel;
        self
    }

    pub fn with_newlines(mut self, allow_newlines: bool) -> Self {
        self.allow_newlines = allow_newlines;
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help_message = Some(help.into());
        self
    }

    pub fn with_sink_options(mut self, options: SinkOptions) -> Self {
        self.sink_options = options;
        self
    }

    /// Fills in the stock help text for the prompt's type, unless help is already set.
    ///
    /// Custom types use the help registered with their validator. Strings have no
    /// stock help.
    pub fn with_default_help(mut self, custom_types: &CustomTypes) -> Self {
        if self.help_message.is_none() {
            self.help_message = match &self.kind {
                DesiredType::Integer => Some(INT_HELP.to_string()),
                DesiredType::Float => Some(FLOAT_HELP.to_string()),
                DesiredType::Boolean => Some(bool_help()),
                DesiredType::String => None,
                DesiredType::Custom(name) => custom_types.help(name).map(str::to_string),
            };
        }
        self
    }
}

/// A coerced answer.
#[derive(Debug)]
pub enum Answer {
    Integer(i64),
    String(String),
    Boolean(bool),
    Float(f64),
    Custom(CustomValue),
}

impl Answer {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Takes the value out of a custom answer, `None` if the answer is not a `T`.
    pub fn downcast<T: Any>(self) -> Option<T> {
        match self {
            Self::Custom(value) => value.downcast::<T>().ok().map(|value| *value),
            _ => None,
        }
    }
}

impl Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{}", value),
            Self::String(value) => write!(f, "{}", value),
            Self::Boolean(value) => write!(f, "{}", value),
            Self::Float(value) => write!(f, "{}", value),
            Self::Custom(_) => write!(f, "<custom>"),
        }
    }
}

/// Reads typed answers from an input source.
///
/// The console is both the default sink for prompts and the fixed target of
/// the [`HELP_NOT_FOUND`] notice.
pub struct Terminal<R, W: Write> {
    input: R,
    console: Console<W>,
    custom_types: CustomTypes,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// A terminal over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            console: Console::new(output),
            custom_types: CustomTypes::default(),
        }
    }

    pub fn with_custom_types(mut self, custom_types: CustomTypes) -> Self {
        self.custom_types = custom_types;
        self
    }

    pub fn custom_types(&self) -> &CustomTypes {
        &self.custom_types
    }

    pub fn console(&self) -> &W {
        self.console.get_ref()
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.console.into_inner())
    }

    /// Asks `prompt` on the console until it is answered or cancelled.
    ///
    /// Returns `Ok(None)` on cancellation. Fails with
    /// [`Error::UnsupportedType`] when the prompt names a custom type that is
    /// not registered, and with [`Error::InputClosed`] when the input runs dry.
    pub fn read(&mut self, prompt: &Prompt) -> Result<Option<Answer>> {
        self.run(prompt, None)
    }

    /// Same as [`Terminal::read`], but prompts and notices go to `sink`.
    pub fn read_with(&mut self, prompt: &Prompt, sink: &mut dyn Sink) -> Result<Option<Answer>> {
        self.run(prompt, Some(sink))
    }

    fn run(&mut self, prompt: &Prompt, mut sink: Option<&mut dyn Sink>) -> Result<Option<Answer>> {
        loop {
            self.say(sink.as_deref_mut(), &prompt.message, &prompt.sink_options)?;
            let line = self.read_line()?;

            match ControlEntry::classify(&line) {
                Some(ControlEntry::Cancel) if prompt.can_cancel => {
                    trace!(kind = %prompt.kind, "prompt cancelled");
                    return Ok(None);
                }
                Some(ControlEntry::Cancel) => {
                    self.reject(sink.as_deref_mut(), prompt, Rejection::CancelNotAllowed)?;
                    continue;
                }
                Some(ControlEntry::Help) => {
                    trace!(kind = %prompt.kind, "help requested");
                    match &prompt.help_message {
                        Some(help) => self.say(sink.as_deref_mut(), help, &prompt.sink_options)?,
                        None => self.console.emit(HELP_NOT_FOUND, &prompt.sink_options)?,
                    }
                    continue;
                }
                None => {}
            }

            match self.coerce(prompt, line)? {
                Ok(answer) => return Ok(Some(answer)),
                Err(rejection) => self.reject(sink.as_deref_mut(), prompt, rejection)?,
            }
        }
    }

    fn coerce(&self, prompt: &Prompt, line: String) -> Result<std::result::Result<Answer, Rejection>> {
        let answer = match &prompt.kind {
            DesiredType::Custom(name) => {
                if !self.custom_types.contains(name) {
                    warn!(kind = %name, "no validator registered for custom type");
                    return Err(Error::UnsupportedType(name.clone()));
                }
                self.custom_types
                    .validate(name, &line)
                    .map(Answer::Custom)
                    .ok_or(Rejection::Custom)
            }
            DesiredType::Integer => {
                check_type!(line.trim(), i64, Rejection::Integer).map(Answer::Integer)
            }
            DesiredType::String if prompt.allow_newlines => Ok(Answer::String(expand(&line))),
            DesiredType::String => Ok(Answer::String(line)),
            DesiredType::Boolean => parse_bool(&line)
                .map(Answer::Boolean)
                .ok_or(Rejection::Boolean),
            DesiredType::Float => parse_float(&line).map(Answer::Float).map_err(|e| {
                debug!(error = %e, "float format");
                Rejection::Float
            }),
        };

        Ok(answer)
    }

    fn read_line(&mut self) -> Result<String> {
        self.console.write_raw(INPUT_MARKER)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }

    fn reject(
        &mut self,
        sink: Option<&mut (dyn Sink + '_)>,
        prompt: &Prompt,
        rejection: Rejection,
    ) -> Result<()> {
        debug!(kind = %prompt.kind, notice = %rejection, "entry rejected");
        self.say(sink, &rejection.to_string(), &prompt.sink_options)
    }

    fn say(
        &mut self,
        sink: Option<&mut (dyn Sink + '_)>,
        message: &str,
        options: &SinkOptions,
    ) -> Result<()> {
        match sink {
            Some(sink) => sink.emit(message, options)?,
            None => self.console.emit(message, options)?,
        }
        Ok(())
    }
}
