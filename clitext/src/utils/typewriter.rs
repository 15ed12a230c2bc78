//! # Typewriter Output
//!
//! Prints a message one character at a time, pausing between characters as if
//! someone were typing it. Separator characters (space, `_`, `-` and newline)
//! wait a fixed [`SPACE_TIMING`]. Every other character waits a random
//! `random_range(low..high) / divisor` seconds, 0.1 s or 0.2 s by default.
//!
//! A [`Typewriter`] is also a [`Sink`], so it can stand in for the console
//! when reading input:
//!
//! ```rust,no_run
//! use clitext::utils::{DesiredType, Prompt, Terminal, Typewriter};
//!
//! let mut terminal = Terminal::stdio();
//! let mut typewriter = Typewriter::stdout();
//! let name = terminal.read_with(&Prompt::new("Who goes there?", DesiredType::String), &mut typewriter)?;
//! # Ok::<(), clitext::Error>(())
//! ```
use crate::utils::sink::{Sink, SinkOptions};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

pub const TIMING_RANGE_LOW: u64 = 1;
pub const TIMING_RANGE_HIGH: u64 = 3;
pub const TIMING_DIVISOR: u64 = 10;
pub const SPACE_TIMING: Duration = Duration::from_millis(500);

const SEPARATORS: [char; 4] = [' ', '_', '-', '\n'];

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TypewriterConfig {
    /// Inclusive lower bound of the random tick count.
    pub range_low: u64,
    /// Exclusive upper bound of the random tick count.
    pub range_high: u64,
    /// Ticks per second.
    pub divisor: u64,
    pub separator_delay: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            range_low: TIMING_RANGE_LOW,
            range_high: TIMING_RANGE_HIGH,
            divisor: TIMING_DIVISOR,
            separator_delay: SPACE_TIMING,
        }
    }
}

impl TypewriterConfig {
    /// No pauses at all.
    pub fn instant() -> Self {
        Self {
            range_low: 0,
            range_high: 0,
            divisor: 1,
            separator_delay: Duration::ZERO,
        }
    }
}

pub struct Typewriter<W: Write> {
    writer: W,
    config: TypewriterConfig,
    rng: SmallRng,
}

impl Typewriter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Typewriter<W> {
    pub fn new(writer: W) -> Self {
        let mut thread_rng = rand::rng();

        Self {
            writer,
            config: TypewriterConfig::default(),
            rng: SmallRng::from_rng(&mut thread_rng),
        }
    }

    pub fn with_config(mut self, config: TypewriterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Types `message` character by character, then writes `end` in one go.
    pub fn type_out(&mut self, message: &str, end: &str) -> io::Result<()> {
        let mut buf = [0u8; 4];

        for c in message.chars() {
            let delay = self.delay_for(c);
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            self.writer.write_all(c.encode_utf8(&mut buf).as_bytes())?;
            self.writer.flush()?;
        }

        self.writer.write_all(end.as_bytes())?;
        self.writer.flush()
    }

    fn delay_for(&mut self, c: char) -> Duration {
        if SEPARATORS.contains(&c) {
            return self.config.separator_delay;
        }

        let TypewriterConfig {
            range_low,
            range_high,
            divisor,
            ..
        } = self.config;
        let ticks = if range_low < range_high {
            self.rng.random_range(range_low..range_high)
        } else {
            range_low
        };

        Duration::from_millis(ticks.saturating_mul(1000) / divisor.max(1))
    }
}

impl<W: Write> Sink for Typewriter<W> {
    fn emit(&mut self, message: &str, options: &SinkOptions) -> io::Result<()> {
        self.type_out(message, &options.end)
    }
}

/// Types `message` to stdout with the default timings, followed by a newline.
pub fn print_with_delay(message: &str) -> io::Result<()> {
    Typewriter::stdout().type_out(message, "\n")
}
