//! # clitext
//!
//! Typed, validated terminal input for CLI applications.
//!
//! ## Features
//!
//! - **Typed prompts** - Ask for an integer, string, boolean, float or a
//!   caller-defined custom type and get a value of that type back
//! - **Retry loop** - Refused entries are reported and the question is asked again
//! - **In-band control** - Users type `?help?` for help or `cancel` to back out
//! - **Escape expansion** - `\n` and `\t` typed on one line become real newlines and tabs
//! - **Output sinks** - Prompts go to stdout, any `io::Write`, a closure, or a typewriter
//! - **Terminal title** - Cross-platform window title setting
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! clitext = "0.1"
//! clitext = { version = "0.1", features = ["serde"] }
//! ```
//!
//! ## Usage Examples
//!
//! ### Basic typed input
//!
//! ```rust,no_run
//! use clitext::utils::{DesiredType, Prompt, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//!
//! let threads = terminal.read(
//!     &Prompt::new("How many threads?", DesiredType::Integer).with_cancel(false),
//! )?;
//! let verbose = terminal.read(&Prompt::new("Verbose output? (y/n)", DesiredType::Boolean))?;
//!
//! println!("{:?} {:?}", threads, verbose);
//! # Ok::<(), clitext::Error>(())
//! ```
//!
//! ### Control entries
//!
//! | typed                                 | effect                                   |
//! |---------------------------------------|------------------------------------------|
//! | `?cancel?`, `cancel`, `cancel.`, empty | returns `Ok(None)` if cancelling is allowed |
//! | `?help?`, `?h?`                       | prints the help text and asks again      |
//!
//! Matching ignores case but is otherwise exact.
//!
//! ### Custom types
//!
//! ```rust,no_run
//! use clitext::utils::{CustomTypes, DesiredType, Prompt, Terminal};
//!
//! let types = CustomTypes::new().with("hex", "Enter a hexadecimal byte", |raw| {
//!     u8::from_str_radix(raw, 16).ok()
//! });
//! let mut terminal = Terminal::stdio().with_custom_types(types);
//!
//! let prompt = Prompt::new("Pick a byte", DesiredType::Custom("hex".into()))
//!     .with_default_help(terminal.custom_types());
//! let byte = terminal.read(&prompt)?.and_then(|answer| answer.downcast::<u8>());
//! # Ok::<(), clitext::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Bad input is never an error, it is retried. Errors are reserved for problems
//! a retry cannot fix:
//!
//! ```rust,no_run
//! use clitext::Error;
//! use clitext::utils::{DesiredType, Prompt, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! match terminal.read(&Prompt::new("Port?", DesiredType::Custom("port".into()))) {
//!     Ok(Some(answer)) => println!("{}", answer),
//!     Ok(None) => println!("cancelled"),
//!     Err(Error::UnsupportedType(name)) => eprintln!("no validator for {}", name),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (rejections at `debug`, control entries at
//! `trace`) and leaves installing a subscriber to the application.
//!
//! ## License
//!
//! This project is licensed under the MIT License.

pub mod error;
pub use error::{Error, FloatFormatError, Result};

pub mod utils;
