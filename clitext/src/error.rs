//! Crate-level error type and `Result` alias.
//!
//! Bad user input never shows up here: it is reported to the user and the
//! prompt is asked again. These variants cover what a retry cannot fix,
//! either a mistake by the integrating program or a broken environment.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input stream closed before an answer was given")]
    InputClosed,

    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    #[error("Setting the terminal title is not implemented on {0}")]
    UnsupportedPlatform(&'static str),
}

/// Reasons [`crate::utils::parse_float`] refuses its input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FloatFormatError {
    #[error("Expected exactly one '.', found {0}")]
    Separator(usize),

    #[error("Invalid whole part: {0:?}")]
    Whole(String),

    #[error("Invalid fractional part: {0:?}")]
    Fraction(String),
}
