//! # Input Classification & Coercion
//!
//! Everything [`crate::utils::Terminal`] needs to decide what a raw line of
//! user input means:
//!
//! - [`ControlEntry`] recognises the in-band control tokens (cancel and help).
//! - [`DesiredType`] selects how a line is coerced into a typed value.
//! - The boolean lexicon maps words such as `yes` or `nah` to a `bool`.
//! - [`Rejection`] carries the notice shown to the user when a line is refused.
//!
//! All matching against fixed token lists is case-insensitive and exact: the
//! line is lower-cased and compared as a whole, never by prefix or substring.
//!
//! ## Example
//! ```rust
//! use clitext::utils::{ControlEntry, parse_bool};
//!
//! assert_eq!(ControlEntry::classify("?HELP?"), Some(ControlEntry::Help));
//! assert_eq!(ControlEntry::classify(""), Some(ControlEntry::Cancel));
//! assert_eq!(parse_bool("Nope"), Some(false));
//! ```
use std::fmt::Display;

/// Tokens that abort the current prompt.
pub const CANCEL_ENTRIES: [&str; 4] = ["?cancel?", "cancel", "", "cancel."];

/// Tokens that ask for the help text of the current prompt.
pub const HELP_ENTRIES: [&str; 2] = ["?help?", "?h?"];

/// Words read as `false`.
pub const NO_ENTRIES: [&str; 6] = ["n", "no", "nope", "0", "false", "nah"];

/// Words read as `true`.
pub const YES_ENTRIES: [&str; 6] = ["y", "yes", "yeah", "1", "true", "yup"];

pub const INT_HELP: &str = "Enter a number with out a decimal point";

pub const FLOAT_HELP: &str =
    "Enter a number with a decimal point. if it has no decimal place end with .0";

/// Help text listing every accepted boolean word.
pub fn bool_help() -> String {
    let entries: Vec<String> = NO_ENTRIES
        .iter()
        .chain(YES_ENTRIES.iter())
        .map(|entry| format!("\t'{}'", entry))
        .collect();

    format!("enter one of the following: [\n{}]", entries.join(", \n"))
}

/// An in-band control request typed by the user instead of an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEntry {
    Cancel,
    Help,
}

impl ControlEntry {
    /// Returns the control request `input` stands for, if any.
    ///
    /// Cancel tokens are checked first, so a line can never be both.
    pub fn classify(input: &str) -> Option<ControlEntry> {
        let lowered = input.to_lowercase();

        if CANCEL_ENTRIES.contains(&lowered.as_str()) {
            Some(ControlEntry::Cancel)
        } else if HELP_ENTRIES.contains(&lowered.as_str()) {
            Some(ControlEntry::Help)
        } else {
            None
        }
    }
}

/// Maps a boolean word to its value, `None` when the word is not in the lexicon.
pub fn parse_bool(input: &str) -> Option<bool> {
    let lowered = input.to_lowercase();

    if NO_ENTRIES.contains(&lowered.as_str()) {
        Some(false)
    } else if YES_ENTRIES.contains(&lowered.as_str()) {
        Some(true)
    } else {
        None
    }
}

/// The type a prompt's answer is coerced into.
///
/// - `Integer`: base-10 signed integer (`i64`).
/// - `String`: free text, with optional `\n` / `\t` escape expansion.
/// - `Boolean`: a word from the boolean lexicon.
/// - `Float`: a number with exactly one decimal point, see [`crate::utils::parse_float`].
/// - `Custom`: the name of a validator registered in [`crate::utils::CustomTypes`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DesiredType {
    Integer,
    String,
    Boolean,
    Float,
    Custom(String),
}

impl Display for DesiredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "int"),
            Self::String => write!(f, "str"),
            Self::Boolean => write!(f, "bool"),
            Self::Float => write!(f, "flt"),
            Self::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// Why an entry was refused.
///
/// The `Display` output is the exact notice written to the prompt's sink
/// before the question is asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    CancelNotAllowed,
    Integer,
    Boolean,
    Float,
    Custom,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CancelNotAllowed | Self::Float => write!(f, "invalid entry. try again"),
            Self::Integer | Self::Custom => write!(f, "Invalid entry. Try again"),
            Self::Boolean => write!(f, "invalid entry. try again."),
        }
    }
}

/// Parses `$input` into `$t`, mapping any parse failure to `$err`.
/// Expands into a `Result<$t, _>`.
///
/// # Example
/// ```rust,ignore
/// let value = check_type!("42", i64, Rejection::Integer)?;
/// ```
#[macro_export]
macro_rules! check_type {
    ($input:expr, $t:ty, $err:expr) => {
        match $input.parse::<$t>() {
            Ok(value) => Ok(value),
            Err(_) => Err($err),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_cancel_tokens() {
        for token in ["?cancel?", "CANCEL", "Cancel.", ""] {
            assert_eq!(ControlEntry::classify(token), Some(ControlEntry::Cancel));
        }
    }

    #[test]
    fn test_classify_help_tokens() {
        assert_eq!(ControlEntry::classify("?help?"), Some(ControlEntry::Help));
        assert_eq!(ControlEntry::classify("?H?"), Some(ControlEntry::Help));
    }

    #[test]
    fn test_classify_is_exact_match() {
        assert_eq!(ControlEntry::classify("cancel now"), None);
        assert_eq!(ControlEntry::classify("?help"), None);
        assert_eq!(ControlEntry::classify(" cancel"), None);
        assert_eq!(ControlEntry::classify("42"), None);
    }

    #[test]
    fn test_parse_bool_lexicon() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("yup"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("Nope"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool("yes "), None);
    }

    #[test]
    fn test_bool_help_lists_every_entry() {
        let help = bool_help();
        assert!(help.starts_with("enter one of the following: [\n\t'n', \n"));
        assert!(help.ends_with("\t'yup']"));
        for entry in NO_ENTRIES.iter().chain(YES_ENTRIES.iter()) {
            assert!(help.contains(&format!("'{}'", entry)));
        }
    }

    #[test]
    fn test_rejection_notices() {
        assert_eq!(format!("{}", Rejection::Integer), "Invalid entry. Try again");
        assert_eq!(format!("{}", Rejection::Boolean), "invalid entry. try again.");
        assert_eq!(
            format!("{}", Rejection::CancelNotAllowed),
            "invalid entry. try again"
        );
    }

    #[test]
    fn test_check_type_macro() {
        let ok: Result<i64, Rejection> = check_type!("-17", i64, Rejection::Integer);
        assert_eq!(ok, Ok(-17));

        let err: Result<i64, Rejection> = check_type!("4x2", i64, Rejection::Integer);
        assert_eq!(err, Err(Rejection::Integer));
    }

    #[test]
    fn test_desired_type_display() {
        assert_eq!(DesiredType::Integer.to_string(), "int");
        assert_eq!(DesiredType::Float.to_string(), "flt");
        assert_eq!(DesiredType::Custom("port".to_string()).to_string(), "port");
    }
}
