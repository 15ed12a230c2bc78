//! # Float Parser
//!
//! Strict decimal parsing for [`crate::utils::DesiredType::Float`] answers.
//!
//! The input must contain exactly one `.`. The part before it is an optional
//! sign followed by digits, the part after it is digits only. The value is
//! `whole + digits / 10^len(digits)`, so the fractional part is always added,
//! even to a negative whole part:
//!
//! ```rust
//! use clitext::utils::parse_float;
//!
//! assert_eq!(parse_float("3.5"), Ok(3.5));
//! assert_eq!(parse_float("-3.5"), Ok(-2.5));
//! assert!(parse_float("3").is_err());
//! ```
use crate::error::FloatFormatError;

/// Parses `raw` as `<whole>.<fraction>`.
pub fn parse_float(raw: &str) -> Result<f64, FloatFormatError> {
    let separators = raw.matches('.').count();
    let Some((whole, fraction)) = raw.split_once('.').filter(|_| separators == 1) else {
        return Err(FloatFormatError::Separator(separators));
    };

    let digits = whole.strip_prefix(['+', '-']).unwrap_or(whole);
    if !is_digits(digits) {
        return Err(FloatFormatError::Whole(whole.to_string()));
    }
    if !is_digits(fraction) {
        return Err(FloatFormatError::Fraction(fraction.to_string()));
    }

    let whole_value: f64 = whole
        .parse()
        .map_err(|_| FloatFormatError::Whole(whole.to_string()))?;
    // "0.<digits>" is the correctly rounded value of digits / 10^len(digits)
    let fraction_value: f64 = format!("0.{}", fraction)
        .parse()
        .map_err(|_| FloatFormatError::Fraction(fraction.to_string()))?;

    Ok(whole_value + fraction_value)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_simple() {
        assert_eq!(parse_float("3.5"), Ok(3.5));
        assert_eq!(parse_float("0.25"), Ok(0.25));
        assert_eq!(parse_float("+2.0"), Ok(2.0));
        assert_eq!(parse_float("10.25"), Ok(10.25));
    }

    #[test]
    fn test_parse_float_negative_adds_fraction() {
        assert_eq!(parse_float("-3.5"), Ok(-2.5));
        assert_eq!(parse_float("-0.5"), Ok(0.5));
        assert_eq!(parse_float("-1.0"), Ok(-1.0));
    }

    #[test]
    fn test_parse_float_separator_count() {
        assert_eq!(parse_float("3"), Err(FloatFormatError::Separator(0)));
        assert_eq!(parse_float("3.5.1"), Err(FloatFormatError::Separator(2)));
    }

    #[test]
    fn test_parse_float_invalid_parts() {
        assert_eq!(parse_float(".5"), Err(FloatFormatError::Whole(String::new())));
        assert_eq!(parse_float("-.5"), Err(FloatFormatError::Whole("-".to_string())));
        assert_eq!(parse_float("3."), Err(FloatFormatError::Fraction(String::new())));
        assert_eq!(parse_float("3.-5"), Err(FloatFormatError::Fraction("-5".to_string())));
        assert_eq!(parse_float("a.5"), Err(FloatFormatError::Whole("a".to_string())));
        assert_eq!(parse_float("1e3.0"), Err(FloatFormatError::Whole("1e3".to_string())));
    }

    #[test]
    fn test_parse_float_long_fraction() {
        let value = parse_float("1.000000000000000000001").unwrap();
        assert_eq!(value, 1.0);
    }
}
