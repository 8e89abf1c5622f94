//! Typed parsing of raw console input
//!
//! Pure functions only: the caller owns the prompt text and the retry loop.

use std::str::FromStr;

use crate::error::{CalcError, CalcResult};

/// A numeric type that can be read from a prompt
pub trait NumericInput: FromStr + Copy {
    /// How the type is described to the user ("number", "whole number")
    const KIND: &'static str;

    /// Extra acceptance check after a successful parse
    fn is_acceptable(&self) -> bool {
        true
    }
}

impl NumericInput for f64 {
    const KIND: &'static str = "number";

    fn is_acceptable(&self) -> bool {
        self.is_finite()
    }
}

impl NumericInput for i32 {
    const KIND: &'static str = "whole number";
}

/// Parse `raw` as `T`, ignoring surrounding whitespace
///
/// Infinite and NaN floats are rejected along with anything unparseable.
pub fn parse_number<T: NumericInput>(raw: &str) -> CalcResult<T> {
    let trimmed = raw.trim();
    match trimmed.parse::<T>() {
        Ok(value) if value.is_acceptable() => Ok(value),
        _ => Err(CalcError::InvalidNumber {
            input: trimmed.to_string(),
            expected: T::KIND,
        }),
    }
}

/// Interpret a yes/no answer; only "y" and "yes" (any case) count as yes
pub fn parse_yes_no(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_number::<f64>("0.05").unwrap(), 0.05);
        assert_eq!(parse_number::<f64>("  -12.5 \n").unwrap(), -12.5);
        assert_eq!(parse_number::<f64>("1e3").unwrap(), 1000.0);
        assert_eq!(parse_number::<f64>("7").unwrap(), 7.0);
    }

    #[test]
    fn test_parse_float_rejects_text() {
        let err = parse_number::<f64>("abc").unwrap_err();
        assert_eq!(
            err,
            CalcError::InvalidNumber {
                input: "abc".into(),
                expected: "number"
            }
        );
    }

    #[test]
    fn test_parse_float_rejects_non_finite() {
        assert!(parse_number::<f64>("inf").is_err());
        assert!(parse_number::<f64>("NaN").is_err());
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_number::<i32>("10").unwrap(), 10);
        assert_eq!(parse_number::<i32>(" -3 ").unwrap(), -3);
    }

    #[test]
    fn test_parse_integer_rejects_fractions() {
        let err = parse_number::<i32>("2.5").unwrap_err();
        assert_eq!(err.to_string(), "'2.5' is not a valid whole number");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_number::<f64>("").is_err());
        assert!(parse_number::<i32>("   ").is_err());
    }

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no("y"));
        assert!(parse_yes_no("YES"));
        assert!(parse_yes_no("  Yes\n"));
        assert!(!parse_yes_no("n"));
        assert!(!parse_yes_no(""));
        assert!(!parse_yes_no("yep"));
    }
}
