//! Parsing of comma-separated starting values.
//!
//! The parser is the single authority on input validity. [`filter_input`] is
//! an optional convenience for interactive front ends and is never required
//! for correctness.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Rejection of a raw input string.
///
/// Token-bearing variants carry the trimmed token text and its 1-based
/// position among the comma-separated tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("please enter at least one room number")]
    Empty,

    #[error("\"{token}\" is not a valid room number (token {position})")]
    InvalidToken { token: String, position: usize },

    #[error("\"{token}\" is negative; room numbers must be >= 0 (token {position})")]
    Negative { token: String, position: usize },

    #[error("\"{token}\" is too large; room numbers must be <= {max} (token {position})", max = u64::MAX)]
    OutOfRange { token: String, position: usize },
}

impl ValidationError {
    /// The offending token, if the failure is attributable to one.
    pub fn bad_token(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::InvalidToken { token, .. }
            | Self::Negative { token, .. }
            | Self::OutOfRange { token, .. } => Some(token),
        }
    }
}

/// Parse `raw` into starting values.
///
/// Splits on commas and trims each token. Each token must be an optionally
/// signed base-10 integer in `0..=u64::MAX`. The first failing token, left to
/// right, is reported and no values are returned.
pub fn parse_input(raw: &str) -> Result<Vec<u64>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    trimmed
        .split(',')
        .enumerate()
        .map(|(index, token)| parse_token(token.trim(), index + 1))
        .collect()
}

fn parse_token(token: &str, position: usize) -> Result<u64, ValidationError> {
    let owned = || token.to_string();
    if !is_signed_integer(token) {
        return Err(ValidationError::InvalidToken {
            token: owned(),
            position,
        });
    }

    let digits = token.trim_start_matches(['+', '-']);
    let negative = token.starts_with('-') && digits.bytes().any(|b| b != b'0');
    if negative {
        return Err(ValidationError::Negative {
            token: owned(),
            position,
        });
    }

    digits.parse().map_err(|_| ValidationError::OutOfRange {
        token: owned(),
        position,
    })
}

/// True for an optional single sign followed by one or more ASCII digits.
fn is_signed_integer(token: &str) -> bool {
    let digits = token
        .strip_prefix('-')
        .or_else(|| token.strip_prefix('+'))
        .unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Drop every character that is not a digit, comma, whitespace or hyphen.
///
/// Returns the input unchanged (borrowed) when nothing needs removing.
pub fn filter_input(raw: &str) -> Cow<'_, str> {
    static DISALLOWED_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[^\d,\s-]").expect("valid input filter regex"));
    DISALLOWED_RE.replace_all(raw, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_two_values_with_spaces() {
        assert_eq!(parse_input("0, 47"), Ok(vec![0, 47]));
    }

    #[test]
    fn parse_trims_tokens_and_input() {
        assert_eq!(parse_input("  12 ,3,  400  "), Ok(vec![12, 3, 400]));
    }

    #[test]
    fn parse_empty_input_is_rejected() {
        assert_eq!(parse_input(""), Err(ValidationError::Empty));
        assert_eq!(parse_input("   \t\n"), Err(ValidationError::Empty));
    }

    #[test]
    fn parse_names_bad_token() {
        let err = parse_input("12, abc").expect_err("abc is not a number");
        assert_eq!(err.bad_token(), Some("abc"));
        assert_eq!(
            err,
            ValidationError::InvalidToken {
                token: "abc".to_string(),
                position: 2,
            }
        );
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn parse_rejects_trailing_garbage() {
        let err = parse_input("12abc").expect_err("partial number");
        assert_eq!(err.bad_token(), Some("12abc"));
    }

    #[test]
    fn parse_rejects_empty_token() {
        let err = parse_input("1,,2").expect_err("empty token");
        assert_eq!(
            err,
            ValidationError::InvalidToken {
                token: String::new(),
                position: 2,
            }
        );
        assert!(parse_input("1,").is_err());
    }

    #[test]
    fn parse_rejects_negative() {
        let err = parse_input("5, -3").expect_err("negative");
        assert_eq!(
            err,
            ValidationError::Negative {
                token: "-3".to_string(),
                position: 2,
            }
        );
    }

    #[test]
    fn parse_accepts_signed_zero_and_plus() {
        assert_eq!(parse_input("-0, +7, 007"), Ok(vec![0, 7, 7]));
    }

    #[test]
    fn parse_rejects_lone_sign_and_inner_space() {
        assert!(matches!(
            parse_input("-"),
            Err(ValidationError::InvalidToken { .. })
        ));
        assert!(matches!(
            parse_input("1 2"),
            Err(ValidationError::InvalidToken { .. })
        ));
    }

    #[test]
    fn parse_rejects_values_above_u64() {
        assert_eq!(parse_input("18446744073709551615"), Ok(vec![u64::MAX]));
        let err = parse_input("18446744073709551616").expect_err("overflow");
        assert!(matches!(err, ValidationError::OutOfRange { position: 1, .. }));
    }

    #[test]
    fn parse_reports_first_failure() {
        let err = parse_input("x, -1").expect_err("first token bad");
        assert_eq!(err.bad_token(), Some("x"));
    }

    #[test]
    fn empty_error_has_no_token() {
        assert_eq!(ValidationError::Empty.bad_token(), None);
    }

    #[test]
    fn filter_removes_disallowed_chars() {
        assert_eq!(filter_input("12, a4b7; -3"), "12, 47 -3");
    }

    #[test]
    fn filter_borrows_clean_input() {
        assert!(matches!(filter_input("0, 47"), Cow::Borrowed(_)));
    }
}
