//! Trial-count argument parsing.
//!
//! Accepts the same shapes `strtol`-style parsers do: optional leading
//! whitespace, an optional sign, then a digit run. Anything after the
//! digits is kept so the caller can warn about it.

use thiserror::Error;

/// Below this many trials the observed rates are warned about as noisy.
pub const SMALL_BATCH_WARNING_THRESHOLD: u64 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCount {
    pub trials: u64,
    /// Trailing non-numeric text that was dropped, if any.
    pub ignored_suffix: Option<String>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgError {
    #[error("trial count {raw:?} is not a number")]
    NotNumeric { raw: String },

    #[error("trial count {raw:?} is out of range")]
    OutOfRange { raw: String },

    #[error("trial count {raw:?} must be at least {minimum}")]
    TooSmall { raw: String, minimum: u64 },
}

/// Parse one trial-count argument.
pub fn parse_trial_count(raw: &str) -> Result<ParsedCount, ArgError> {
    let trimmed = raw.trim_start();

    let (negative, rest) = if let Some(unsigned) = trimmed.strip_prefix('+') {
        (false, unsigned)
    } else if let Some(unsigned) = trimmed.strip_prefix('-') {
        (true, unsigned)
    } else {
        (false, trimmed)
    };

    let digit_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digit_len == 0 {
        return Err(ArgError::NotNumeric {
            raw: raw.to_string(),
        });
    }

    let (digits, suffix) = rest.split_at(digit_len);
    let value: u64 = digits.parse().map_err(|_| ArgError::OutOfRange {
        raw: raw.to_string(),
    })?;

    if negative || value < mh_core::MIN_TRIALS_PER_BATCH {
        return Err(ArgError::TooSmall {
            raw: raw.to_string(),
            minimum: mh_core::MIN_TRIALS_PER_BATCH,
        });
    }

    Ok(ParsedCount {
        trials: value,
        ignored_suffix: if suffix.is_empty() {
            None
        } else {
            Some(suffix.to_string())
        },
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_count_parses_cleanly() {
        assert_eq!(
            parse_trial_count("500"),
            Ok(ParsedCount {
                trials: 500,
                ignored_suffix: None,
            })
        );
    }

    #[test]
    fn test_sign_and_whitespace_are_accepted() {
        assert_eq!(
            parse_trial_count("  +42"),
            Ok(ParsedCount {
                trials: 42,
                ignored_suffix: None,
            })
        );
    }

    #[test]
    fn test_trailing_text_is_reported_not_fatal() {
        assert_eq!(
            parse_trial_count("200abc"),
            Ok(ParsedCount {
                trials: 200,
                ignored_suffix: Some("abc".to_string()),
            })
        );
    }

    #[test]
    fn test_non_numeric_is_rejected() {
        assert!(matches!(
            parse_trial_count("abc"),
            Err(ArgError::NotNumeric { .. })
        ));
        assert!(matches!(
            parse_trial_count(""),
            Err(ArgError::NotNumeric { .. })
        ));
        assert!(matches!(
            parse_trial_count("+"),
            Err(ArgError::NotNumeric { .. })
        ));
    }

    #[test]
    fn test_counts_below_minimum_are_rejected() {
        assert_eq!(
            parse_trial_count("0"),
            Err(ArgError::TooSmall {
                raw: "0".to_string(),
                minimum: 2,
            })
        );
        assert_eq!(
            parse_trial_count("1"),
            Err(ArgError::TooSmall {
                raw: "1".to_string(),
                minimum: 2,
            })
        );
    }

    #[test]
    fn test_negative_counts_are_rejected() {
        assert!(matches!(
            parse_trial_count("-3"),
            Err(ArgError::TooSmall { .. })
        ));
    }

    #[test]
    fn test_overflowing_count_is_out_of_range() {
        assert!(matches!(
            parse_trial_count("99999999999999999999999"),
            Err(ArgError::OutOfRange { .. })
        ));
    }
}
