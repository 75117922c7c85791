//! Experimental setup labels.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::FormatError;

/// Grammar for a setup label.
pub const SETUP_PATTERN: &str = "^[a-z][a-z0-9]*$";

/// Minimum label length.
pub const SETUP_MIN_LEN: usize = 3;

/// Maximum label length.
pub const SETUP_MAX_LEN: usize = 8;

lazy_static! {
    static ref SETUP_RE: Regex = Regex::new(SETUP_PATTERN).unwrap();
}

/// An experimental setup label (e.g., `l200`).
///
/// Identifies the apparatus/configuration a data file originates from. The
/// canonical form is a lowercase alphanumeric label starting with a letter,
/// 3 to 8 characters long.
///
/// # Example
///
/// ```
/// use datakey::ExpSetup;
///
/// let setup: ExpSetup = "l200".parse().unwrap();
/// assert_eq!(setup.to_string(), "l200");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpSetup(String);

impl ExpSetup {
    /// Creates a setup label without validation.
    ///
    /// Trusted internal path for labels already known to be canonical;
    /// external input goes through [`FromStr`].
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ExpSetup {
    type Err = FormatError;

    /// Parses and validates a setup label.
    ///
    /// Checks run in order: grammar, then minimum length, then maximum
    /// length; the first failing check wins.
    fn from_str(s: &str) -> Result<Self, FormatError> {
        if !SETUP_RE.is_match(s) {
            return Err(FormatError::InvalidFormat {
                what: "setup label",
                input: s.to_string(),
                pattern: SETUP_PATTERN,
            });
        }
        if s.len() < SETUP_MIN_LEN {
            return Err(FormatError::TooShort {
                what: "setup label",
                input: s.to_string(),
                len: s.len(),
                min: SETUP_MIN_LEN,
            });
        }
        if s.len() > SETUP_MAX_LEN {
            return Err(FormatError::TooLong {
                what: "setup label",
                input: s.to_string(),
                len: s.len(),
                max: SETUP_MAX_LEN,
            });
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for ExpSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatReason;

    #[test]
    fn test_parse_valid() {
        let setup: ExpSetup = "l200".parse().unwrap();
        assert_eq!(setup.as_str(), "l200");
        assert_eq!(setup, ExpSetup::new("l200"));
    }

    #[test]
    fn test_parse_print_roundtrip() {
        for s in ["l200", "cage", "pgt", "oberon12"] {
            let setup: ExpSetup = s.parse().unwrap();
            assert_eq!(setup.to_string(), s);
        }
    }

    #[test]
    fn test_too_short() {
        let err = "ab".parse::<ExpSetup>().unwrap_err();
        assert_eq!(err.reason(), FormatReason::TooShort);
    }

    #[test]
    fn test_too_long() {
        let err = "abcdefghi".parse::<ExpSetup>().unwrap_err();
        assert_eq!(err.reason(), FormatReason::TooLong);
    }

    #[test]
    fn test_invalid_format() {
        for s in ["L200", "2abc", "l-200", "", "l2.0"] {
            let err = s.parse::<ExpSetup>().unwrap_err();
            assert_eq!(err.reason(), FormatReason::InvalidFormat, "input {:?}", s);
        }
    }

    #[test]
    fn test_format_check_precedes_length_check() {
        // "A" is both too short and badly formed; grammar wins.
        let err = "A".parse::<ExpSetup>().unwrap_err();
        assert_eq!(err.reason(), FormatReason::InvalidFormat);
    }

    #[test]
    fn test_idempotent_wrapping() {
        let setup: ExpSetup = "l200".parse().unwrap();
        assert_eq!(setup.clone(), setup);
        assert_eq!(ExpSetup::new(setup.as_str()), setup);
    }

    #[test]
    fn test_order_is_lexicographic() {
        let a: ExpSetup = "cage".parse().unwrap();
        let b: ExpSetup = "l200".parse().unwrap();
        assert!(a < b);
    }
}
