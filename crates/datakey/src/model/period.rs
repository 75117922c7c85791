//! Data-taking period numbers.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::FormatError;

/// Grammar for a period label.
pub const PERIOD_PATTERN: &str = "^p([0-9]{2})$";

lazy_static! {
    static ref PERIOD_RE: Regex = Regex::new(PERIOD_PATTERN).unwrap();
}

/// A numbered data-taking period within a setup's operational history.
///
/// The canonical form is `p` followed by the period number zero-padded to
/// two digits (e.g., `p02`). Construction from an integer is unvalidated;
/// numbers of 100 or more print at their natural width and do not
/// round-trip through the two-digit grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DataPeriod(u16);

impl DataPeriod {
    /// Creates a period from its number without validation.
    pub const fn new(no: u16) -> Self {
        Self(no)
    }

    /// Returns the period number.
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl From<u16> for DataPeriod {
    fn from(no: u16) -> Self {
        Self(no)
    }
}

impl FromStr for DataPeriod {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, FormatError> {
        let caps = PERIOD_RE.captures(s).ok_or_else(|| FormatError::InvalidFormat {
            what: "period label",
            input: s.to_string(),
            pattern: PERIOD_PATTERN,
        })?;
        // Two digits always fit in u16; the grammar guarantees the parse.
        let no = caps[1].parse::<u16>().map_err(|_| FormatError::InvalidFormat {
            what: "period label",
            input: s.to_string(),
            pattern: PERIOD_PATTERN,
        })?;
        Ok(Self(no))
    }
}

impl fmt::Display for DataPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{:02}", self.0)
    }
}
