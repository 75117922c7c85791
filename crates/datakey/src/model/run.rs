//! Data-taking run numbers.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::FormatError;

/// Grammar for a run label.
pub const RUN_PATTERN: &str = "^r([0-9]{3})$";

lazy_static! {
    static ref RUN_RE: Regex = Regex::new(RUN_PATTERN).unwrap();
}

/// A numbered contiguous data-taking run within a period.
///
/// The canonical form is `r` followed by the run number zero-padded to three
/// digits (e.g., `r006`). Same width policy as [`DataPeriod`](super::DataPeriod):
/// numbers of 1000 or more print wide and do not re-parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DataRun(u16);

impl DataRun {
    /// Creates a run from its number without validation.
    pub const fn new(no: u16) -> Self {
        Self(no)
    }

    /// Returns the run number.
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl From<u16> for DataRun {
    fn from(no: u16) -> Self {
        Self(no)
    }
}

impl FromStr for DataRun {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, FormatError> {
        let caps = RUN_RE.captures(s).ok_or_else(|| FormatError::InvalidFormat {
            what: "run label",
            input: s.to_string(),
            pattern: RUN_PATTERN,
        })?;
        let no = caps[1].parse::<u16>().map_err(|_| FormatError::InvalidFormat {
            what: "run label",
            input: s.to_string(),
            pattern: RUN_PATTERN,
        })?;
        Ok(Self(no))
    }
}

impl fmt::Display for DataRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{:03}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatReason;

    #[test]
    fn test_parse_valid() {
        let run: DataRun = "r006".parse().unwrap();
        assert_eq!(run, DataRun::new(6));
    }

    #[test]
    fn test_parse_print_roundtrip() {
        for s in ["r000", "r006", "r042", "r999"] {
            let run: DataRun = s.parse().unwrap();
            assert_eq!(run.to_string(), s);
        }
    }

    #[test]
    fn test_bad_forms_rejected() {
        for s in ["006", "r06", "r0006", "R006", "r0a6", ""] {
            let err = s.parse::<DataRun>().unwrap_err();
            assert_eq!(err.reason(), FormatReason::InvalidFormat, "input {:?}", s);
        }
    }

    #[test]
    fn test_wide_run_prints_but_does_not_reparse() {
        let run = DataRun::new(1000);
        assert_eq!(run.to_string(), "r1000");
        assert!("r1000".parse::<DataRun>().is_err());
    }

    #[test]
    fn test_order_is_numeric() {
        assert!(DataRun::new(6) < DataRun::new(41));
    }
}
