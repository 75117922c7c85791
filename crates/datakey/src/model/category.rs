//! Data category labels.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::FormatError;

/// Grammar for a category label.
pub const CATEGORY_PATTERN: &str = "^[a-z]+$";

/// Minimum label length.
pub const CATEGORY_MIN_LEN: usize = 3;

/// Maximum label length.
pub const CATEGORY_MAX_LEN: usize = 6;

lazy_static! {
    static ref CATEGORY_RE: Regex = Regex::new(CATEGORY_PATTERN).unwrap();
}

/// The acquisition mode label for a run's data (e.g., `cal`, `phy`).
///
/// The canonical form is a lowercase alphabetic label, 3 to 6 characters
/// long. Common values are `cal` (calibration), `phy` (physics), and
/// `pulser`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DataCategory(String);

impl DataCategory {
    /// Creates a category label without validation.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DataCategory {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, FormatError> {
        if !CATEGORY_RE.is_match(s) {
            return Err(FormatError::InvalidFormat {
                what: "category label",
                input: s.to_string(),
                pattern: CATEGORY_PATTERN,
            });
        }
        if s.len() < CATEGORY_MIN_LEN {
            return Err(FormatError::TooShort {
                what: "category label",
                input: s.to_string(),
                len: s.len(),
                min: CATEGORY_MIN_LEN,
            });
        }
        if s.len() > CATEGORY_MAX_LEN {
            return Err(FormatError::TooLong {
                what: "category label",
                input: s.to_string(),
                len: s.len(),
                max: CATEGORY_MAX_LEN,
            });
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for DataCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
