//! UTC timestamps at second resolution.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::FormatError;

use super::FileKey;

/// Grammar for a canonical timestamp.
pub const TIMESTAMP_PATTERN: &str = "^[0-9]{8}T[0-9]{6}Z$";

/// strftime format matching [`TIMESTAMP_PATTERN`].
pub const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

lazy_static! {
    static ref TIMESTAMP_RE: Regex = Regex::new(TIMESTAMP_PATTERN).unwrap();
}

/// A UTC instant, stored as integer seconds since the Unix epoch.
///
/// The canonical form is `yyyymmddTHHMMSSZ` (e.g., `20221226T200846Z`),
/// always zero-padded and always UTC. Any `i64` epoch value is accepted at
/// construction; no interpretation happens beyond second-resolution
/// conversion.
///
/// # Example
///
/// ```
/// use datakey::Timestamp;
///
/// let ts: Timestamp = "20221226T200846Z".parse().unwrap();
/// assert_eq!(ts.epoch_seconds(), 1672085326);
/// assert_eq!(ts.to_string(), "20221226T200846Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from epoch seconds without validation.
    pub const fn new(epoch_seconds: i64) -> Self {
        Self(epoch_seconds)
    }

    /// Returns the seconds since the Unix epoch.
    pub const fn epoch_seconds(self) -> i64 {
        self.0
    }

    /// Converts to a [`DateTime<Utc>`].
    ///
    /// Returns `None` for epoch values outside chrono's representable span;
    /// any timestamp produced by parsing is representable.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }
}

impl From<i64> for Timestamp {
    fn from(epoch_seconds: i64) -> Self {
        Self(epoch_seconds)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    /// Converts a datetime, rounding to the nearest second.
    fn from(dt: DateTime<Utc>) -> Self {
        let mut secs = dt.timestamp();
        if dt.timestamp_subsec_nanos() >= 500_000_000 {
            secs += 1;
        }
        Self(secs)
    }
}

impl FromStr for Timestamp {
    type Err = FormatError;

    /// Parses either a canonical timestamp or a full file-key string.
    ///
    /// The second form delegates to [`FileKey`] parsing and extracts its
    /// timestamp field, so a whole filename can be handed over when only
    /// the instant matters.
    fn from_str(s: &str) -> Result<Self, FormatError> {
        if TIMESTAMP_RE.is_match(s) {
            return parse_canonical(s);
        }

        if let Ok(key) = s.parse::<FileKey>() {
            return Ok(key.timestamp());
        }

        Err(FormatError::InvalidFormat {
            what: "timestamp",
            input: s.to_string(),
            pattern: TIMESTAMP_PATTERN,
        })
    }
}

/// Parses a string already known to match [`TIMESTAMP_PATTERN`].
///
/// The grammar fixes the digit layout, so the fields live at fixed offsets;
/// chrono rejects values that are not a real calendar date/time (e.g.,
/// month 13).
fn parse_canonical(s: &str) -> Result<Timestamp, FormatError> {
    let invalid = || FormatError::InvalidFormat {
        what: "timestamp",
        input: s.to_string(),
        pattern: TIMESTAMP_PATTERN,
    };

    let year: i32 = s[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = s[4..6].parse().map_err(|_| invalid())?;
    let day: u32 = s[6..8].parse().map_err(|_| invalid())?;
    let hour: u32 = s[9..11].parse().map_err(|_| invalid())?;
    let minute: u32 = s[11..13].parse().map_err(|_| invalid())?;
    let second: u32 = s[13..15].parse().map_err(|_| invalid())?;

    let dt = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .ok_or_else(invalid)?;
    Ok(Timestamp(dt.and_utc().timestamp()))
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::from_timestamp(self.0, 0) {
            Some(dt) => write!(f, "{}", dt.format(TIMESTAMP_FORMAT)),
            // Outside chrono's span; unreachable from parsed input.
            None => write!(f, "{}", self.0),
        }
    }
}
