//! The composite file-key identifier.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::FormatError;

use super::{DataCategory, DataPeriod, DataRun, ExpSetup, Timestamp};

/// Relaxed grammar for a file key.
///
/// The trailing group admits a `-` or `.` introduced suffix (a tier tag or a
/// file extension) after the timestamp, so real on-disk filenames match.
/// Printing never emits the suffix.
pub const FILE_KEY_PATTERN: &str =
    "^([a-z][a-z0-9]*)-(p[0-9]{2})-(r[0-9]{3})-([a-z]+)-([0-9]{8}T[0-9]{6}Z)([.-].*)?$";

lazy_static! {
    static ref FILE_KEY_RE: Regex = Regex::new(FILE_KEY_PATTERN).unwrap();
}

/// The full compound identifier naming one data file's logical origin.
///
/// Composes one [`ExpSetup`], [`DataPeriod`], [`DataRun`], [`DataCategory`],
/// and [`Timestamp`] in fixed order. The canonical form joins the five
/// component renderings with `-`:
///
/// ```text
/// l200-p02-r006-cal-20221226T200846Z
/// ```
///
/// Ordering is lexicographic over (setup, period, run, category, timestamp),
/// so sorted collections of keys come out grouped hierarchically and
/// chronologically within a group.
///
/// # Example
///
/// ```
/// use datakey::FileKey;
///
/// let key: FileKey = "l200-p02-r006-cal-20221226T200846Z.lh5".parse().unwrap();
/// assert_eq!(key.to_string(), "l200-p02-r006-cal-20221226T200846Z");
/// assert_eq!(key.period().get(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileKey {
    setup: ExpSetup,
    period: DataPeriod,
    run: DataRun,
    category: DataCategory,
    timestamp: Timestamp,
}

impl FileKey {
    /// Composes a key from already-valid components.
    pub fn new(
        setup: ExpSetup,
        period: DataPeriod,
        run: DataRun,
        category: DataCategory,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            setup,
            period,
            run,
            category,
            timestamp,
        }
    }

    /// Parses a key from a filesystem path.
    ///
    /// Only the final path component is considered, so full paths to data
    /// files can be handed over directly.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FormatError> {
        let path = path.as_ref();
        let name = path.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
            FormatError::InvalidFormat {
                what: "file key",
                input: path.display().to_string(),
                pattern: FILE_KEY_PATTERN,
            }
        })?;
        name.parse()
    }

    /// The experimental setup.
    pub fn setup(&self) -> &ExpSetup {
        &self.setup
    }

    /// The data-taking period.
    pub fn period(&self) -> DataPeriod {
        self.period
    }

    /// The data-taking run.
    pub fn run(&self) -> DataRun {
        self.run
    }

    /// The data category.
    pub fn category(&self) -> &DataCategory {
        &self.category
    }

    /// The acquisition timestamp.
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

impl From<(ExpSetup, DataPeriod, DataRun, DataCategory, Timestamp)> for FileKey {
    fn from(
        (setup, period, run, category, timestamp): (
            ExpSetup,
            DataPeriod,
            DataRun,
            DataCategory,
            Timestamp,
        ),
    ) -> Self {
        Self::new(setup, period, run, category, timestamp)
    }
}

impl FromStr for FileKey {
    type Err = FormatError;

    /// Parses a key from an identifier string or a filename.
    ///
    /// The final `/`-separated component is matched against the relaxed
    /// grammar; each capture is re-validated by its leaf type, and any
    /// trailing suffix is discarded.
    fn from_str(s: &str) -> Result<Self, FormatError> {
        let name = match s.rfind('/') {
            Some(i) => &s[i + 1..],
            None => s,
        };
        let caps = FILE_KEY_RE.captures(name).ok_or_else(|| FormatError::InvalidFormat {
            what: "file key",
            input: s.to_string(),
            pattern: FILE_KEY_PATTERN,
        })?;
        Ok(Self {
            setup: caps[1].parse()?,
            period: caps[2].parse()?,
            run: caps[3].parse()?,
            category: caps[4].parse()?,
            timestamp: caps[5].parse()?,
        })
    }
}

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}-{}",
            self.setup, self.period, self.run, self.category, self.timestamp
        )
    }
}
