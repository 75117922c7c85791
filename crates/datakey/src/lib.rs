//! Typed file-key identifiers for experiment data catalogs.
//!
//! This crate parses, validates, and round-trips the structured identifiers
//! used to address data files in a physics experiment's data organization
//! scheme. Each file is named by a fixed grammar encoding an experimental
//! setup, a data-taking period, a run number, a data category, and a UTC
//! timestamp:
//!
//! ```text
//! l200-p02-r006-cal-20221226T200846Z
//! ```
//!
//! # Overview
//!
//! Five leaf value types ([`ExpSetup`], [`DataPeriod`], [`DataRun`],
//! [`DataCategory`], [`Timestamp`]) compose into one aggregate [`FileKey`].
//! Every type is immutable, compares structurally, and prints a canonical
//! form that parses back byte-for-byte. [`FileKey`] additionally accepts
//! real filenames: paths are reduced to their basename and a trailing
//! suffix (a tier tag or file extension) is tolerated and dropped.
//!
//! Filesystem lookups and dataset selection elsewhere depend on these keys
//! sorting and matching correctly, so parsing is strict and ordering is the
//! documented lexicographic order over (setup, period, run, category,
//! timestamp).
//!
//! # Quick start
//!
//! ```rust
//! use datakey::{FileKey, Timestamp};
//!
//! let key: FileKey = "l200-p02-r006-cal-20221226T200846Z.lh5".parse()?;
//!
//! assert_eq!(key.setup().as_str(), "l200");
//! assert_eq!(key.period().get(), 2);
//! assert_eq!(key.run().get(), 6);
//! assert_eq!(key.category().as_str(), "cal");
//! assert_eq!(key.timestamp(), Timestamp::new(1672085326));
//!
//! // Printing drops the suffix and yields the canonical form.
//! assert_eq!(key.to_string(), "l200-p02-r006-cal-20221226T200846Z");
//! # Ok::<(), datakey::FormatError>(())
//! ```
//!
//! # Modules
//!
//! - [`model`]: the six value types
//! - [`error`]: the [`FormatError`] taxonomy
//!
//! # Errors
//!
//! All parsing fails synchronously with a [`FormatError`] carrying the
//! offending input and a [`FormatReason`] (`InvalidFormat`, `TooShort`,
//! `TooLong`). No partial values are ever produced, and the crate performs
//! no I/O and no logging of its own.

pub mod error;
pub mod model;

// Re-export commonly used types at crate root
pub use error::{FormatError, FormatReason};
pub use model::{DataCategory, DataPeriod, DataRun, ExpSetup, FileKey, Timestamp};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
