//! Value types for file-key identifiers.
//!
//! This module contains the five leaf components and the composite key:
//! - [`ExpSetup`]: experimental setup label
//! - [`DataPeriod`]: numbered data-taking period
//! - [`DataRun`]: numbered data-taking run
//! - [`DataCategory`]: acquisition mode label
//! - [`Timestamp`]: UTC instant at second resolution
//! - [`FileKey`]: the five above composed in fixed order

pub mod category;
pub mod key;
pub mod period;
pub mod run;
pub mod setup;
pub mod timestamp;

pub use category::DataCategory;
pub use key::FileKey;
pub use period::DataPeriod;
pub use run::DataRun;
pub use setup::ExpSetup;
pub use timestamp::Timestamp;
