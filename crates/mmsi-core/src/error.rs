//! # Error Types
//!
//! Classification itself never errors; invalid identities are reported as
//! [`crate::FailureKind`] outcomes. The errors here cover the remaining
//! fallible edges of the crate, such as parsing a category tag read back
//! from a report.

use thiserror::Error;

/// Top-level error type for `mmsi-core`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MmsiError {
    /// A string did not match any station category tag.
    #[error("unknown station category: {0:?}")]
    UnknownCategory(String),

    /// A string did not match any failure kind tag.
    #[error("unknown failure kind: {0:?}")]
    UnknownFailureKind(String),
}
