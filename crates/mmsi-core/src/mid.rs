//! # Maritime Identification Digits
//!
//! Extraction and range checking of the three-digit MID embedded in most
//! MMSI shapes. The MID starts at a category-specific offset.
//!
//! A slice that runs past the end of the identity, or that is not all ASCII
//! digits, yields [`Mid::Absent`]. Absent fails the range check the same
//! way an out-of-range value does, but renders differently in notes.

use serde::{Deserialize, Serialize};

/// Lowest MID accepted by the numbering plan.
pub const MID_MIN: u16 = 201;

/// Highest MID accepted by the numbering plan.
pub const MID_MAX: u16 = 775;

/// Number of characters in a MID.
const MID_WIDTH: usize = 3;

/// A MID read from an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mid {
    /// Three digits were present at the offset.
    Present(u16),
    /// The slice ran off the end or contained a non-digit.
    Absent,
}

impl Mid {
    /// True iff the MID is present and within `MID_MIN..=MID_MAX`.
    pub fn in_range(&self) -> bool {
        match self {
            Self::Present(v) => (MID_MIN..=MID_MAX).contains(v),
            Self::Absent => false,
        }
    }
}

impl std::fmt::Display for Mid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Present(v) => write!(f, "{v}"),
            Self::Absent => f.write_str("none"),
        }
    }
}

/// Extract the MID starting at byte offset `start`.
pub fn extract_mid(identity: &str, start: usize) -> Mid {
    let Some(end) = start.checked_add(MID_WIDTH) else {
        return Mid::Absent;
    };
    let Some(segment) = identity.as_bytes().get(start..end) else {
        return Mid::Absent;
    };
    if !segment.iter().all(u8::is_ascii_digit) {
        return Mid::Absent;
    }
    let value = segment
        .iter()
        .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
    Mid::Present(value)
}
