//! # Station Category — Closed Tag Set
//!
//! Defines the `StationCategory` enum with all ten categories an MMSI can be
//! matched against. Every `match` on `StationCategory` is exhaustive, so
//! adding a category forces every consumer to handle it.
//!
//! The category records which rule path was attempted, not that it
//! succeeded: an invalid identity still carries the category whose rule
//! rejected it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MmsiError;

/// Station categories of the MMSI numbering plan.
///
/// | # | Category | Shape |
/// |---|----------|-------|
/// |  1 | ShipStation | `MIDxxxxxx`, first digit 2-7 |
/// |  2 | HandheldVhfDsc | `8MIDxxxxx` |
/// |  3 | AisSart | `970xxxxxx` |
/// |  4 | MobMsld | `972xxxxxx` |
/// |  5 | EpirbAis | `974xxxxxx` |
/// |  6 | AuxiliaryCraft | `98MIDxxxx` or `99MIDxxxx` |
/// |  7 | FreeForm | any other `9xxxxxxxx` |
/// |  8 | CoastStation | `00MIDxxxx` |
/// |  9 | GroupCall | `0MIDxxxxx` |
/// | 10 | Unknown | malformed input or unrecognized leading digit |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationCategory {
    /// Ship station identity, MID in the leading three digits.
    ShipStation,
    /// Handheld VHF transceiver with DSC and GNSS.
    HandheldVhfDsc,
    /// AIS search and rescue transmitter.
    AisSart,
    /// Man-overboard device (DSC and/or AIS).
    MobMsld,
    /// EPIRB using AIS for homing.
    EpirbAis,
    /// Craft associated with a parent ship.
    AuxiliaryCraft,
    /// Prefix 9 that matches none of the free-form device rules.
    FreeForm,
    /// Coast station.
    CoastStation,
    /// Group ship station call identity.
    GroupCall,
    /// Malformed input or an unrecognized leading digit.
    Unknown,
}

/// Total number of station categories.
pub const STATION_CATEGORY_COUNT: usize = 10;

impl StationCategory {
    /// Returns all categories in table order.
    pub fn all() -> &'static [StationCategory] {
        &[
            Self::ShipStation,
            Self::HandheldVhfDsc,
            Self::AisSart,
            Self::MobMsld,
            Self::EpirbAis,
            Self::AuxiliaryCraft,
            Self::FreeForm,
            Self::CoastStation,
            Self::GroupCall,
            Self::Unknown,
        ]
    }

    /// Returns the snake_case tag for this category.
    ///
    /// This must match the serde serialization format; report consumers
    /// filter on these exact strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShipStation => "ship_station",
            Self::HandheldVhfDsc => "handheld_vhf_dsc",
            Self::AisSart => "ais_sart",
            Self::MobMsld => "mob_msld",
            Self::EpirbAis => "epirb_ais",
            Self::AuxiliaryCraft => "auxiliary_craft",
            Self::FreeForm => "free_form",
            Self::CoastStation => "coast_station",
            Self::GroupCall => "group_call",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for StationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StationCategory {
    type Err = MmsiError;

    /// Parse a category from its snake_case tag. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| MmsiError::UnknownCategory(s.to_string()))
    }
}
