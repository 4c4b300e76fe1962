//! # Classifier
//!
//! [`classify`] maps a raw identity string to a [`ClassificationResult`].
//! Preconditions are checked in a fixed order, each short-circuiting:
//!
//! 1. absent or blank after trimming → `EmptyIdentity`
//! 2. any character outside `0`-`9` → `NonDigitCharacter`
//! 3. length other than nine → `WrongLength`
//!
//! Only then is the identity dispatched through [`crate::rules::RULES`].
//! All three precondition failures carry [`StationCategory::Unknown`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::category::StationCategory;
use crate::error::MmsiError;
use crate::rules::{matching_rule, MMSI_LENGTH};

/// Why an identity was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Absent or blank input.
    EmptyIdentity,
    /// Input contains characters outside `0`-`9`.
    NonDigitCharacter,
    /// Numeric input that is not exactly nine digits long.
    WrongLength,
    /// A MID-bearing category whose MID is absent or outside 201-775.
    MidOutOfRange,
    /// Nine digits whose prefix matches no valid category shape.
    UnrecognizedPrefix,
}

impl FailureKind {
    /// All failure kinds in precondition order.
    pub fn all() -> &'static [FailureKind] {
        &[
            Self::EmptyIdentity,
            Self::NonDigitCharacter,
            Self::WrongLength,
            Self::MidOutOfRange,
            Self::UnrecognizedPrefix,
        ]
    }

    /// Returns the snake_case tag for this failure kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyIdentity => "empty_identity",
            Self::NonDigitCharacter => "non_digit_character",
            Self::WrongLength => "wrong_length",
            Self::MidOutOfRange => "mid_out_of_range",
            Self::UnrecognizedPrefix => "unrecognized_prefix",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailureKind {
    type Err = MmsiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| MmsiError::UnknownFailureKind(s.to_string()))
    }
}

/// Outcome of classifying one identity.
///
/// `failure` is `Some` exactly when `valid` is false. `category` names the
/// rule path that was attempted, even when the identity was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub valid: bool,
    pub category: StationCategory,
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,
}

impl ClassificationResult {
    /// A valid result for `category`.
    pub fn accept(category: StationCategory, note: impl Into<String>) -> Self {
        Self {
            valid: true,
            category,
            note: note.into(),
            failure: None,
        }
    }

    /// An invalid result for `category` with its failure kind.
    pub fn reject(
        category: StationCategory,
        failure: FailureKind,
        note: impl Into<String>,
    ) -> Self {
        Self {
            valid: false,
            category,
            note: note.into(),
            failure: Some(failure),
        }
    }

    fn empty() -> Self {
        Self::reject(
            StationCategory::Unknown,
            FailureKind::EmptyIdentity,
            "empty identity",
        )
    }
}

/// Classify a possibly absent identity. `None` is treated as empty input.
pub fn classify_opt(identity: Option<&str>) -> ClassificationResult {
    match identity {
        Some(s) => classify(s),
        None => ClassificationResult::empty(),
    }
}

/// Classify a candidate MMSI.
///
/// Surrounding whitespace is trimmed before any check. The non-digit note
/// quotes the original input; the wrong-length note quotes the trimmed one.
pub fn classify(identity: &str) -> ClassificationResult {
    let trimmed = identity.trim();
    if trimmed.is_empty() {
        return ClassificationResult::empty();
    }

    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return ClassificationResult::reject(
            StationCategory::Unknown,
            FailureKind::NonDigitCharacter,
            format!("contains non-digit characters: {identity}"),
        );
    }

    if trimmed.len() != MMSI_LENGTH {
        return ClassificationResult::reject(
            StationCategory::Unknown,
            FailureKind::WrongLength,
            format!("length is not 9 digits: {trimmed}"),
        );
    }

    matching_rule(trimmed).evaluate(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::StationCategory::*;

    fn check(identity: &str, valid: bool, category: StationCategory) -> ClassificationResult {
        let r = classify(identity);
        assert_eq!(r.valid, valid, "{identity}: {r:?}");
        assert_eq!(r.category, category, "{identity}: {r:?}");
        assert_eq!(r.failure.is_none(), r.valid, "{identity}: {r:?}");
        r
    }

    // --- Preconditions ---

    #[test]
    fn empty_and_blank() {
        for input in ["", "   ", "\t\n"] {
            let r = check(input, false, Unknown);
            assert_eq!(r.note, "empty identity");
            assert_eq!(r.failure, Some(FailureKind::EmptyIdentity));
        }
        let r = classify_opt(None);
        assert_eq!(r, classify(""));
    }

    #[test]
    fn non_digit_quotes_original() {
        let r = check(" 52512345x ", false, Unknown);
        assert_eq!(r.note, "contains non-digit characters:  52512345x ");
        assert_eq!(r.failure, Some(FailureKind::NonDigitCharacter));
        check("525-12345", false, Unknown);
        check("5251 2345", false, Unknown);
        check("525123456.0", false, Unknown);
        check("-52512345", false, Unknown);
    }

    #[test]
    fn non_ascii_digits_rejected() {
        check("٥٢٥١٢٣٤٥٦", false, Unknown);
        check("５２５１２３４５６", false, Unknown);
    }

    #[test]
    fn wrong_length_quotes_trimmed() {
        let r = check(" 52512345 ", false, Unknown);
        assert_eq!(r.note, "length is not 9 digits: 52512345");
        assert_eq!(r.failure, Some(FailureKind::WrongLength));
        check("5251234567", false, Unknown);
        check("5", false, Unknown);
    }

    #[test]
    fn non_digit_checked_before_length() {
        let r = classify("abc");
        assert_eq!(r.failure, Some(FailureKind::NonDigitCharacter));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let r = check("  525123456\n", true, ShipStation);
        assert_eq!(r.note, "MID 525");
    }

    // --- Ship station ---

    #[test]
    fn ship_station_boundaries() {
        let r = check("201000000", true, ShipStation);
        assert_eq!(r.note, "MID 201");
        check("775999999", true, ShipStation);
        let r = check("776000000", false, ShipStation);
        assert_eq!(r.note, "MID 776 outside 201-775");
        assert_eq!(r.failure, Some(FailureKind::MidOutOfRange));
        check("200999999", false, ShipStation);
        check("799999999", false, ShipStation);
    }

    #[test]
    fn indonesian_ship_station() {
        let r = check("525005123", true, ShipStation);
        assert_eq!(r.note, "MID 525");
    }

    // --- Handheld ---

    #[test]
    fn handheld_vhf_dsc() {
        let r = check("852512345", true, HandheldVhfDsc);
        assert_eq!(r.note, "prefix 8 with MID 525");
        let r = check("812345678", false, HandheldVhfDsc);
        assert_eq!(r.note, "digits after 8 are not a MID in 201-775 (MID=123)");
        check("877612345", false, HandheldVhfDsc);
    }

    // --- Prefix 9 ---

    #[test]
    fn fixed_nine_prefixes_always_valid() {
        let r = check("970123456", true, AisSart);
        assert_eq!(r.note, "970xxxxxx (AIS-SART)");
        let r = check("972000000", true, MobMsld);
        assert_eq!(r.note, "972xxxxxx (MOB/MSLD)");
        let r = check("974999999", true, EpirbAis);
        assert_eq!(r.note, "974xxxxxx (EPIRB-AIS)");
    }

    #[test]
    fn auxiliary_craft() {
        let r = check("992011234", true, AuxiliaryCraft);
        assert_eq!(r.note, "99 + MID 201");
        let r = check("985251234", true, AuxiliaryCraft);
        assert_eq!(r.note, "98 + MID 525");
        let r = check("990001234", false, AuxiliaryCraft);
        assert_eq!(r.note, "MID 0 outside 201-775");
        check("987761234", false, AuxiliaryCraft);
    }

    #[test]
    fn free_form() {
        for input in ["900000000", "971234567", "973525000", "979999999"] {
            let r = check(input, false, FreeForm);
            assert_eq!(r.note, "prefix 9 but not 970/972/974 or 98/99 + MID");
            assert_eq!(r.failure, Some(FailureKind::UnrecognizedPrefix));
        }
    }

    // --- Prefix 0 ---

    #[test]
    fn coast_station() {
        let r = check("002015678", true, CoastStation);
        assert_eq!(r.note, "00 + MID 201");
        let r = check("001234567", false, CoastStation);
        assert_eq!(r.note, "MID 123 outside 201-775");
        check("005250000", true, CoastStation);
    }

    #[test]
    fn group_call() {
        let r = check("052512345", true, GroupCall);
        assert_eq!(r.note, "0 + MID 525");
        let r = check("012345678", false, GroupCall);
        assert_eq!(r.note, "MID 123 outside 201-775");
    }

    // --- Unrecognized ---

    #[test]
    fn leading_one_is_unknown() {
        let r = check("102015678", false, Unknown);
        assert_eq!(r.note, "unrecognized prefix 1");
        assert_eq!(r.failure, Some(FailureKind::UnrecognizedPrefix));
    }

    #[test]
    fn free_form_and_unknown_stay_distinct() {
        assert_ne!(classify("912345678").category, classify("112345678").category);
    }

    // --- Determinism ---

    #[test]
    fn idempotent() {
        for input in ["525005123", "", "abc", "970123456", "12345"] {
            assert_eq!(classify(input), classify(input));
        }
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_value(classify("201000000")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"valid": true, "category": "ship_station", "note": "MID 201"})
        );
        let json = serde_json::to_value(classify("")).unwrap();
        assert_eq!(json["failure"], "empty_identity");
        let back: ClassificationResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, classify(""));
    }

    #[test]
    fn failure_kind_tags_roundtrip() {
        for kind in FailureKind::all() {
            assert_eq!(kind.as_str().parse::<FailureKind>().unwrap(), *kind);
            assert_eq!(
                serde_json::to_string(kind).unwrap(),
                format!("\"{}\"", kind.as_str())
            );
        }
        assert!("mid".parse::<FailureKind>().is_err());
    }
}
