//! # Prefix Rule Table
//!
//! Category dispatch for identities already known to be exactly nine ASCII
//! digits. [`RULES`] is evaluated in order and the first rule whose
//! predicate holds decides the category and the check applied.
//!
//! ## Priority
//!
//! The `9` namespace is shared by four rule shapes. Fixed device prefixes
//! (`970`, `972`, `974`) come first, then the MID-bearing `98`/`99`
//! auxiliary craft rule, then the `free_form` catch-all. In the `0`
//! namespace the `00` coast station rule precedes the `0` group call rule.
//! The last rule matches everything and yields `unknown`.

use crate::category::StationCategory;
use crate::classify::{ClassificationResult, FailureKind};
use crate::mid::{extract_mid, Mid, MID_MAX, MID_MIN};

/// Number of digits in a well-formed MMSI.
pub const MMSI_LENGTH: usize = 9;

/// How a matched rule decides validity.
pub enum Check {
    /// The prefix alone makes the identity valid.
    Fixed(&'static str),
    /// Valid iff the MID at `offset` is in range. The note builders receive
    /// the identity and the extracted MID.
    MidInRange {
        offset: usize,
        accepted: fn(&str, Mid) -> String,
        rejected: fn(&str, Mid) -> String,
    },
    /// The identity is never valid under this rule.
    Reject(fn(&str) -> String),
}

/// One entry of the dispatch table.
pub struct Rule {
    /// Stable rule name, used in logs and tests.
    pub name: &'static str,
    pub category: StationCategory,
    pub applies: fn(&str) -> bool,
    pub check: Check,
}

impl Rule {
    /// Apply this rule's check to `identity`.
    ///
    /// Callers are expected to have confirmed that `applies` holds.
    pub fn evaluate(&self, identity: &str) -> ClassificationResult {
        match &self.check {
            Check::Fixed(note) => ClassificationResult::accept(self.category, *note),
            Check::MidInRange {
                offset,
                accepted,
                rejected,
            } => {
                let mid = extract_mid(identity, *offset);
                if mid.in_range() {
                    ClassificationResult::accept(self.category, accepted(identity, mid))
                } else {
                    ClassificationResult::reject(
                        self.category,
                        FailureKind::MidOutOfRange,
                        rejected(identity, mid),
                    )
                }
            }
            Check::Reject(note) => ClassificationResult::reject(
                self.category,
                FailureKind::UnrecognizedPrefix,
                note(identity),
            ),
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let check = match self.check {
            Check::Fixed(_) => "fixed".to_string(),
            Check::MidInRange { offset, .. } => format!("mid@{offset}"),
            Check::Reject(_) => "reject".to_string(),
        };
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("check", &check)
            .finish()
    }
}

/// The dispatch table, in priority order.
pub static RULES: &[Rule] = &[
    Rule {
        name: "ship_station",
        category: StationCategory::ShipStation,
        applies: first_digit_ship,
        check: Check::MidInRange {
            offset: 0,
            accepted: note_mid,
            rejected: note_mid_out_of_range,
        },
    },
    Rule {
        name: "handheld_vhf_dsc",
        category: StationCategory::HandheldVhfDsc,
        applies: first_digit_8,
        check: Check::MidInRange {
            offset: 1,
            accepted: note_handheld,
            rejected: note_handheld_rejected,
        },
    },
    Rule {
        name: "ais_sart",
        category: StationCategory::AisSart,
        applies: prefix_970,
        check: Check::Fixed("970xxxxxx (AIS-SART)"),
    },
    Rule {
        name: "mob_msld",
        category: StationCategory::MobMsld,
        applies: prefix_972,
        check: Check::Fixed("972xxxxxx (MOB/MSLD)"),
    },
    Rule {
        name: "epirb_ais",
        category: StationCategory::EpirbAis,
        applies: prefix_974,
        check: Check::Fixed("974xxxxxx (EPIRB-AIS)"),
    },
    Rule {
        name: "auxiliary_craft",
        category: StationCategory::AuxiliaryCraft,
        applies: prefix_98_or_99,
        check: Check::MidInRange {
            offset: 2,
            accepted: note_auxiliary,
            rejected: note_mid_out_of_range,
        },
    },
    Rule {
        name: "free_form",
        category: StationCategory::FreeForm,
        applies: first_digit_9,
        check: Check::Reject(note_free_form),
    },
    Rule {
        name: "coast_station",
        category: StationCategory::CoastStation,
        applies: prefix_00,
        check: Check::MidInRange {
            offset: 2,
            accepted: note_coast,
            rejected: note_mid_out_of_range,
        },
    },
    Rule {
        name: "group_call",
        category: StationCategory::GroupCall,
        applies: first_digit_0,
        check: Check::MidInRange {
            offset: 1,
            accepted: note_group,
            rejected: note_mid_out_of_range,
        },
    },
    Rule {
        name: "unrecognized",
        category: StationCategory::Unknown,
        applies: any,
        check: Check::Reject(note_unrecognized),
    },
];

/// The first rule in [`RULES`] whose predicate holds for `identity`.
pub fn matching_rule(identity: &str) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| (rule.applies)(identity))
        .unwrap_or(&RULES[RULES.len() - 1])
}

// --- Predicates ----------------------------------------------------------

fn first_digit_ship(s: &str) -> bool {
    matches!(s.as_bytes().first(), Some(b'2'..=b'7'))
}

fn first_digit_8(s: &str) -> bool {
    s.starts_with('8')
}

fn first_digit_9(s: &str) -> bool {
    s.starts_with('9')
}

fn first_digit_0(s: &str) -> bool {
    s.starts_with('0')
}

fn prefix_970(s: &str) -> bool {
    s.starts_with("970")
}

fn prefix_972(s: &str) -> bool {
    s.starts_with("972")
}

fn prefix_974(s: &str) -> bool {
    s.starts_with("974")
}

fn prefix_98_or_99(s: &str) -> bool {
    s.starts_with("98") || s.starts_with("99")
}

fn prefix_00(s: &str) -> bool {
    s.starts_with("00")
}

fn any(_: &str) -> bool {
    true
}

// --- Notes ---------------------------------------------------------------

fn note_mid(_: &str, mid: Mid) -> String {
    format!("MID {mid}")
}

fn note_mid_out_of_range(_: &str, mid: Mid) -> String {
    format!("MID {mid} outside {MID_MIN}-{MID_MAX}")
}

fn note_handheld(_: &str, mid: Mid) -> String {
    format!("prefix 8 with MID {mid}")
}

fn note_handheld_rejected(_: &str, mid: Mid) -> String {
    format!("digits after 8 are not a MID in {MID_MIN}-{MID_MAX} (MID={mid})")
}

fn note_auxiliary(identity: &str, mid: Mid) -> String {
    let lead = identity.get(..2).unwrap_or(identity);
    format!("{lead} + MID {mid}")
}

fn note_coast(_: &str, mid: Mid) -> String {
    format!("00 + MID {mid}")
}

fn note_group(_: &str, mid: Mid) -> String {
    format!("0 + MID {mid}")
}

fn note_free_form(_: &str) -> String {
    "prefix 9 but not 970/972/974 or 98/99 + MID".to_string()
}

fn note_unrecognized(identity: &str) -> String {
    match identity.chars().next() {
        Some(c) => format!("unrecognized prefix {c}"),
        None => "unrecognized prefix".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_name(identity: &str) -> &'static str {
        matching_rule(identity).name
    }

    #[test]
    fn every_category_has_exactly_one_rule() {
        for category in StationCategory::all() {
            let count = RULES.iter().filter(|r| r.category == *category).count();
            assert_eq!(count, 1, "category {category} has {count} rules");
        }
    }

    #[test]
    fn last_rule_is_catch_all() {
        let last = &RULES[RULES.len() - 1];
        assert_eq!(last.category, StationCategory::Unknown);
        assert!((last.applies)(""));
        assert!((last.applies)("123456789"));
    }

    #[test]
    fn fixed_prefixes_precede_auxiliary_and_free_form() {
        let pos = |name: &str| RULES.iter().position(|r| r.name == name).unwrap();
        for fixed in ["ais_sart", "mob_msld", "epirb_ais"] {
            assert!(pos(fixed) < pos("auxiliary_craft"));
            assert!(pos(fixed) < pos("free_form"));
        }
        assert!(pos("auxiliary_craft") < pos("free_form"));
        assert!(pos("coast_station") < pos("group_call"));
    }

    #[test]
    fn nine_namespace_dispatch() {
        assert_eq!(rule_name("970000000"), "ais_sart");
        assert_eq!(rule_name("972000000"), "mob_msld");
        assert_eq!(rule_name("974000000"), "epirb_ais");
        assert_eq!(rule_name("980000000"), "auxiliary_craft");
        assert_eq!(rule_name("990000000"), "auxiliary_craft");
        assert_eq!(rule_name("971000000"), "free_form");
        assert_eq!(rule_name("973000000"), "free_form");
        assert_eq!(rule_name("975000000"), "free_form");
        assert_eq!(rule_name("900000000"), "free_form");
    }

    #[test]
    fn zero_namespace_dispatch() {
        assert_eq!(rule_name("002011234"), "coast_station");
        assert_eq!(rule_name("020112345"), "group_call");
    }

    #[test]
    fn leading_digit_dispatch() {
        for d in '2'..='7' {
            assert_eq!(rule_name(&format!("{d}00000000")), "ship_station");
        }
        assert_eq!(rule_name("800000000"), "handheld_vhf_dsc");
        assert_eq!(rule_name("100000000"), "unrecognized");
        assert_eq!(rule_name(""), "unrecognized");
    }

    #[test]
    fn fixed_rule_ignores_trailing_digits() {
        let rule = matching_rule("970999999");
        let result = rule.evaluate("970999999");
        assert!(result.valid);
        assert_eq!(result.note, "970xxxxxx (AIS-SART)");
    }

    #[test]
    fn mid_rule_reports_out_of_range() {
        let result = matching_rule("990001234").evaluate("990001234");
        assert!(!result.valid);
        assert_eq!(result.failure, Some(FailureKind::MidOutOfRange));
        assert_eq!(result.note, "MID 0 outside 201-775");
    }

    #[test]
    fn debug_shows_check_shape() {
        let dbg = format!("{:?}", matching_rule("002011234"));
        assert!(dbg.contains("coast_station"));
        assert!(dbg.contains("mid@2"));
    }
}
