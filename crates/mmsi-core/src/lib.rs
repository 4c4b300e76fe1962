//! # mmsi-core — MMSI Classification Rules
//!
//! Classifies Maritime Mobile Service Identity (MMSI) numbers under the
//! numbering plan used by Indonesian maritime radio regulation. Given a
//! candidate identity, the classifier decides whether it is well-formed,
//! which station category it belongs to, and why.
//!
//! ## Key Design Principles
//!
//! 1. **Classification never fails.** Every input, including absent, blank,
//!    non-numeric, or wrong-length values, yields a [`ClassificationResult`].
//!    Failure modes are carried as a [`FailureKind`] on the result.
//!
//! 2. **Single `StationCategory` enum.** Ten closed variants. String tags
//!    exist only at the serialization and presentation boundary.
//!
//! 3. **Ordered rule table.** Category dispatch is the explicit list
//!    [`RULES`], evaluated first-match-wins. The `970`/`972`/`974` fixed
//!    prefixes precede the `98`/`99` MID rule, which precedes the
//!    `free_form` catch-all.
//!
//! 4. **Absent MID is not zero.** [`Mid::Absent`] and `Mid::Present(0)` are
//!    distinct, and both fail the range check.
//!
//! ## Crate Policy
//!
//! - No I/O, no logging, no shared state. Safe to call from any thread.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod category;
pub mod classify;
pub mod error;
pub mod mid;
pub mod rules;

// Re-export primary types for ergonomic imports.
pub use category::{StationCategory, STATION_CATEGORY_COUNT};
pub use classify::{classify, classify_opt, ClassificationResult, FailureKind};
pub use error::MmsiError;
pub use mid::{extract_mid, Mid, MID_MAX, MID_MIN};
pub use rules::{matching_rule, Check, Rule, MMSI_LENGTH, RULES};
