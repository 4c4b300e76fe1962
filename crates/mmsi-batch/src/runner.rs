//! # Batch Runner
//!
//! Applies the classifier to every record of a [`RecordSet`] and attaches
//! the result. Classification is a pure function, so records are fanned
//! out with rayon; the indexed collect keeps output in input order.
//!
//! The identity field is trimmed in the output record before it is
//! classified, so notes quote the trimmed value.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Serialize;

use mmsi_core::{classify_opt, ClassificationResult, StationCategory};

use crate::record::RecordSet;

/// Column names appended to every output record.
pub const OUTPUT_COLUMNS: [&str; 3] = ["mmsi_valid", "mmsi_category", "mmsi_note"];

/// One input record with its classification attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRecord {
    /// Original fields, identity trimmed.
    pub fields: Vec<String>,
    /// The identity that was classified, `None` when the field was absent.
    pub identity: Option<String>,
    pub result: ClassificationResult,
}

/// Totals for a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub invalid: usize,
    /// Record count per category, valid and invalid alike.
    pub by_category: BTreeMap<StationCategory, usize>,
}

impl BatchSummary {
    fn from_records(records: &[AnnotatedRecord]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            if !record.result.valid {
                summary.invalid += 1;
            }
            *summary.by_category.entry(record.result.category).or_insert(0) += 1;
        }
        summary
    }

    pub fn valid(&self) -> usize {
        self.total - self.invalid
    }
}

/// The augmented records of a batch run.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Input headers followed by [`OUTPUT_COLUMNS`].
    pub headers: Vec<String>,
    /// Index of the identity column among the input headers.
    pub identity_column: usize,
    pub records: Vec<AnnotatedRecord>,
    pub summary: BatchSummary,
}

impl BatchOutcome {
    /// Invalid records, in input order.
    pub fn invalid(&self) -> impl Iterator<Item = &AnnotatedRecord> {
        self.records.iter().filter(|r| !r.result.valid)
    }

    /// The first `limit` invalid identities with their notes.
    pub fn invalid_preview(&self, limit: usize) -> Vec<(&str, &str)> {
        self.invalid()
            .take(limit)
            .map(|r| (r.identity.as_deref().unwrap_or(""), r.result.note.as_str()))
            .collect()
    }

    /// Number of input columns, excluding the appended result columns.
    pub fn input_width(&self) -> usize {
        self.headers.len() - OUTPUT_COLUMNS.len()
    }
}

/// Classify every record of `set`.
pub fn run(set: RecordSet) -> BatchOutcome {
    let RecordSet {
        mut headers,
        rows,
        identity_column,
    } = set;

    let records: Vec<AnnotatedRecord> = rows
        .into_par_iter()
        .map(|fields| annotate(fields, identity_column))
        .collect();

    let summary = BatchSummary::from_records(&records);
    tracing::info!(
        total = summary.total,
        invalid = summary.invalid,
        "classified records"
    );

    headers.extend(OUTPUT_COLUMNS.iter().map(|c| c.to_string()));
    BatchOutcome {
        headers,
        identity_column,
        records,
        summary,
    }
}

fn annotate(mut fields: Vec<String>, identity_column: usize) -> AnnotatedRecord {
    let identity = fields.get_mut(identity_column).map(|field| {
        *field = field.trim().to_string();
        field.clone()
    });
    let result = classify_opt(identity.as_deref());
    AnnotatedRecord {
        fields,
        identity,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::read_records;

    fn outcome(data: &str) -> BatchOutcome {
        run(read_records(data.as_bytes(), "mmsi").unwrap())
    }

    #[test]
    fn counts_and_headers() {
        let out = outcome("id,mmsi\n1,525005123\n2,776000000\n3,\n4,970123456\n");
        assert_eq!(out.summary.total, 4);
        assert_eq!(out.summary.invalid, 2);
        assert_eq!(out.summary.valid(), 2);
        assert_eq!(
            out.headers,
            vec!["id", "mmsi", "mmsi_valid", "mmsi_category", "mmsi_note"]
        );
        assert_eq!(out.input_width(), 2);
    }

    #[test]
    fn output_order_matches_input() {
        let mut data = String::from("seq,mmsi\n");
        for i in 0..2000 {
            data.push_str(&format!("{i},{}\n", 201_000_000 + i));
        }
        let out = outcome(&data);
        for (i, record) in out.records.iter().enumerate() {
            assert_eq!(record.fields[0], i.to_string());
        }
    }

    #[test]
    fn identity_is_trimmed_before_classification() {
        let out = outcome("mmsi\n 52512345x \n");
        let record = &out.records[0];
        assert_eq!(record.fields[0], "52512345x");
        assert_eq!(record.identity.as_deref(), Some("52512345x"));
        assert_eq!(record.result.note, "contains non-digit characters: 52512345x");
    }

    #[test]
    fn absent_field_is_empty_identity() {
        let out = outcome("id,mmsi\n1\n");
        assert_eq!(out.records[0].identity, None);
        assert_eq!(out.records[0].result.note, "empty identity");
        assert_eq!(out.records[0].result.category, StationCategory::Unknown);
    }

    #[test]
    fn category_breakdown() {
        let out = outcome("mmsi\n525005123\n525005124\n002015678\n102015678\n");
        let by = &out.summary.by_category;
        assert_eq!(by.get(&StationCategory::ShipStation), Some(&2));
        assert_eq!(by.get(&StationCategory::CoastStation), Some(&1));
        assert_eq!(by.get(&StationCategory::Unknown), Some(&1));
        assert_eq!(by.values().sum::<usize>(), out.summary.total);
    }

    #[test]
    fn preview_is_first_invalid_in_order() {
        let out = outcome("mmsi\n112345678\n525005123\nabc\n912345678\n");
        let preview = out.invalid_preview(2);
        assert_eq!(
            preview,
            vec![
                ("112345678", "unrecognized prefix 1"),
                ("abc", "contains non-digit characters: abc"),
            ]
        );
        assert_eq!(out.invalid_preview(10).len(), 3);
    }

    #[test]
    fn empty_input() {
        let out = outcome("mmsi\n");
        assert_eq!(out.summary, BatchSummary::default());
        assert!(out.invalid_preview(5).is_empty());
    }

    #[test]
    fn summary_serializes_category_tags() {
        let out = outcome("mmsi\n970123456\n");
        let json = serde_json::to_value(&out.summary).unwrap();
        assert_eq!(json["by_category"]["ais_sart"], 1);
        assert_eq!(json["invalid"], 0);
    }
}
