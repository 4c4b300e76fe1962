//! # Spreadsheet Report
//!
//! Writes a [`BatchOutcome`] as a single-sheet `.xlsx` workbook. The header
//! row is bold; every cell of an invalid record is filled solid pink so the
//! rows stand out when the sheet is scanned by eye.
//!
//! The identity column is always written as text so leading zeros survive.
//! Other fields that parse as finite numbers are written as numbers. Text
//! longer than a cell can hold is cut to [`MAX_CELL_CHARS`] characters.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatPattern, Workbook, Worksheet, XlsxError};

use crate::error::BatchError;
use crate::runner::{AnnotatedRecord, BatchOutcome};

/// Worksheet name used when none is configured.
pub const DEFAULT_SHEET_NAME: &str = "MMSI Validation";

/// Background fill of invalid rows, `#FFC7CE`.
pub const INVALID_FILL: u32 = 0xFFC7CE;

/// Most characters a worksheet cell can hold.
pub const MAX_CELL_CHARS: usize = 32_767;

const MAX_ROWS: usize = 1_048_576;
const MAX_COLUMNS: usize = 16_384;

/// Write the report for `outcome` to `path`.
pub fn write_report(
    outcome: &BatchOutcome,
    path: &Path,
    sheet_name: &str,
) -> Result<(), BatchError> {
    let mut workbook = build_workbook(outcome, sheet_name)?;
    workbook.save(path)?;
    tracing::debug!(path = %path.display(), rows = outcome.records.len(), "wrote report");
    Ok(())
}

/// Render the report into memory.
pub fn report_bytes(outcome: &BatchOutcome, sheet_name: &str) -> Result<Vec<u8>, BatchError> {
    let mut workbook = build_workbook(outcome, sheet_name)?;
    Ok(workbook.save_to_buffer()?)
}

/// Whether a record's row is highlighted in the report.
pub fn is_highlighted(record: &AnnotatedRecord) -> bool {
    !record.result.valid
}

fn build_workbook(outcome: &BatchOutcome, sheet_name: &str) -> Result<Workbook, BatchError> {
    let rows = outcome.records.len() + 1;
    if rows > MAX_ROWS {
        return Err(BatchError::TooManyRows {
            rows,
            limit: MAX_ROWS,
        });
    }
    let columns = outcome.headers.len();
    if columns > MAX_COLUMNS {
        return Err(BatchError::TooManyColumns {
            columns,
            limit: MAX_COLUMNS,
        });
    }

    let header = Format::new().set_bold();
    let invalid = Format::new()
        .set_pattern(FormatPattern::Solid)
        .set_background_color(Color::RGB(INVALID_FILL));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, name) in outcome.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, clip(name), &header)?;
    }

    let identity_column = outcome.identity_column;
    let width = outcome.input_width();
    for (i, record) in outcome.records.iter().enumerate() {
        let row = (i + 1) as u32;
        let fill = is_highlighted(record).then_some(&invalid);

        for col in 0..width {
            let field = record.fields.get(col).map(String::as_str).unwrap_or("");
            let cell = if col == identity_column {
                Cell::text(field)
            } else {
                Cell::infer(field)
            };
            cell.write(worksheet, row, col as u16, fill)?;
        }

        let result = &record.result;
        let base = width as u16;
        Cell::Bool(result.valid).write(worksheet, row, base, fill)?;
        Cell::Text(result.category.as_str()).write(worksheet, row, base + 1, fill)?;
        Cell::text(&result.note).write(worksheet, row, base + 2, fill)?;
    }

    worksheet.autofit();
    Ok(workbook)
}

fn clip(value: &str) -> &str {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}

enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Bool(bool),
    Blank,
}

impl<'a> Cell<'a> {
    fn text(value: &'a str) -> Self {
        if value.is_empty() {
            Self::Blank
        } else {
            Self::Text(clip(value))
        }
    }

    fn infer(value: &'a str) -> Self {
        match value.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Self::Number(n),
            _ => Self::text(value),
        }
    }

    fn write(
        self,
        sheet: &mut Worksheet,
        row: u32,
        col: u16,
        fill: Option<&Format>,
    ) -> Result<(), XlsxError> {
        match (self, fill) {
            (Self::Text(s), Some(f)) => {
                sheet.write_string_with_format(row, col, s, f).map(drop)
            }
            (Self::Text(s), None) => sheet.write_string(row, col, s).map(drop),
            (Self::Number(n), Some(f)) => {
                sheet.write_number_with_format(row, col, n, f).map(drop)
            }
            (Self::Number(n), None) => sheet.write_number(row, col, n).map(drop),
            (Self::Bool(b), Some(f)) => {
                sheet.write_boolean_with_format(row, col, b, f).map(drop)
            }
            (Self::Bool(b), None) => sheet.write_boolean(row, col, b).map(drop),
            (Self::Blank, Some(f)) => sheet.write_blank(row, col, f).map(drop),
            (Self::Blank, None) => Ok(()),
        }
    }
}
