//! JaCoCo CSV report parser
//!
//! Reads the CSV report JaCoCo writes alongside its other outputs and
//! decodes the columns the converter consumes. The full report carries 13
//! columns per row; only the identity fields and the instruction/branch
//! counters are used here.

use crate::config::MalformedRowPolicy;
use crate::types::{ConvertError, CoverageRow, Result};
use std::path::Path;

// Column layout of a JaCoCo CSV report:
// GROUP,PACKAGE,CLASS,INSTRUCTION_MISSED,INSTRUCTION_COVERED,BRANCH_MISSED,
// BRANCH_COVERED,LINE_MISSED,LINE_COVERED,COMPLEXITY_MISSED,
// COMPLEXITY_COVERED,METHOD_MISSED,METHOD_COVERED
const COL_GROUP: usize = 0;
const COL_PACKAGE: usize = 1;
const COL_CLASS: usize = 2;
const COL_INSTRUCTIONS_MISSED: usize = 3;
const COL_INSTRUCTIONS_COVERED: usize = 4;
const COL_BRANCH_MISSED: usize = 5;
const COL_BRANCH_COVERED: usize = 6;

/// Columns a row must have for the converter to consume it
const MIN_COLUMNS: usize = 7;

/// Result of parsing one report file
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReport {
    /// Decoded rows, in input order
    pub rows: Vec<CoverageRow>,
    /// Rows dropped under [`MalformedRowPolicy::Skip`]
    pub rows_skipped: usize,
}

/// Parse a JaCoCo CSV report into coverage rows
///
/// The header row is consumed and discarded. A missing file maps to
/// [`ConvertError::NotFound`]; a file with no data rows (zero bytes or
/// header only) maps to [`ConvertError::EmptyInput`]. Rows with too few
/// columns or non-numeric counters are handled according to `policy`:
/// `Fail` aborts with a read error naming the data row, `Skip` drops the
/// row with a warning and counts it in the result.
pub fn parse_report(path: &Path, policy: MalformedRowPolicy) -> Result<ParsedReport> {
    log::info!("Parsing coverage report: {:?}", path);

    if !path.exists() {
        return Err(ConvertError::NotFound(path.to_path_buf()));
    }

    // Flexible mode lets short rows through so the column check below can
    // report them per policy instead of failing the whole stream.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| ConvertError::Read(format!("Failed to open {:?}: {}", path, e)))?;

    let mut rows = Vec::new();
    let mut rows_skipped = 0usize;
    let mut data_rows = 0usize;

    for (index, result) in reader.records().enumerate() {
        // 1-based data-row number, not counting the header
        let row_number = index + 1;
        let record = result.map_err(|e| {
            ConvertError::Read(format!("Malformed CSV at data row {}: {}", row_number, e))
        })?;
        data_rows += 1;

        match decode_record(&record, row_number) {
            Ok(row) => rows.push(row),
            Err(err) => match policy {
                MalformedRowPolicy::Fail => return Err(err),
                MalformedRowPolicy::Skip => {
                    log::warn!("Skipping data row {}: {}", row_number, err);
                    rows_skipped += 1;
                }
            },
        }
    }

    if data_rows == 0 {
        return Err(ConvertError::EmptyInput(path.to_path_buf()));
    }

    log::info!("Parsed {} coverage rows from {:?}", rows.len(), path);

    Ok(ParsedReport { rows, rows_skipped })
}

/// Decode one CSV record into a coverage row
fn decode_record(record: &csv::StringRecord, row_number: usize) -> Result<CoverageRow> {
    if record.len() < MIN_COLUMNS {
        return Err(ConvertError::Read(format!(
            "Data row {} has {} columns, expected at least {}",
            row_number,
            record.len(),
            MIN_COLUMNS
        )));
    }

    Ok(CoverageRow {
        group: record[COL_GROUP].to_string(),
        package: record[COL_PACKAGE].to_string(),
        class: record[COL_CLASS].to_string(),
        instructions_missed: parse_counter(record, COL_INSTRUCTIONS_MISSED, row_number)?,
        instructions_covered: parse_counter(record, COL_INSTRUCTIONS_COVERED, row_number)?,
        branch_missed: parse_counter(record, COL_BRANCH_MISSED, row_number)?,
        branch_covered: parse_counter(record, COL_BRANCH_COVERED, row_number)?,
    })
}

/// Parse one counter column as a base-10 non-negative integer
fn parse_counter(record: &csv::StringRecord, column: usize, row_number: usize) -> Result<u64> {
    let field = &record[column];
    field.trim().parse::<u64>().map_err(|_| {
        ConvertError::Read(format!(
            "Data row {}, column {}: expected a non-negative integer, got {:?}",
            row_number,
            column + 1,
            field
        ))
    })
}
