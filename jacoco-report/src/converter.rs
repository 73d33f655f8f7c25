//! Main converter API
//!
//! This module provides the primary interface for the conversion library.
//! The Converter struct is the entry point: point it at a JaCoCo CSV report
//! and it writes a self-contained HTML table document next to your build
//! outputs.

use crate::config::ConvertConfig;
use crate::html;
use crate::parser;
use crate::types::{ConvertError, CoverageTotals, Percentage, Result};
use std::path::Path;

/// The main converter struct - entry point for report conversion
pub struct Converter {
    /// Active configuration (threshold, title, malformed-row policy)
    config: ConvertConfig,
}

impl Converter {
    /// Create a converter with default configuration
    pub fn new() -> Self {
        Self {
            config: ConvertConfig::new(),
        }
    }

    /// Create a converter with the given configuration
    pub fn with_config(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Access the active configuration
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Convert a JaCoCo CSV report into an HTML table document
    ///
    /// Parses the report, renders one table row per coverage row while
    /// accumulating branch totals, appends the total branch coverage line,
    /// compacts the document, and writes it in a single step.
    ///
    /// # Arguments
    /// * `input` - Path to the CSV report
    /// * `output` - Path the HTML document is written to (created or truncated)
    ///
    /// # Returns
    /// * `Result<ConvertSummary>` - Row counts and the overall branch coverage
    ///
    /// # Errors
    /// Returns `NotFound` if `input` does not exist, `EmptyInput` if it has no
    /// data rows, `Read` for malformed content under the `Fail` policy, and
    /// `Write` if `output` cannot be written. No output file is produced on
    /// any error.
    ///
    /// # Example
    /// ```no_run
    /// use jacoco_report::Converter;
    /// use std::path::Path;
    ///
    /// let converter = Converter::new();
    /// let summary = converter
    ///     .convert(
    ///         Path::new("build/reports/jacoco/test/jacocoTestReport.csv"),
    ///         Path::new("build/reports/jacoco/test/output_table.html"),
    ///     )
    ///     .unwrap();
    /// println!("Total branch coverage: {}", summary.total_branch_coverage);
    /// ```
    pub fn convert(&self, input: &Path, output: &Path) -> Result<ConvertSummary> {
        log::info!("Converting {:?} -> {:?}", input, output);

        let report = parser::parse_report(input, self.config.malformed_rows)?;

        // Render the whole document before touching the output path, so a
        // failed conversion never leaves a partial file behind.
        let mut document = String::with_capacity(1024 + report.rows.len() * 512);
        document.push_str(&html::render_header(&self.config.title));

        let mut totals = CoverageTotals::new();
        for row in &report.rows {
            totals.add(row);
            log::debug!(
                "Rendering {}.{}: instructions {}, branches {}",
                row.package,
                row.class,
                row.instruction_percentage(),
                row.branch_percentage()
            );
            document.push_str(&html::render_row(row, &self.config));
        }

        let total = totals.overall_percentage();
        document.push_str(&html::render_footer(total, &self.config));

        let document = html::compact(&document);

        std::fs::write(output, &document)
            .map_err(|e| ConvertError::Write(format!("Failed to write {:?}: {}", output, e)))?;

        if report.rows_skipped > 0 {
            log::warn!("{} malformed data rows skipped", report.rows_skipped);
        }
        log::info!(
            "Wrote {:?}: {} rows, total branch coverage {}",
            output,
            report.rows.len(),
            total
        );

        Ok(ConvertSummary {
            rows_converted: report.rows.len(),
            rows_skipped: report.rows_skipped,
            total_branch_coverage: total,
        })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Row counts and overall branch coverage from one conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertSummary {
    /// Rows rendered into the table
    pub rows_converted: usize,
    /// Malformed rows dropped under the skip policy
    pub rows_skipped: usize,
    /// Branch coverage accumulated across all converted rows
    pub total_branch_coverage: Percentage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    const HEADER: &str = "GROUP,PACKAGE,CLASS,INSTRUCTION_MISSED,INSTRUCTION_COVERED,\
BRANCH_MISSED,BRANCH_COVERED,LINE_MISSED,LINE_COVERED,COMPLEXITY_MISSED,\
COMPLEXITY_COVERED,METHOD_MISSED,METHOD_COVERED";

    #[test]
    fn test_converter_creation() {
        let converter = Converter::new();
        assert_eq!(converter.config().red_threshold, 0.5);
        assert_eq!(converter.config().title, "Coverage Report");
    }

    #[test]
    fn test_convert_simple_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("jacocoTestReport.csv");
        let output = dir.path().join("output_table.html");

        let mut file = fs::File::create(&input).unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(file, "demo,com.example,Foo,10,90,5,15,0,0,0,0,0,0").unwrap();
        drop(file);

        let summary = Converter::new().convert(&input, &output).unwrap();

        assert_eq!(summary.rows_converted, 1);
        assert_eq!(summary.rows_skipped, 0);
        assert_eq!(summary.total_branch_coverage, Percentage::Covered(75.0));

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("Total Branch Coverage: 75.00%"));
    }

    #[test]
    fn test_convert_missing_input_produces_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.csv");
        let output = dir.path().join("output_table.html");

        let err = Converter::new().convert(&input, &output).unwrap_err();

        assert!(matches!(err, ConvertError::NotFound(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_convert_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("report.csv");
        let output = dir.path().join("no_such_dir").join("output_table.html");

        let mut file = fs::File::create(&input).unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(file, "demo,com.example,Foo,10,90,5,15,0,0,0,0,0,0").unwrap();
        drop(file);

        let err = Converter::new().convert(&input, &output).unwrap_err();

        assert!(matches!(err, ConvertError::Write(_)));
        assert!(!output.exists());
    }
}
