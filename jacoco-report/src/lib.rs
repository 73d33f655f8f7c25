//! JaCoCo Report Converter Library
//!
//! A small, reusable library for converting JaCoCo CSV coverage reports
//! into self-contained HTML table documents.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on conversion:
//! - Parses the CSV report and decodes the columns it consumes
//! - Renders one table row per class with color-coded percentages
//! - Appends the total branch coverage line and compacts the document
//! - Reports typed errors for missing, empty, or malformed input
//!
//! The library does NOT:
//! - Run tests or produce coverage data (that is JaCoCo's job)
//! - Handle CLI flags, config files, or logging setup
//! - Track coverage across runs
//!
//! All higher-level functionality is in the application layer
//! (jacoco-report-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use jacoco_report::{ConvertConfig, Converter};
//! use std::path::Path;
//!
//! // Configure the conversion
//! let config = ConvertConfig::new()
//!     .with_title("Service Coverage")
//!     .with_red_threshold(50.0);
//!
//! // Convert the report
//! let converter = Converter::with_config(config);
//! let summary = converter
//!     .convert(
//!         Path::new("build/reports/jacoco/test/jacocoTestReport.csv"),
//!         Path::new("build/reports/jacoco/test/output_table.html"),
//!     )
//!     .unwrap();
//!
//! println!(
//!     "{} rows, total branch coverage {}",
//!     summary.rows_converted, summary.total_branch_coverage
//! );
//! ```

// Public modules
pub mod config;
pub mod converter;
pub mod types;

// Re-export main types for convenience
pub use config::{ConvertConfig, MalformedRowPolicy};
pub use converter::{ConvertSummary, Converter};
pub use types::{ConvertError, CoverageRow, CoverageTotals, Percentage, Result};

// Internal modules (not exposed in public API)
mod html;
mod parser;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
