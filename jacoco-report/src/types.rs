//! Core types for the coverage report converter
//!
//! This module defines the data model the converter works with: one
//! `CoverageRow` per input record, a `CoverageTotals` accumulator for the
//! run-wide aggregate, and the `Percentage` values derived from both.

use std::fmt;
use std::path::PathBuf;

/// Result type for converter operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// One record from a JaCoCo CSV report
///
/// This represents a single class entry as read from the report, before
/// any percentage computation or HTML rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageRow {
    /// Report group (usually the Gradle/Maven project name)
    pub group: String,
    /// Java package of the class
    pub package: String,
    /// Simple class name
    pub class: String,
    /// Bytecode instructions not executed by any test
    pub instructions_missed: u64,
    /// Bytecode instructions executed at least once
    pub instructions_covered: u64,
    /// Conditional branches not taken by any test
    pub branch_missed: u64,
    /// Conditional branches taken at least once
    pub branch_covered: u64,
}

impl CoverageRow {
    /// Instruction coverage for this class
    pub fn instruction_percentage(&self) -> Percentage {
        Percentage::from_counts(self.instructions_covered, self.instructions_missed)
    }

    /// Branch coverage for this class
    pub fn branch_percentage(&self) -> Percentage {
        Percentage::from_counts(self.branch_covered, self.branch_missed)
    }
}

/// A coverage percentage on the 0-100 scale, or `NoData` when the class has
/// nothing to measure (covered + missed = 0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Percentage {
    /// covered * 100 / (covered + missed), rounded to two decimals
    Covered(f64),
    /// Zero denominator; rendered as "n/a" and classified below any threshold
    NoData,
}

impl Percentage {
    /// Compute a percentage from covered/missed counters
    ///
    /// Returns `NoData` instead of dividing when both counters are zero.
    pub fn from_counts(covered: u64, missed: u64) -> Self {
        let total = covered + missed;
        if total == 0 {
            return Percentage::NoData;
        }
        let raw = covered as f64 * 100.0 / total as f64;
        Percentage::Covered((raw * 100.0).round() / 100.0)
    }

    /// True if this percentage should be styled as low coverage
    ///
    /// `NoData` is always low: a class with nothing measured must not
    /// render as if it were covered.
    pub fn is_below(&self, threshold: f64) -> bool {
        match self {
            Percentage::Covered(value) => *value < threshold,
            Percentage::NoData => true,
        }
    }

    /// Numeric value, if one exists
    pub fn value(&self) -> Option<f64> {
        match self {
            Percentage::Covered(value) => Some(*value),
            Percentage::NoData => None,
        }
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Percentage::Covered(value) => write!(f, "{:.2}%", value),
            Percentage::NoData => write!(f, "n/a"),
        }
    }
}

/// Branch counters summed across all rows of a single conversion
///
/// Initialized to zero at the start of a run, bumped once per row, read
/// once at the end. Never outlives the conversion that created it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoverageTotals {
    /// Sum of `branch_covered` over all rows
    pub branch_covered: u64,
    /// Sum of `branch_missed` over all rows
    pub branch_missed: u64,
}

impl CoverageTotals {
    /// Create a zeroed accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one row's branch counters
    pub fn add(&mut self, row: &CoverageRow) {
        self.branch_covered += row.branch_covered;
        self.branch_missed += row.branch_missed;
    }

    /// Overall branch coverage across everything added so far
    pub fn overall_percentage(&self) -> Percentage {
        Percentage::from_counts(self.branch_covered, self.branch_missed)
    }
}

/// Errors that can occur during conversion
///
/// All variants are terminal for the invocation; none are retried, and no
/// output file is produced when one is returned.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Input file has no data rows: {}", .0.display())]
    EmptyInput(PathBuf),

    #[error("Failed to read coverage report: {0}")]
    Read(String),

    #[error("Failed to write HTML report: {0}")]
    Write(String),
}
