//! Converter configuration types
//!
//! This module defines the minimal configuration needed by the conversion
//! library. Path handling, config files and CLI flags are the application
//! layer's concern.

use serde::{Deserialize, Serialize};

use crate::types::Percentage;

/// Configuration for the conversion library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Percentages (0-100 scale) below this value are styled red
    #[serde(default = "default_red_threshold")]
    pub red_threshold: f64,

    /// Text of the HTML document's title element
    #[serde(default = "default_title")]
    pub title: String,

    /// What to do with rows that fail positional or numeric parsing
    #[serde(default)]
    pub malformed_rows: MalformedRowPolicy,
}

fn default_red_threshold() -> f64 {
    0.5
}

fn default_title() -> String {
    "Coverage Report".to_string()
}

/// Policy for rows with too few columns or non-numeric counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedRowPolicy {
    /// Abort the conversion with a read error naming the row
    #[default]
    Fail,
    /// Log a warning, count the row as skipped, and continue
    Skip,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            red_threshold: default_red_threshold(),
            title: default_title(),
            malformed_rows: MalformedRowPolicy::default(),
        }
    }
}

impl ConvertConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the red/green color threshold
    pub fn with_red_threshold(mut self, threshold: f64) -> Self {
        self.red_threshold = threshold;
        self
    }

    /// Builder method: set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder method: set the malformed-row policy
    pub fn with_malformed_rows(mut self, policy: MalformedRowPolicy) -> Self {
        self.malformed_rows = policy;
        self
    }

    /// Check if a percentage counts as low coverage under this configuration
    pub fn is_low(&self, percentage: &Percentage) -> bool {
        percentage.is_below(self.red_threshold)
    }
}
