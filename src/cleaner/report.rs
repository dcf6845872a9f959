//! Outcome of a cleaning pass.

use serde::{Deserialize, Serialize};

/// One placeholder name rewritten in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// Name as found in the document
    pub from: String,
    /// Declared name it was replaced with
    pub to: String,
}

impl Correction {
    /// Create a correction record.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Statistics collected while cleaning a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleanReport {
    /// Number of paragraphs visited, nested tables included
    pub paragraph_count: usize,

    /// Number of runs that carried text
    pub runs_scanned: usize,

    /// Number of runs whose text was rewritten (or would be, in dry-run mode)
    pub runs_rewritten: usize,

    /// Corrections in document order
    pub corrections: Vec<Correction>,
}

impl CleanReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any run changed.
    pub fn changed(&self) -> bool {
        self.runs_rewritten > 0
    }

    /// Merge another report into this one.
    pub fn merge(&mut self, other: &CleanReport) {
        self.paragraph_count += other.paragraph_count;
        self.runs_scanned += other.runs_scanned;
        self.runs_rewritten += other.runs_rewritten;
        self.corrections.extend(other.corrections.iter().cloned());
    }
}
