//! Cleaning options and configuration.

use crate::extract::VariablePattern;

/// Options for the name correction pass.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Placeholder delimiters
    pub pattern: VariablePattern,

    /// Report corrections without rewriting any run
    pub dry_run: bool,
}

impl CleanOptions {
    /// Create new clean options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set placeholder delimiters.
    pub fn with_pattern(mut self, pattern: VariablePattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Enable or disable dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
