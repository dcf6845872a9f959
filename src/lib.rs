//! # docbind
//!
//! Variable binding model and placeholder name correction for rich-text
//! document templates.
//!
//! Templates carry placeholders such as `${firstName}`. This library models
//! the values bound to them (text, images, bullet lists, objects with nested
//! fields and column-major tables), derives the schema of declared keys, and
//! repairs placeholders whose first letter was capitalised by mistake.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docbind::{json, DocBind};
//!
//! fn main() -> docbind::Result<()> {
//!     let mut doc = json::read_document("template.json")?;
//!     let variables = json::read_variables("variables.json")?;
//!
//!     let report = DocBind::new().clean(&mut doc, &variables);
//!     println!("{} runs rewritten", report.runs_rewritten);
//!
//!     json::write_document(&doc, "template.fixed.json", json::JsonFormat::Pretty)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Typed variables**: text, image, bullet list, object and table
//! - **Column-major tables**: row validation and object field expansion
//! - **Schema extraction**: every declared key, nested tables included
//! - **Name correction**: `${FirstName}` becomes `${firstName}` when declared

pub mod cleaner;
pub mod error;
pub mod extract;
pub mod json;
pub mod model;
pub mod variable;

// Re-export commonly used types
pub use cleaner::{clean_run_text, CleanOptions, CleanReport, Correction, ObjectVariableCleaner};
pub use error::{Error, Result};
pub use extract::{KeyExtractor, VariablePattern, VariablesExtractor};
pub use json::JsonFormat;
pub use model::{
    Block, Document, Inline, Metadata, Paragraph, Resource, RunFormat, Table, TableCell,
    TableRow, TextRun,
};
pub use variable::{
    BulletListVariable, ImageSource, ImageVariable, Key, KeysHolder, ObjectVariable,
    TableVariable, TextVariable, Variable, VariableType, Variables,
};

/// Builder for cleaning documents against a set of variables.
///
/// # Example
///
/// ```
/// use docbind::{DocBind, Document, Paragraph, Variables};
///
/// let mut doc = Document::new();
/// doc.add_paragraph(Paragraph::with_text("Dear ${FirstName},"));
///
/// let mut variables = Variables::new();
/// variables.add_text("firstName", "Ann");
///
/// let report = DocBind::new().clean(&mut doc, &variables);
/// assert_eq!(report.runs_rewritten, 1);
/// assert_eq!(doc.plain_text(), "Dear ${firstName},");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocBind {
    options: CleanOptions,
}

impl DocBind {
    /// Create a new builder with default delimiters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom placeholder pattern.
    pub fn with_pattern(mut self, pattern: VariablePattern) -> Self {
        self.options = self.options.with_pattern(pattern);
        self
    }

    /// Use custom placeholder delimiters.
    pub fn with_delimiters(self, prefix: &str, suffix: &str) -> Result<Self> {
        Ok(self.with_pattern(VariablePattern::new(prefix, suffix)?))
    }

    /// Report corrections without rewriting the document.
    pub fn dry_run(mut self) -> Self {
        self.options = self.options.with_dry_run(true);
        self
    }

    /// Options in use.
    pub fn options(&self) -> &CleanOptions {
        &self.options
    }

    /// Every key declared by `variables`.
    pub fn keys(&self, variables: &Variables) -> KeysHolder {
        KeysHolder::new(KeyExtractor::new().extract_keys(variables))
    }

    /// Placeholder names found in the runs of `doc`, in order of appearance.
    ///
    /// Runs are scanned one by one, the same way [`clean`](Self::clean) sees
    /// them, so a placeholder split across runs is not listed.
    pub fn tokens(&self, doc: &mut Document) -> Vec<String> {
        ObjectVariableCleaner::new(self.options.clone()).tokens(doc)
    }

    /// Correct mis-cased placeholder names in `doc`.
    ///
    /// The modification date is updated when any run was rewritten.
    pub fn clean(&self, doc: &mut Document, variables: &Variables) -> CleanReport {
        let report = ObjectVariableCleaner::new(self.options.clone()).clean(doc, variables);
        if report.changed() && !self.options.dry_run {
            doc.metadata.touch();
        }
        report
    }
}
