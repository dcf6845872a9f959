//! Placeholder name correction.
//!
//! Template authors often capitalise the first letter of a placeholder
//! (`${FirstName}` for a variable declared as `firstName`). The cleaner walks
//! every paragraph of a document, nested tables included, and rewrites such
//! names to their declared spelling.
//!
//! Exactly one normalisation is attempted: lower-casing the first character.
//! A run is rewritten only when its text actually changes. Placeholders split
//! across several runs are not detected.
//!
//! Replacement is a plain substring replacement over the whole run text, so a
//! corrected name that also occurs inside a longer word of the same run is
//! rewritten there as well.

mod options;
mod report;

pub use options::CleanOptions;
pub use report::{CleanReport, Correction};

use crate::extract::{KeyExtractor, VariablePattern, VariablesExtractor};
use crate::model::{collect_paragraphs, DocumentBody, RunParagraph};
use crate::variable::{KeysHolder, ObjectVariable, Variables};

/// Corrects mis-cased placeholder names against a variable schema.
#[derive(Debug, Clone, Default)]
pub struct ObjectVariableCleaner {
    key_extractor: KeyExtractor,
    extractor: VariablesExtractor,
    options: CleanOptions,
}

impl ObjectVariableCleaner {
    /// Create a cleaner with the given options.
    pub fn new(options: CleanOptions) -> Self {
        Self {
            key_extractor: KeyExtractor::new(),
            extractor: VariablesExtractor::new(),
            options,
        }
    }

    /// Options in use.
    pub fn options(&self) -> &CleanOptions {
        &self.options
    }

    /// Correct every placeholder in `document` against the keys declared by `variables`.
    pub fn clean(&self, document: &mut dyn DocumentBody, variables: &Variables) -> CleanReport {
        let keys = KeysHolder::new(self.key_extractor.extract_keys(variables));
        self.clean_with_keys(document, &keys)
    }

    /// Correct every placeholder in `document` against an already extracted schema.
    pub fn clean_with_keys(&self, document: &mut dyn DocumentBody, keys: &KeysHolder) -> CleanReport {
        let mut report = CleanReport::new();

        for paragraph in collect_paragraphs(document) {
            report.paragraph_count += 1;
            self.clean_paragraph(paragraph, keys, &mut report);
        }

        log::debug!(
            "Cleaned {} paragraphs: {} of {} runs rewritten{}",
            report.paragraph_count,
            report.runs_rewritten,
            report.runs_scanned,
            if self.options.dry_run { " (dry run)" } else { "" }
        );

        report
    }

    /// Placeholder names of every run, in the order the cleaner visits them.
    ///
    /// Each run is scanned on its own, so a placeholder split across runs is
    /// not reported, matching what [`clean_with_keys`](Self::clean_with_keys) can correct.
    pub fn tokens(&self, document: &mut dyn DocumentBody) -> Vec<String> {
        let mut names = Vec::new();
        for paragraph in collect_paragraphs(document) {
            for run in paragraph.runs_mut() {
                if let Some(text) = run.text() {
                    names.extend(self.extractor.extract(text, &self.options.pattern));
                }
            }
        }
        names
    }

    fn clean_paragraph(&self, paragraph: &mut dyn RunParagraph, keys: &KeysHolder, report: &mut CleanReport) {
        for run in paragraph.runs_mut() {
            let Some(text) = run.text() else {
                continue;
            };
            if text.is_empty() {
                continue;
            }
            report.runs_scanned += 1;

            let Some(fixed) = self.fix_text(text, keys, &mut report.corrections) else {
                continue;
            };
            report.runs_rewritten += 1;

            if self.options.dry_run {
                log::debug!("Would rewrite run {:?} as {:?}", text, fixed);
            } else {
                run.set_text(fixed);
            }
        }
    }

    fn fix_text(&self, text: &str, keys: &KeysHolder, corrections: &mut Vec<Correction>) -> Option<String> {
        let mut current = text.to_string();

        for name in self.extractor.extract(text, &self.options.pattern) {
            if keys.contains_key_by_name(&name) {
                continue;
            }
            let candidate = ObjectVariable::fix_invalid_field_name(&name);
            if candidate == name || !keys.contains_key_by_name(&candidate) {
                continue;
            }
            // Repeated tokens are already gone after the first replacement.
            if current.contains(name.as_str()) {
                log::debug!("Correcting placeholder '{}' to '{}'", name, candidate);
                current = current.replace(name.as_str(), &candidate);
                corrections.push(Correction::new(name, candidate));
            }
        }

        (current != text).then_some(current)
    }
}

/// Correct the placeholder names of a single run text.
///
/// Returns the rewritten text, or `None` when nothing changed.
pub fn clean_run_text(text: &str, keys: &KeysHolder, pattern: &VariablePattern) -> Option<String> {
    let cleaner = ObjectVariableCleaner::new(CleanOptions::new().with_pattern(pattern.clone()));
    cleaner.fix_text(text, keys, &mut Vec::new())
}
