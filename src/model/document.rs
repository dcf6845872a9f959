//! Document-level types.

use super::access::{BodyTable, DocumentBody, RunParagraph};
use super::{Block, Paragraph, Table};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A template document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata
    #[serde(default)]
    pub metadata: Metadata,

    /// Body blocks in document order
    #[serde(default)]
    pub body: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a paragraph to the body.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.body.push(Block::Paragraph(paragraph));
    }

    /// Append a table to the body.
    pub fn add_table(&mut self, table: Table) {
        self.body.push(Block::Table(table));
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Body text, blocks separated by a blank line.
    pub fn plain_text(&self) -> String {
        self.body
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl DocumentBody for Document {
    fn parts_mut(&mut self) -> (Vec<&mut dyn RunParagraph>, Vec<&mut dyn BodyTable>) {
        let mut paragraphs: Vec<&mut dyn RunParagraph> = Vec::new();
        let mut tables: Vec<&mut dyn BodyTable> = Vec::new();
        for block in &mut self.body {
            match block {
                Block::Paragraph(p) => paragraphs.push(p),
                Block::Table(t) => tables.push(t),
            }
        }
        (paragraphs, tables)
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub title: Option<String>,

    pub author: Option<String>,

    /// Set when a correction pass rewrites at least one run
    pub modified: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Record `now` as the last modification date.
    pub fn touch(&mut self) {
        self.modified = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{access::collect_paragraphs, TableCell, TableRow};

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.plain_text(), "");
    }

    #[test]
    fn test_metadata_touch() {
        let mut metadata = Metadata {
            title: Some("Offer letter".into()),
            ..Default::default()
        };
        assert!(metadata.modified.is_none());
        metadata.touch();
        assert!(metadata.modified.is_some());
        assert_eq!(metadata.title.as_deref(), Some("Offer letter"));
    }

    #[test]
    fn test_paragraph_order_is_depth_first() {
        let mut inner = Table::new();
        inner.add_row(TableRow::new(vec![TableCell::text("nested")]));

        let mut outer = Table::new();
        outer.add_row(TableRow::new(vec![
            TableCell::text("cell").with_table(inner),
            TableCell::text("sibling"),
        ]));

        let mut doc = Document::new();
        doc.add_table(outer);
        doc.add_paragraph(Paragraph::with_text("top"));

        let mut texts = Vec::new();
        for paragraph in collect_paragraphs(&mut doc) {
            for run in paragraph.runs_mut() {
                texts.push(run.text().unwrap_or_default().to_string());
            }
        }
        assert_eq!(texts, vec!["top", "cell", "nested", "sibling"]);
    }
}
