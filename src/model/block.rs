//! Body-level blocks.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A top-level element of a document body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of runs
    Paragraph(Paragraph),

    /// A table
    Table(Table),
}

impl Block {
    /// Plain text of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph(p) => p.plain_text(),
            Block::Table(t) => t.plain_text(),
        }
    }
}
