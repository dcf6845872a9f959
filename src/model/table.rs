//! Template tables.

use super::access::{BodyTable, DocumentBody, RunParagraph};
use super::Paragraph;
use serde::{Deserialize, Serialize};

/// A table in a template body or inside a cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// Rows in document order
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Text of every row, one line each.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(TableRow::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl BodyTable for Table {
    fn rows_mut(&mut self) -> Vec<Vec<&mut dyn DocumentBody>> {
        self.rows
            .iter_mut()
            .map(|row| {
                row.cells
                    .iter_mut()
                    .map(|cell| cell as &mut dyn DocumentBody)
                    .collect()
            })
            .collect()
    }
}

/// A row of cells.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in document order
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a row from its cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(TableCell::plain_text)
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A cell: its own paragraphs followed by any tables nested in it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableCell {
    /// Paragraphs of the cell
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,

    /// Tables nested inside the cell
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl TableCell {
    /// Create a cell holding one single-run paragraph.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![Paragraph::with_text(text)],
            tables: Vec::new(),
        }
    }

    /// Nest a table inside this cell.
    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::plain_text)
            .chain(self.tables.iter().map(Table::plain_text))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl DocumentBody for TableCell {
    fn parts_mut(&mut self) -> (Vec<&mut dyn RunParagraph>, Vec<&mut dyn BodyTable>) {
        let paragraphs: Vec<&mut dyn RunParagraph> = self
            .paragraphs
            .iter_mut()
            .map(|p| p as &mut dyn RunParagraph)
            .collect();
        let tables: Vec<&mut dyn BodyTable> = self
            .tables
            .iter_mut()
            .map(|t| t as &mut dyn BodyTable)
            .collect();
        (paragraphs, tables)
    }
}
