//! Run-level access to a document tree.
//!
//! These traits are the only view of a document the cleaner needs: paragraphs
//! made of runs with readable and writable text, nested inside table cells to
//! any depth. Any document backend can implement them; the in-memory model in
//! this crate does.

/// A text-bearing run inside a paragraph.
pub trait RunText {
    /// Current text of the run, or `None` when the run carries no text.
    fn text(&self) -> Option<&str>;

    /// Overwrite the run text.
    fn set_text(&mut self, text: String);
}

/// A paragraph exposing its runs in order.
pub trait RunParagraph {
    /// Mutable access to every run of the paragraph, in document order.
    fn runs_mut(&mut self) -> Vec<&mut dyn RunText>;
}

/// A container of paragraphs and tables: the document body or a table cell.
pub trait DocumentBody {
    /// Split the body into its paragraphs and its tables, each in document order.
    fn parts_mut(&mut self) -> (Vec<&mut dyn RunParagraph>, Vec<&mut dyn BodyTable>);
}

/// A table whose cells are themselves bodies.
pub trait BodyTable {
    /// Rows of cells, in document order.
    fn rows_mut(&mut self) -> Vec<Vec<&mut dyn DocumentBody>>;
}

/// Collect every paragraph of `body`, depth first.
///
/// Top-level paragraphs come first, then for each table every row, every
/// cell, that cell's paragraphs followed by the paragraphs of tables nested
/// in the cell.
pub fn collect_paragraphs<'a>(body: &'a mut dyn DocumentBody) -> Vec<&'a mut dyn RunParagraph> {
    let mut paragraphs = Vec::new();
    collect_body(body, &mut paragraphs);
    paragraphs
}

fn collect_body<'a>(body: &'a mut dyn DocumentBody, out: &mut Vec<&'a mut dyn RunParagraph>) {
    let (paragraphs, tables) = body.parts_mut();
    out.extend(paragraphs);
    for table in tables {
        collect_table(table, out);
    }
}

fn collect_table<'a>(table: &'a mut dyn BodyTable, out: &mut Vec<&'a mut dyn RunParagraph>) {
    for row in table.rows_mut() {
        for cell in row {
            collect_body(cell, out);
        }
    }
}
