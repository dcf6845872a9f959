//! In-memory document model for templates.
//!
//! The model mirrors what the binding layer needs from a rich-text document:
//! a body of paragraphs and tables, paragraphs made of runs, and table cells
//! that hold paragraphs and further tables. The [`access`] traits expose that
//! shape to the cleaner so other backends can plug in.

pub mod access;
mod block;
mod document;
mod paragraph;
mod resource;
mod table;

pub use access::{collect_paragraphs, BodyTable, DocumentBody, RunParagraph, RunText};
pub use block::Block;
pub use document::{Document, Metadata};
pub use paragraph::{Inline, Paragraph, RunFormat, TextRun};
pub use resource::Resource;
pub use table::{Table, TableCell, TableRow};
