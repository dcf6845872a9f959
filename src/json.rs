//! JSON reading and writing for documents and variables.

use crate::error::{Error, Result};
use crate::model::Document;
use crate::variable::Variables;
use std::fs;
use std::path::Path;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Json(format!("JSON serialization error: {}", e)))
}

/// Parse a document from JSON text.
pub fn document_from_str(json: &str) -> Result<Document> {
    Ok(serde_json::from_str(json)?)
}

/// Read a document from a JSON file.
pub fn read_document(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    log::debug!("Reading document from {}", path.display());
    document_from_str(&fs::read_to_string(path)?)
}

/// Write a document to a JSON file.
pub fn write_document(doc: &Document, path: impl AsRef<Path>, format: JsonFormat) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_json(doc, format)?)?;
    log::debug!("Wrote document to {}", path.display());
    Ok(())
}

/// Parse variables from JSON text.
///
/// The input is an array of tagged variables; table rows are validated while
/// parsing, so a malformed table is reported here.
pub fn variables_from_str(json: &str) -> Result<Variables> {
    Ok(serde_json::from_str(json)?)
}

/// Read variables from a JSON file.
pub fn read_variables(path: impl AsRef<Path>) -> Result<Variables> {
    let path = path.as_ref();
    log::debug!("Reading variables from {}", path.display());
    variables_from_str(&fs::read_to_string(path)?)
}
