//! Schema and placeholder extraction.

mod keys;
mod pattern;
mod tokens;

pub use keys::KeyExtractor;
pub use pattern::VariablePattern;
pub use tokens::VariablesExtractor;
