//! Placeholder delimiter configuration.

use crate::error::{Error, Result};
use regex::Regex;

/// Delimiters surrounding a placeholder name, e.g. `${name}`.
#[derive(Debug, Clone)]
pub struct VariablePattern {
    prefix: String,
    suffix: String,
    regex: Regex,
}

impl VariablePattern {
    /// Default opening delimiter.
    pub const DEFAULT_PREFIX: &'static str = "${";
    /// Default closing delimiter.
    pub const DEFAULT_SUFFIX: &'static str = "}";

    /// Create a pattern from its delimiters.
    ///
    /// A name is the shortest non-empty text between the prefix and the next
    /// suffix, so it may contain any character, delimiter characters included
    /// (`ph(Total)` and `${Price$}` both match). When the matched text itself
    /// contains the prefix, the name starts after its last occurrence, so an
    /// unclosed prefix does not swallow the next placeholder.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        let suffix = suffix.into();
        if prefix.is_empty() {
            return Err(Error::InvalidPattern("prefix must not be empty".into()));
        }
        if suffix.is_empty() {
            return Err(Error::InvalidPattern("suffix must not be empty".into()));
        }

        let source = format!("{}(.+?){}", regex::escape(&prefix), regex::escape(&suffix));
        let regex = Regex::new(&source).map_err(|e| Error::InvalidPattern(e.to_string()))?;

        Ok(Self {
            prefix,
            suffix,
            regex,
        })
    }

    /// Replace the opening delimiter.
    pub fn with_prefix(self, prefix: impl Into<String>) -> Result<Self> {
        Self::new(prefix, self.suffix)
    }

    /// Replace the closing delimiter.
    pub fn with_suffix(self, suffix: impl Into<String>) -> Result<Self> {
        Self::new(self.prefix, suffix)
    }

    /// Opening delimiter.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Closing delimiter.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Compiled matcher; capture group 1 is the name.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Placeholder names in `text`, in order of appearance.
    pub fn names<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        let prefix = self.prefix.as_str();
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(move |m| match m.as_str().rfind(prefix) {
                Some(at) => &m.as_str()[at + prefix.len()..],
                None => m.as_str(),
            })
            .filter(|name| !name.is_empty())
    }

    /// Surround a name with the delimiters.
    pub fn wrap(&self, name: &str) -> String {
        format!("{}{}{}", self.prefix, name, self.suffix)
    }
}

impl Default for VariablePattern {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIX, Self::DEFAULT_SUFFIX)
            .expect("default delimiters form a valid pattern")
    }
}
