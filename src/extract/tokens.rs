//! Placeholder token scanning.

use super::VariablePattern;

/// Finds placeholder names in text.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariablesExtractor;

impl VariablesExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Names of every placeholder in `text`, in order of appearance.
    ///
    /// Duplicates are kept.
    pub fn extract(&self, text: &str, pattern: &VariablePattern) -> Vec<String> {
        pattern.names(text).map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_in_order_with_duplicates() {
        let extractor = VariablesExtractor::new();
        let pattern = VariablePattern::default();
        let names = extractor.extract("${b} and ${a}, again ${b}", &pattern);
        assert_eq!(names, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_extract_none() {
        let extractor = VariablesExtractor::new();
        let pattern = VariablePattern::default();
        assert!(extractor.extract("no placeholders", &pattern).is_empty());
        assert!(extractor.extract("", &pattern).is_empty());
        assert!(extractor.extract("${}", &pattern).is_empty());
    }

    #[test]
    fn test_unclosed_placeholder_is_ignored() {
        let extractor = VariablesExtractor::new();
        let pattern = VariablePattern::default();
        assert_eq!(extractor.extract("${open and ${closed}", &pattern), vec!["closed"]);
    }

    #[test]
    fn test_alphanumeric_delimiters() {
        let extractor = VariablesExtractor::new();
        let pattern = VariablePattern::new("ph(", ")").unwrap();
        assert_eq!(
            extractor.extract("ph(Shipping) ph(Total)", &pattern),
            vec!["Shipping", "Total"]
        );
    }
}
