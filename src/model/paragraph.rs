//! Paragraphs and runs.

use super::access::{RunParagraph, RunText};
use serde::{Deserialize, Serialize};

/// A paragraph: an ordered sequence of inline runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Inline runs in document order
    pub runs: Vec<Inline>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with one plain text run.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::with_runs([text])
    }

    /// Create a paragraph with one plain text run per item.
    pub fn with_runs<S: Into<String>>(runs: impl IntoIterator<Item = S>) -> Self {
        Self {
            runs: runs
                .into_iter()
                .map(|text| Inline::Text(TextRun::new(text)))
                .collect(),
        }
    }

    /// Concatenated text of every run.
    pub fn plain_text(&self) -> String {
        self.runs
            .iter()
            .map(|inline| match inline {
                Inline::Text(run) => run.text.as_str(),
                Inline::Link { text, .. } => text.as_str(),
                Inline::Break => "\n",
                Inline::Image { .. } => "",
            })
            .collect()
    }
}

impl RunParagraph for Paragraph {
    fn runs_mut(&mut self) -> Vec<&mut dyn RunText> {
        self.runs
            .iter_mut()
            .map(|run| run as &mut dyn RunText)
            .collect()
    }
}

/// One inline element of a paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    /// Formatted text
    Text(TextRun),

    /// A hyperlink; its label is run text
    Link {
        /// Label
        text: String,
        /// Target
        url: String,
    },

    /// A line break
    Break,

    /// An inline picture
    Image {
        /// Name of the picture in the source document
        name: String,
    },
}

/// Text runs and link labels carry text; breaks and images do not.
impl RunText for Inline {
    fn text(&self) -> Option<&str> {
        match self {
            Inline::Text(run) => Some(&run.text),
            Inline::Link { text, .. } => Some(text),
            Inline::Break | Inline::Image { .. } => None,
        }
    }

    fn set_text(&mut self, new_text: String) {
        match self {
            Inline::Text(run) => run.text = new_text,
            Inline::Link { text, .. } => *text = new_text,
            Inline::Break | Inline::Image { .. } => {}
        }
    }
}

/// A text run. Rewriting its text leaves the formatting alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRun {
    /// Run text
    pub text: String,

    /// Character formatting
    #[serde(default)]
    pub format: RunFormat,
}

impl TextRun {
    /// Create an unformatted run.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: RunFormat::default(),
        }
    }

    /// Create a run with formatting.
    pub fn formatted(text: impl Into<String>, format: RunFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }
}

/// Character formatting of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunFormat {
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Font family
    pub font: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_joins_runs() {
        let mut p = Paragraph::with_runs(["Dear ", "${name}"]);
        p.runs.push(Inline::Break);
        p.runs.push(Inline::Link {
            text: "terms".into(),
            url: "https://example.com".into(),
        });
        assert_eq!(p.plain_text(), "Dear ${name}\nterms");
    }

    #[test]
    fn test_runs_without_text() {
        let mut p = Paragraph::with_text("a");
        p.runs.push(Inline::Break);
        p.runs.push(Inline::Image { name: "logo".into() });

        let runs = p.runs_mut();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].text(), Some("a"));
        assert_eq!(runs[1].text(), None);
        assert_eq!(runs[2].text(), None);
    }

    #[test]
    fn test_set_text_keeps_format() {
        let bold = RunFormat {
            bold: true,
            ..Default::default()
        };
        let mut p = Paragraph {
            runs: vec![Inline::Text(TextRun::formatted("${Name}", bold.clone()))],
        };
        for run in p.runs_mut() {
            run.set_text("${name}".to_string());
        }
        match &p.runs[0] {
            Inline::Text(run) => {
                assert_eq!(run.text, "${name}");
                assert_eq!(run.format, bold);
            }
            other => panic!("unexpected inline: {:?}", other),
        }
    }

    #[test]
    fn test_link_label_is_writable() {
        let mut link = Inline::Link {
            text: "old".into(),
            url: "https://example.com".into(),
        };
        link.set_text("new".into());
        assert_eq!(link.text(), Some("new"));
    }

    #[test]
    fn test_run_json_defaults_format() {
        let p: Paragraph =
            serde_json::from_str(r#"{"runs": [{"type": "text", "text": "${a}"}]}"#).unwrap();
        assert_eq!(p.plain_text(), "${a}");
    }
}
