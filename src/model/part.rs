use serde::{Deserialize, Serialize};

/// One classified token within a task's text.
///
/// A task line tokenizes into an ordered sequence of parts; concatenating
/// each part's `print()` output reconstructs the line exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Part {
    /// Unclassified text between tokens, preserved verbatim
    PlainText(String),
    /// `(A)` priority marker; holds the letter only
    Priority(String),
    /// `+name` project tag; holds the name without the `+`
    Project(String),
    /// `@name` context tag; holds the name without the `@`
    Context(String),
    /// `http://` or `https://` URL, verbatim
    WebLink(String),
    /// `key:value` tag, split on the first `:`
    Special { key: String, value: String },
    /// A span matched only by a caller-supplied extension pattern
    Other(String),
}

impl Part {
    /// Render this part back to its source text.
    pub fn print(&self) -> String {
        match self {
            Part::PlainText(value) => value.clone(),
            Part::Priority(value) => format!("({})", value),
            Part::Project(value) => format!("+{}", value),
            Part::Context(value) => format!("@{}", value),
            Part::WebLink(value) => value.clone(),
            Part::Special { key, value } => format!("{}:{}", key, value),
            Part::Other(value) => value.clone(),
        }
    }
}
