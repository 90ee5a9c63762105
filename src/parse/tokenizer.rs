use std::sync::LazyLock;

use regex::Regex;

use crate::model::part::Part;

/// Built-in token grammar. Alternation order is precedence: priority,
/// project, context, web link, key:value tag. `\B` keeps `+`/`@` tags
/// from firing mid-word (`cmd+d` is plain text).
const BUILT_IN_PATTERN: &str = r"(\([A-Z]\))|\B\+(\S+)|\B@(\S+)|(https?://\S+)|(\S+:\S+)";

static BUILT_IN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BUILT_IN_PATTERN).expect("built-in token pattern is valid"));

/// Error type for extension pattern compilation
#[derive(Debug, thiserror::Error)]
#[error("invalid token pattern `{pattern}`: {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// A caller-supplied token matcher, appended to the built-in grammar with
/// lower precedence. Spans matched only by an extension tokenize as
/// `Part::Other`.
pub trait TokenPattern {
    /// The regular expression source for this token kind.
    fn pattern(&self) -> &str;
}

impl TokenPattern for str {
    fn pattern(&self) -> &str {
        self
    }
}

impl TokenPattern for &str {
    fn pattern(&self) -> &str {
        *self
    }
}

/// `yyyy-mm-dd` date tokens, for presentation layers that highlight dates.
pub struct DateToken;

impl TokenPattern for DateToken {
    fn pattern(&self) -> &str {
        r"[0-9]{4}-[0-9]{2}-[0-9]{2}"
    }
}

/// Split task text into an ordered sequence of parts using the built-in
/// grammar. Concatenating the parts' printed forms reconstructs the input.
pub fn tokenize(text: &str) -> Vec<Part> {
    tokenize_by(&BUILT_IN, text)
}

/// Split task text using the built-in grammar plus extension patterns.
///
/// Each extension becomes one extra parenthesized alternative after all
/// built-ins, so a built-in always wins where both claim the same start.
/// A malformed extension pattern fails with `PatternError` and never
/// degrades the built-in grammar.
pub fn tokenize_with(text: &str, extensions: &[&dyn TokenPattern]) -> Result<Vec<Part>, PatternError> {
    if extensions.is_empty() {
        return Ok(tokenize(text));
    }

    let mut combined = String::from(BUILT_IN_PATTERN);
    for extension in extensions {
        let pattern = extension.pattern();
        // Compile each pattern alone so the error names the broken one
        Regex::new(pattern).map_err(|source| PatternError {
            pattern: pattern.to_string(),
            source,
        })?;
        combined.push_str("|(");
        combined.push_str(pattern);
        combined.push(')');
    }

    let regex = Regex::new(&combined).map_err(|source| PatternError {
        pattern: combined.clone(),
        source,
    })?;
    Ok(tokenize_by(&regex, text))
}

fn tokenize_by(regex: &Regex, text: &str) -> Vec<Part> {
    let mut parts = Vec::new();
    let mut last_end = 0;

    for caps in regex.captures_iter(text) {
        let m = caps.get(0).expect("capture group 0 always participates");
        if m.start() > last_end {
            parts.push(Part::PlainText(text[last_end..m.start()].to_string()));
        }
        parts.push(classify(&caps, m.as_str()));
        last_end = m.end();
    }

    if last_end < text.len() {
        parts.push(Part::PlainText(text[last_end..].to_string()));
    }

    parts
}

/// Groups 1-5 are the built-in alternatives; anything past them came from
/// an extension alternative (extensions may carry inner groups of their
/// own, so only the full match text is kept).
fn classify(caps: &regex::Captures<'_>, matched: &str) -> Part {
    if caps.get(1).is_some() {
        let letter = &matched[1..matched.len() - 1];
        Part::Priority(letter.to_string())
    } else if caps.get(2).is_some() {
        Part::Project(matched[1..].to_string())
    } else if caps.get(3).is_some() {
        Part::Context(matched[1..].to_string())
    } else if caps.get(4).is_some() {
        Part::WebLink(matched.to_string())
    } else if caps.get(5).is_some() {
        let (key, value) = matched.split_once(':').expect("tag alternative contains a colon");
        Part::Special {
            key: key.to_string(),
            value: value.to_string(),
        }
    } else {
        Part::Other(matched.to_string())
    }
}
