use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A single raw line of a task list. Immutable value; the text is kept
/// verbatim, including leading/trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    text: String,
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        Line { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Error type for line number conversion
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("line number cannot be negative: {0}")]
pub struct NegativeLineNumber(pub i64);

/// A 0-based line index into a document's line store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineNumber(usize);

impl LineNumber {
    pub fn new(value: usize) -> Self {
        LineNumber(value)
    }

    pub fn value(self) -> usize {
        self.0
    }

    /// Subtract an offset, `None` if the result would go below line 0.
    pub fn checked_sub(self, offset: usize) -> Option<LineNumber> {
        self.0.checked_sub(offset).map(LineNumber)
    }
}

impl From<usize> for LineNumber {
    fn from(value: usize) -> Self {
        LineNumber(value)
    }
}

impl TryFrom<i64> for LineNumber {
    type Error = NegativeLineNumber;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .map(LineNumber)
            .map_err(|_| NegativeLineNumber(value))
    }
}

impl Add<usize> for LineNumber {
    type Output = LineNumber;

    fn add(self, offset: usize) -> LineNumber {
        LineNumber(self.0 + offset)
    }
}

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_line_number_fails() {
        assert_eq!(LineNumber::try_from(-1i64), Err(NegativeLineNumber(-1)));
    }

    #[test]
    fn test_non_negative_conversion() {
        assert_eq!(LineNumber::try_from(3i64), Ok(LineNumber::new(3)));
        assert_eq!(LineNumber::try_from(0i64), Ok(LineNumber::new(0)));
    }

    #[test]
    fn test_offsets() {
        let ln = LineNumber::new(2);
        assert_eq!(ln + 3, LineNumber::new(5));
        assert_eq!(ln.checked_sub(1), Some(LineNumber::new(1)));
        assert_eq!(ln.checked_sub(3), None);
    }

    #[test]
    fn test_ordering() {
        assert!(LineNumber::new(1) < LineNumber::new(2));
        assert_eq!(LineNumber::new(4), LineNumber::new(4));
    }
}
