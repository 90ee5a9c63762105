use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("date pattern is valid"));

/// The semantic state derived from one line of a task list.
///
/// A `Task` is a transient projection of a line's text; the line store
/// remains the source of truth. `parse` then `print` round-trips the
/// original text for `Open` tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Task {
    /// Empty or whitespace-only line
    Blank,
    /// An active task; holds the full line text, priority marker included
    Open { text: String },
    /// A completed task: `x [yyyy-mm-dd ]body`
    Done {
        body: String,
        completed: Option<NaiveDate>,
    },
}

impl Task {
    /// Parse a single line into a task.
    ///
    /// Lines starting with the literal `x ` parse as `Done`. After the
    /// marker, one strict `yyyy-mm-dd` prefix is consumed as the completion
    /// date. Date extraction is best-effort: a date-shaped token that is
    /// not a real calendar date stays in the body.
    pub fn parse(text: &str) -> Task {
        if text.trim().is_empty() {
            return Task::Blank;
        }
        match text.strip_prefix("x ") {
            Some(rest) => Self::parse_done(rest),
            None => Task::Open {
                text: text.to_string(),
            },
        }
    }

    /// Parse a whole text blob, one task per `\n`-separated line.
    pub fn parse_lines(text: &str) -> Vec<Task> {
        text.split('\n').map(Task::parse).collect()
    }

    fn parse_done(rest: &str) -> Task {
        let rest = rest.trim_start();
        if let Some(m) = DATE_PREFIX.find(rest)
            && let Ok(date) = NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d")
        {
            return Task::Done {
                body: rest[m.end()..].trim_start().to_string(),
                completed: Some(date),
            };
        }
        Task::Done {
            body: rest.to_string(),
            completed: None,
        }
    }

    /// Render the task back to line text.
    pub fn print(&self) -> String {
        match self {
            Task::Blank => String::new(),
            Task::Open { text } => text.clone(),
            Task::Done {
                body,
                completed: Some(date),
            } => format!("x {} {}", date.format("%Y-%m-%d"), body),
            Task::Done {
                body,
                completed: None,
            } => format!("x {}", body),
        }
    }

    /// Flip between open and done.
    ///
    /// Completing stamps the task with `today`; reopening drops the `x `
    /// marker and the completion date (undo is lossy of the date). Blank
    /// lines are untouched.
    pub fn toggle(&self, today: NaiveDate) -> Task {
        match self {
            Task::Blank => Task::Blank,
            Task::Open { text } => Task::Done {
                body: text.clone(),
                completed: Some(today),
            },
            Task::Done { body, .. } => Task::Open { text: body.clone() },
        }
    }
}
