use chrono::NaiveDate;

use crate::model::content::{Content, ContentError};
use crate::model::line::{Line, LineNumber};
use crate::model::part::Part;
use crate::model::task::Task;
use crate::parse::{PatternError, TokenPattern, tokenize, tokenize_with};

/// Toggle the task behind the given visible index between open and done.
///
/// Completing stamps `today` as the completion date; callers own the
/// clock so tests can pin it. A blank line leaves the content unchanged.
pub fn toggle_task(
    content: &Content,
    number: LineNumber,
    today: NaiveDate,
) -> Result<Content, ContentError> {
    let line = content.get(number)?;
    let task = Task::parse(line.text());
    if task == Task::Blank {
        return Ok(content.clone());
    }
    let toggled = task.toggle(today);
    content.change_line(number, Line::new(toggled.print()))
}

/// Tokenize a task's body text, with optional extension patterns.
/// Blank tasks have no parts.
pub fn parts(task: &Task, extensions: &[&dyn TokenPattern]) -> Result<Vec<Part>, PatternError> {
    let text = match task {
        Task::Blank => return Ok(Vec::new()),
        Task::Open { text } => text,
        Task::Done { body, .. } => body,
    };
    if extensions.is_empty() {
        Ok(tokenize(text))
    } else {
        tokenize_with(text, extensions)
    }
}

/// Filter content down to the lines matching `query`: a line matches when
/// any whitespace-split word starts with the query (case-sensitive).
///
/// Visibility is reset first, so repeated searches are non-cumulative.
/// The empty query matches every line.
pub fn search(content: &Content, query: &str) -> Content {
    let shown = content.show_all();
    let to_hide: Vec<LineNumber> = shown
        .lines()
        .iter()
        .enumerate()
        .filter(|(_, line)| !is_matching(line.text(), query))
        .map(|(index, _)| LineNumber::new(index))
        .collect();
    shown.hide(&to_hide)
}

fn is_matching(text: &str, query: &str) -> bool {
    text.split(char::is_whitespace)
        .any(|word| word.starts_with(query))
}

/// Swap the line at the given position with its previous real neighbor.
/// When the neighbor is hidden, the swap still targets it: filtering
/// does not change which lines are adjacent in the store.
pub fn move_line_up(content: &Content, number: LineNumber) -> Content {
    content.move_line_up(number)
}

/// Swap the line at the given position with its next real neighbor.
pub fn move_line_down(content: &Content, number: LineNumber) -> Content {
    content.move_line_down(number)
}
