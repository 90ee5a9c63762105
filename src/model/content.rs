use crate::model::line::{Line, LineNumber};

/// Error type for content operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("line index {index} out of range: {visible} lines visible")]
    IndexOutOfRange { index: usize, visible: usize },
}

/// A document's line storage plus a visible-subset view.
///
/// `lines` is the authoritative ordered store; `visible` holds the real
/// line numbers currently shown, always ascending and duplicate-free.
/// Visible index `i` maps to `lines[visible[i]]`. Every mutating
/// operation returns a new `Content`; existing snapshots are never
/// modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    lines: Vec<Line>,
    visible: Vec<LineNumber>,
}

impl Content {
    /// Build content from raw text, split on `\n`, all lines visible.
    pub fn from_text(text: &str) -> Content {
        let lines: Vec<Line> = text.split('\n').map(Line::new).collect();
        let visible = (0..lines.len()).map(LineNumber::new).collect();
        Content { lines, visible }
    }

    /// The full line store, hidden lines included.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// The line at the given visible index.
    pub fn get(&self, index: LineNumber) -> Result<&Line, ContentError> {
        let real = self.resolve(index)?;
        Ok(&self.lines[real])
    }

    /// Replace the single real line behind the given visible index.
    /// The visibility mapping is unchanged.
    pub fn change_line(&self, index: LineNumber, line: Line) -> Result<Content, ContentError> {
        let real = self.resolve(index)?;
        let mut lines = self.lines.clone();
        lines[real] = line;
        Ok(Content {
            lines,
            visible: self.visible.clone(),
        })
    }

    /// Reconcile an edited copy of the visible text back into the store.
    ///
    /// The first `min(n, k)` new lines overwrite the visible real lines in
    /// place (`n` = new line count, `k` = visible count). Surplus lines are
    /// inserted right after the last visible real line (at the top when
    /// nothing is visible) and become visible themselves. If the new text
    /// is shorter, the excess previously-visible real lines are deleted
    /// outright. Hidden lines keep their text and relative order.
    pub fn change_text(&self, text: &str) -> Content {
        let new_texts: Vec<&str> = text.split('\n').collect();
        let n = new_texts.len();
        let k = self.visible.len();

        let mut lines = self.lines.clone();
        let mut touched: Vec<usize> = Vec::with_capacity(n);

        for (i, new_text) in new_texts.iter().take(k).enumerate() {
            let real = self.visible[i].value();
            lines[real] = Line::new(*new_text);
            touched.push(real);
        }

        if n > k {
            let insert_base = self.visible.last().map(|ln| ln.value() + 1).unwrap_or(0);
            for (offset, new_text) in new_texts[k..].iter().enumerate() {
                let at = insert_base + offset;
                lines.insert(at, Line::new(*new_text));
                touched.push(at);
            }
        } else if n < k {
            // Delete from the highest real index down so earlier removals
            // don't shift the remaining targets.
            let mut doomed: Vec<usize> = self.visible[n..].iter().map(|ln| ln.value()).collect();
            doomed.sort_unstable_by(|a, b| b.cmp(a));
            for real in doomed {
                lines.remove(real);
            }
        }

        touched.sort_unstable();
        Content {
            lines,
            visible: touched.into_iter().map(LineNumber::new).collect(),
        }
    }

    /// Remove the given visible-index positions from the visibility list.
    /// Positions outside the current visible set are ignored; the
    /// underlying lines are untouched.
    pub fn hide(&self, positions: &[LineNumber]) -> Content {
        let visible = self
            .visible
            .iter()
            .enumerate()
            .filter(|(i, _)| !positions.iter().any(|p| p.value() == *i))
            .map(|(_, ln)| *ln)
            .collect();
        Content {
            lines: self.lines.clone(),
            visible,
        }
    }

    /// Reset visibility to every line, original order.
    pub fn show_all(&self) -> Content {
        Content {
            lines: self.lines.clone(),
            visible: (0..self.lines.len()).map(LineNumber::new).collect(),
        }
    }

    /// Swap the line at the given position with its previous real
    /// neighbor. No-op at the top.
    pub fn move_line_up(&self, number: LineNumber) -> Content {
        let at = number.value();
        if at == 0 || at >= self.lines.len() {
            return self.clone();
        }
        let mut lines = self.lines.clone();
        lines.swap(at, at - 1);
        Content {
            lines,
            visible: self.visible.clone(),
        }
    }

    /// Swap the line at the given position with its next real neighbor.
    /// No-op at the bottom.
    pub fn move_line_down(&self, number: LineNumber) -> Content {
        let at = number.value();
        if at + 1 >= self.lines.len() {
            return self.clone();
        }
        let mut lines = self.lines.clone();
        lines.swap(at, at + 1);
        Content {
            lines,
            visible: self.visible.clone(),
        }
    }

    /// The visible lines joined with `\n`, in visible order.
    pub fn print(&self) -> String {
        self.visible
            .iter()
            .map(|ln| self.lines[ln.value()].text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Every line joined with `\n`, hidden ones included. This is the
    /// persistence view of the document.
    pub fn print_all(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn resolve(&self, index: LineNumber) -> Result<usize, ContentError> {
        self.visible
            .get(index.value())
            .map(|ln| ln.value())
            .ok_or(ContentError::IndexOutOfRange {
                index: index.value(),
                visible: self.visible.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn content() -> Content {
        Content::from_text(
            "Finish the PR +project\n\
             Buy bread +home\n\
             Have a coffee with Bryan @office",
        )
    }

    fn texts(content: &Content) -> Vec<&str> {
        content.lines().iter().map(Line::text).collect()
    }

    #[test]
    fn test_prints_content() {
        assert_eq!(
            content().print(),
            "Finish the PR +project\n\
             Buy bread +home\n\
             Have a coffee with Bryan @office"
        );
    }

    #[test]
    fn test_round_trips_raw_text() {
        let raw = "a\n\nb\n";
        assert_eq!(Content::from_text(raw).print(), raw);
        assert_eq!(Content::from_text(raw).print_all(), raw);
    }

    #[test]
    fn test_changes_text() {
        let result = content().change_text("x Finish the PR +project\nBuy bread +home");
        assert_eq!(result.print(), "x Finish the PR +project\nBuy bread +home");
    }

    #[test]
    fn test_changes_text_only_of_visible_lines() {
        let hidden = content().hide(&[LineNumber::new(1)]);
        let result = hidden.change_text("x Finish the PR +project\nBuy flowers");

        assert_eq!(result.print(), "x Finish the PR +project\nBuy flowers");
        assert_eq!(
            texts(&result),
            vec!["x Finish the PR +project", "Buy bread +home", "Buy flowers"]
        );
    }

    #[test]
    fn test_change_text_adds_surplus_lines() {
        let hidden = content().hide(&[LineNumber::new(1)]);
        let result = hidden.change_text(
            "x Finish the PR +project\n\
             Buy flowers\n\
             Prepare an encounter +dnd",
        );

        assert_eq!(
            result.print(),
            "x Finish the PR +project\n\
             Buy flowers\n\
             Prepare an encounter +dnd"
        );
        assert_eq!(
            texts(&result),
            vec![
                "x Finish the PR +project",
                "Buy bread +home",
                "Buy flowers",
                "Prepare an encounter +dnd",
            ]
        );
    }

    #[test]
    fn test_change_text_inserts_at_top_when_nothing_visible() {
        let hidden = content().hide(&[LineNumber::new(0), LineNumber::new(1), LineNumber::new(2)]);
        let result = hidden.change_text("Buy Baldur's Gate\nFeed the cat");

        assert_eq!(result.print(), "Buy Baldur's Gate\nFeed the cat");
        assert_eq!(
            texts(&result),
            vec![
                "Buy Baldur's Gate",
                "Feed the cat",
                "Finish the PR +project",
                "Buy bread +home",
                "Have a coffee with Bryan @office",
            ]
        );
    }

    #[test]
    fn test_change_text_removes_excess_visible_lines() {
        let hidden = content().hide(&[LineNumber::new(1)]);
        let result = hidden.change_text("x Finish the PR +project");

        assert_eq!(result.print(), "x Finish the PR +project");
        assert_eq!(
            texts(&result),
            vec!["x Finish the PR +project", "Buy bread +home"]
        );
    }

    #[test]
    fn test_changes_specific_line() {
        let result = content()
            .change_line(LineNumber::new(2), Line::new("Have a beer with Bryan"))
            .unwrap();

        assert_eq!(
            result.print(),
            "Finish the PR +project\n\
             Buy bread +home\n\
             Have a beer with Bryan"
        );
    }

    #[test]
    fn test_change_line_resolves_through_visibility() {
        let hidden = content().hide(&[LineNumber::new(0)]);
        let result = hidden
            .change_line(LineNumber::new(0), Line::new("Buy oat bread"))
            .unwrap();

        // visible index 0 is real line 1
        assert_eq!(
            texts(&result),
            vec![
                "Finish the PR +project",
                "Buy oat bread",
                "Have a coffee with Bryan @office",
            ]
        );
    }

    #[test]
    fn test_hides_lines() {
        let result = content().hide(&[LineNumber::new(1), LineNumber::new(2)]);
        assert_eq!(result.print(), "Finish the PR +project");
    }

    #[test]
    fn test_hide_interprets_positions_against_current_view() {
        let result = content()
            .hide(&[LineNumber::new(0)])
            .hide(&[LineNumber::new(0)]);
        assert_eq!(result.print(), "Have a coffee with Bryan @office");
    }

    #[test]
    fn test_hide_ignores_unknown_positions() {
        let result = content().hide(&[LineNumber::new(7)]);
        assert_eq!(result.print(), content().print());
    }

    #[test]
    fn test_shows_all_content() {
        let result = content()
            .hide(&[LineNumber::new(1), LineNumber::new(2)])
            .show_all();
        assert_eq!(result.print(), content().print());
    }

    #[test]
    fn test_change_line_fails_out_of_range() {
        let err = content()
            .change_line(LineNumber::new(3), Line::new("Have a beer with Bryan"))
            .unwrap_err();
        assert_eq!(
            err,
            ContentError::IndexOutOfRange {
                index: 3,
                visible: 3
            }
        );
    }

    #[test]
    fn test_get_line_by_number() {
        let doc = content();
        let line = doc.get(LineNumber::new(2)).unwrap();
        assert_eq!(line.text(), "Have a coffee with Bryan @office");
    }

    #[test]
    fn test_get_fails_out_of_range() {
        assert!(content().get(LineNumber::new(5)).is_err());
    }

    #[test]
    fn test_move_line_up() {
        let result = content().move_line_up(LineNumber::new(1));
        assert_eq!(
            texts(&result),
            vec![
                "Buy bread +home",
                "Finish the PR +project",
                "Have a coffee with Bryan @office",
            ]
        );
    }

    #[test]
    fn test_move_line_up_at_top_is_noop() {
        let result = content().move_line_up(LineNumber::new(0));
        assert_eq!(result, content());
    }

    #[test]
    fn test_move_line_down_at_bottom_is_noop() {
        let result = content().move_line_down(LineNumber::new(2));
        assert_eq!(result, content());
    }

    #[test]
    fn test_hidden_lines_survive_visible_edits() {
        // hide B, rewrite the view, B must come through untouched
        let filtered = Content::from_text("A\nB\nC").hide(&[LineNumber::new(1)]);
        assert_eq!(filtered.print(), "A\nC");

        let result = filtered.change_text("A2\nD");

        assert_eq!(result.print(), "A2\nD");
        assert_eq!(texts(&result), vec!["A2", "B", "D"]);
    }
}
