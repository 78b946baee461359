use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

/// Column for a text cursor placed after `prefix` and `len` typed
/// characters, pinned to the last column of `inner` when the text overflows.
pub(crate) fn cursor_column(inner: Rect, prefix: &str, len: usize) -> u16 {
    let offset = u16::try_from(prefix.chars().count().saturating_add(len)).unwrap_or(u16::MAX);
    inner
        .x
        .saturating_add(offset)
        .min(inner.right().saturating_sub(1))
}

/// Status line wording for a search result count.
pub(crate) fn found_message(count: usize) -> String {
    format!("Found {count} book(s)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use anyhow::Context;

    #[test]
    fn surface_error_prefers_innermost_cause() {
        let err = Err::<(), _>(CatalogError::validation("Title is required."))
            .context("failed to save book")
            .unwrap_err();
        assert_eq!(surface_error(&err), "Title is required.");
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 40, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.x, 20);
        assert!(popup.height > 0 && popup.bottom() <= area.bottom());
    }

    #[test]
    fn cursor_column_stays_inside_long_inputs() {
        let inner = Rect::new(10, 2, 20, 1);
        assert_eq!(cursor_column(inner, "Year: ", 4), 20);
        assert_eq!(cursor_column(inner, "Save as: ", 500), 29);
        assert_eq!(cursor_column(inner, "Title: ", 100_000), 29);

        let edge = Rect::new(u16::MAX - 5, 0, 5, 1);
        assert_eq!(cursor_column(edge, "Search: ", usize::MAX), edge.right() - 1);
    }
}
