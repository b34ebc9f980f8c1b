//! Modal rendering utilities and implementations
//!
//! Shared sizing helpers live here so input handlers can compute the same
//! on-screen rectangles the render functions draw into.

mod confirm;
mod error;

pub use confirm::{confirm_rect, render_confirm_overlay};
pub use error::{error_modal_rect, render_error_modal};

use crate::app::{App, Mode};
use ratatui::layout::Rect;

/// Outer width of a modal: wrapped text plus borders and a column of padding
/// on each side
pub const MODAL_WIDTH: u16 = 48;

/// Width, in characters, that modal body text is wrapped to
pub const MAX_LINE_WIDTH: usize = 44;

/// Create a centered rect of the given size, shrunk to fit `area`
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Greedy word wrap on whitespace.
///
/// Words longer than `max_line_width` are split across lines. Empty input
/// yields no lines.
#[must_use]
pub fn wrap_words(text: &str, max_line_width: usize) -> Vec<String> {
    let max_line_width = max_line_width.max(1);
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        let current_width = current_line.chars().count();

        if current_width > 0 && current_width + 1 + word.len() <= max_line_width {
            current_line.push(' ');
            current_line.extend(word);
            continue;
        }

        if current_width > 0 {
            lines.push(std::mem::take(&mut current_line));
        }
        while word.len() > max_line_width {
            let rest = word.split_off(max_line_width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        current_line = word.into_iter().collect();
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Rectangle of the topmost overlay, if any.
///
/// The error modal is drawn above a confirmation, so it wins.
#[must_use]
pub fn modal_rect(app: &App, frame_area: Rect) -> Option<Rect> {
    if let Mode::ErrorModal(message) = &app.mode {
        return Some(error_modal_rect(message, frame_area));
    }
    app.confirm
        .view()
        .map(|view| confirm_rect(&view, frame_area))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_words() {
        assert_eq!(
            wrap_words("one two three four", 9),
            vec!["one two".to_string(), "three".to_string(), "four".to_string()]
        );
        assert!(wrap_words("   ", 10).is_empty());
    }

    #[test]
    fn test_wrap_words_splits_long_words() {
        assert_eq!(
            wrap_words("supercalifragilistic ok", 5),
            vec!["super", "calif", "ragil", "istic", "ok"]
        );
        assert_eq!(wrap_words("ab abcdefg", 4), vec!["ab", "abcd", "efg"]);
        assert!(
            wrap_words(&"x".repeat(100), MAX_LINE_WIDTH)
                .iter()
                .all(|line| line.chars().count() <= MAX_LINE_WIDTH)
        );
    }

    #[test]
    fn test_modal_width_fits_wrapped_text() {
        assert_eq!(usize::from(MODAL_WIDTH), MAX_LINE_WIDTH + 4);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 30);
        let rect = centered_rect(50, 10, area);
        assert_eq!(rect.height, 10);
        assert_eq!(rect.width, 50);
        assert_eq!(rect.x, 25);
        assert_eq!(rect.y, 10);
    }

    #[test]
    fn test_centered_rect_shrinks_to_area() {
        let area = Rect::new(5, 2, 30, 6);
        let rect = centered_rect(MODAL_WIDTH, 10, area);
        assert_eq!(rect, area);
    }
}
