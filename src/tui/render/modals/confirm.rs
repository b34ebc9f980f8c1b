//! Confirmation modal rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{MAX_LINE_WIDTH, MODAL_WIDTH, centered_rect, wrap_words};
use crate::config::{Action, KeyBindings};
use crate::confirm::ConfirmView;
use crate::tui::render::colors;

/// Build the modal body: wrapped message, blank line, button row
#[must_use]
pub fn confirm_lines<'a>(view: &ConfirmView<'a>, keys: &KeyBindings) -> Vec<Line<'a>> {
    let accent = colors::variant_accent(view.variant);
    let confirm_key = keys
        .primary_key(Action::Confirm)
        .unwrap_or_else(|| "Enter".to_string());
    let cancel_key = keys
        .primary_key(Action::Cancel)
        .unwrap_or_else(|| "Esc".to_string());

    let mut lines: Vec<Line<'a>> = wrap_words(view.message, MAX_LINE_WIDTH)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(colors::TEXT_PRIMARY))))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!("[{confirm_key}]"),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", view.confirm_text),
            Style::default().fg(accent),
        ),
        Span::raw("   "),
        Span::styled(
            format!("[{cancel_key}]"),
            Style::default()
                .fg(colors::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", view.cancel_text),
            Style::default().fg(colors::TEXT_PRIMARY),
        ),
    ]));

    lines
}

/// On-screen rectangle of the confirmation modal
#[must_use]
pub fn confirm_rect(view: &ConfirmView<'_>, frame_area: Rect) -> Rect {
    // Message lines + blank + buttons + 2 for borders
    let body = wrap_words(view.message, MAX_LINE_WIDTH).len() + 2;
    let height = u16::try_from(body + 2).unwrap_or(u16::MAX);
    centered_rect(MODAL_WIDTH, height, frame_area)
}

/// Render the pending confirmation over the current screen
pub fn render_confirm_overlay(frame: &mut Frame<'_>, view: &ConfirmView<'_>, keys: &KeyBindings) {
    let accent = colors::variant_accent(view.variant);
    let area = confirm_rect(view, frame.area());

    let paragraph = Paragraph::new(confirm_lines(view, keys))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", view.title),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::Variant;
    use pretty_assertions::assert_eq;

    fn view<'a>(message: &'a str, variant: Variant) -> ConfirmView<'a> {
        ConfirmView {
            title: "Delete item?",
            message,
            confirm_text: "Delete",
            cancel_text: "Keep",
            variant,
        }
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_confirm_lines_layout() {
        let lines = confirm_lines(
            &view("This cannot be undone.", Variant::Destructive),
            &KeyBindings::default(),
        );

        assert_eq!(lines.len(), 3);
        assert_eq!(line_text(&lines[0]), "This cannot be undone.");
        assert_eq!(line_text(&lines[1]), "");
        assert_eq!(line_text(&lines[2]), "[y] Delete   [n] Keep");
        assert_eq!(lines[2].spans[0].style.fg, Some(colors::ACCENT_NEGATIVE));
    }

    #[test]
    fn test_confirm_lines_follow_rebound_keys() {
        let mut keys = KeyBindings::default();
        keys.set("z", Action::Confirm);
        let lines = confirm_lines(&view("Sure?", Variant::Primary), &keys);

        assert_eq!(line_text(&lines[2]), "[z] Delete   [n] Keep");
        assert_eq!(lines[2].spans[0].style.fg, Some(colors::ACCENT_POSITIVE));
    }

    #[test]
    fn test_confirm_rect_grows_with_message() {
        let area = Rect::new(0, 0, 80, 24);
        let short = confirm_rect(&view("Short", Variant::Primary), area);
        let long_message = "word ".repeat(20);
        let long = confirm_rect(&view(long_message.trim(), Variant::Primary), area);

        assert_eq!(short.height, 5);
        assert_eq!(long.height, 7);
        assert_eq!(short.width, MODAL_WIDTH);
    }
}
