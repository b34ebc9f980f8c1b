//! Error modal rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::{MAX_LINE_WIDTH, MODAL_WIDTH, centered_rect, wrap_words};
use crate::tui::render::colors;

/// On-screen rectangle of the error modal
#[must_use]
pub fn error_modal_rect(message: &str, frame_area: Rect) -> Rect {
    // Header + blank + message + blank + hint, + 2 for borders, min 7 lines
    let lines = wrap_words(message, MAX_LINE_WIDTH).len() + 4;
    let height = u16::try_from(lines + 2).unwrap_or(u16::MAX).max(7);
    centered_rect(MODAL_WIDTH, height, frame_area)
}

/// Render an error modal with word-wrapped message
pub fn render_error_modal(frame: &mut Frame<'_>, message: &str) {
    let mut lines: Vec<Line<'_>> = vec![
        Line::from(Span::styled(
            "Error",
            Style::default()
                .fg(colors::MODAL_BORDER_ERROR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    lines.extend(
        wrap_words(message, MAX_LINE_WIDTH)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(colors::TEXT_PRIMARY)))),
    );

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to dismiss",
        Style::default().fg(colors::TEXT_MUTED),
    )));

    let area = error_modal_rect(message, frame.area());

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::MODAL_BORDER_ERROR)),
        )
        .style(Style::default().bg(colors::MODAL_BG))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
