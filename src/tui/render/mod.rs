//! Rendering for the cart screen and its overlays

pub mod colors;
pub mod modals;

use crate::app::{App, Mode};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the whole screen: cart, status bar, then any overlay on top
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    render_cart(frame, app, chunks[0]);
    render_status_bar(frame, app, chunks[1]);

    if let Some(view) = app.confirm.view() {
        modals::render_confirm_overlay(frame, &view, &app.config.keys);
    }

    if let Mode::ErrorModal(message) = &app.mode {
        modals::render_error_modal(frame, message);
    }
}

fn render_cart(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let cart = &app.data.cart;

    let lines: Vec<Line<'_>> = if cart.is_empty() {
        vec![Line::from(Span::styled(
            "Your cart is empty",
            Style::default().fg(colors::TEXT_MUTED),
        ))]
    } else {
        cart.items()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let selected = i == app.data.selected;
                let (marker, name_style, row_bg) = if selected {
                    (
                        "> ",
                        Style::default()
                            .fg(colors::SELECTED)
                            .add_modifier(Modifier::BOLD),
                        colors::SURFACE_HIGHLIGHT,
                    )
                } else {
                    ("  ", Style::default().fg(colors::TEXT_PRIMARY), colors::SURFACE)
                };
                Line::from(vec![
                    Span::styled(marker, name_style),
                    Span::styled(item.name.as_str(), name_style),
                    Span::styled(
                        format!("  x{}", item.quantity),
                        Style::default().fg(colors::TEXT_DIM),
                    ),
                ])
                .style(Style::default().bg(row_bg))
            })
            .collect()
    };

    let title = format!(" Cart ({} items) ", cart.total_quantity());
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER)),
        )
        .style(Style::default().bg(colors::SURFACE));

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let span = app.data.status_message.as_ref().map_or_else(
        || {
            Span::styled(
                format!(" {} ", app.config.keys.status_hints()),
                Style::default().fg(colors::TEXT_DIM),
            )
        },
        |message| {
            Span::styled(
                format!(" {message} "),
                Style::default().fg(colors::ACCENT_POSITIVE),
            )
        },
    );

    frame.render_widget(
        Paragraph::new(Line::from(span)).style(Style::default().bg(colors::SURFACE_HIGHLIGHT)),
        area,
    );
}
