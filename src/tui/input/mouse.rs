//! Mouse input handling (click-outside-to-cancel, click-to-select).

use crate::app::{Actions, App, Mode};
use crate::confirm::Outcome;
use crate::tui::render::modals::modal_rect;
use ratatui::{
    crossterm::event::{MouseButton, MouseEvent, MouseEventKind},
    layout::Rect,
};

/// Handle a mouse event.
///
/// Only left clicks matter. With a modal open, a click dismisses the error
/// modal or, outside the confirmation, cancels it. Otherwise a click on a
/// cart row selects it.
pub fn handle_mouse_event(
    app: &mut App,
    action_handler: Actions,
    mouse: MouseEvent,
    frame_area: Rect,
) {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        handle_left_click(app, action_handler, mouse.column, mouse.row, frame_area);
    }
}

fn handle_left_click(app: &mut App, action_handler: Actions, x: u16, y: u16, frame_area: Rect) {
    app.data.clear_status();

    if matches!(app.mode, Mode::ErrorModal(_)) {
        app.dismiss_error();
        return;
    }

    if app.confirm.is_visible() {
        if let Some(modal_area) = modal_rect(app, frame_area)
            && !rect_contains(modal_area, x, y)
        {
            // Clicking off the modal is equivalent to pressing cancel.
            action_handler.resolve_confirm(app, Outcome::Cancelled);
        }
        return;
    }

    handle_cart_click(app, x, y, frame_area);
}

fn handle_cart_click(app: &mut App, x: u16, y: u16, frame_area: Rect) {
    // Cart block fills everything above the status bar; rows start inside its border
    let inner = Rect {
        x: frame_area.x.saturating_add(1),
        y: frame_area.y.saturating_add(1),
        width: frame_area.width.saturating_sub(2),
        height: frame_area.height.saturating_sub(3),
    };

    if !rect_contains(inner, x, y) {
        return;
    }

    let index = usize::from(y - inner.y);
    if index < app.data.cart.len() {
        app.data.selected = index;
    }
}

const fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    let within_x = x >= rect.x && x < rect.x.saturating_add(rect.width);
    let within_y = y >= rect.y && y < rect.y.saturating_add(rect.height);
    within_x && within_y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10, 5, 4, 2);
        assert!(rect_contains(rect, 10, 5));
        assert!(rect_contains(rect, 13, 6));
        assert!(!rect_contains(rect, 14, 6));
        assert!(!rect_contains(rect, 10, 7));
        assert!(!rect_contains(rect, 9, 5));
    }
}
