//! Key handling
//!
//! Keys are mapped to actions through the configured bindings. What an action
//! is allowed to do depends on what is on screen: the error modal swallows the
//! next key, a pending confirmation only accepts confirm/cancel, and the cart
//! view ignores confirm/cancel.

mod mouse;

pub use mouse::handle_mouse_event;

use crate::app::{Actions, App, Mode};
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use tracing::debug;

/// Handle a key press based on what is currently on screen
pub fn handle_key_event(
    app: &mut App,
    action_handler: Actions,
    code: KeyCode,
    modifiers: KeyModifiers,
) {
    app.data.clear_status();

    if matches!(app.mode, Mode::ErrorModal(_)) {
        app.dismiss_error();
        return;
    }

    let Some(action) = app.config.keys.get_action(code, modifiers) else {
        return;
    };

    if app.confirm.is_visible() != action.is_dialog_action() {
        debug!(?action, visible = app.confirm.is_visible(), "Ignoring key");
        return;
    }

    action_handler.handle_action(app, action);
}
