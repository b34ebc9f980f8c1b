//! Action handlers for the application

use crate::config::Action;
use crate::confirm::{ConfirmRequest, Outcome, Resolution};
use tracing::{debug, info};

use super::{App, AppData};

/// Handler for application actions
#[derive(Debug, Clone, Copy, Default)]
pub struct Actions;

impl Actions {
    /// Create a new action handler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Handle a keybinding action
    pub fn handle_action(self, app: &mut App, action: Action) {
        match action {
            Action::NextItem => app.data.select_next(),
            Action::PrevItem => app.data.select_prev(),
            Action::RemoveItem => self.request_remove(app),
            Action::ClearCart => self.request_clear(app),
            Action::Quit => self.request_quit(app),
            Action::Confirm => {
                self.resolve_confirm(app, Outcome::Confirmed);
            }
            Action::Cancel => {
                self.resolve_confirm(app, Outcome::Cancelled);
            }
        }
    }

    /// Ask before removing the selected cart line
    pub fn request_remove(self, app: &mut App) {
        let Some(item) = app.data.selected_item() else {
            debug!("Remove requested with no item selected");
            return;
        };
        let id = item.id;
        let name = item.name.clone();

        app.confirm.confirmer().show(
            ConfirmRequest::new(
                "Remove item?",
                format!("Remove {name} from your cart?"),
                move |data: &mut AppData| {
                    let removed = data.cart.remove(id)?;
                    data.clamp_selection();
                    info!(%id, name = %removed.name, "Removed cart item");
                    data.set_status(format!("Removed {}", removed.name));
                    Ok(())
                },
            )
            .confirm_text("Remove")
            .cancel_text("Keep")
            .destructive(),
        );
    }

    /// Ask before emptying the cart
    pub fn request_clear(self, app: &mut App) {
        if app.data.cart.is_empty() {
            app.data.set_status("Cart is already empty");
            return;
        }

        let count = app.data.cart.len();
        app.confirm.confirmer().show(
            ConfirmRequest::new(
                "Empty cart?",
                format!("All {count} items will be removed. This cannot be undone."),
                |data: &mut AppData| {
                    let removed = data.cart.clear();
                    data.clamp_selection();
                    info!(removed, "Emptied cart");
                    data.set_status("Cart emptied");
                    Ok(())
                },
            )
            .confirm_text("Empty")
            .cancel_text("Keep")
            .destructive(),
        );
    }

    /// Quit, asking first if the cart still has items
    pub fn request_quit(self, app: &mut App) {
        if app.data.cart.is_empty() {
            app.data.should_quit = true;
            return;
        }

        let count = app.data.cart.total_quantity();
        app.confirm.confirmer().show(
            ConfirmRequest::new(
                "Quit?",
                format!("Your cart still has {count} items. Quit anyway?"),
                |data: &mut AppData| {
                    data.should_quit = true;
                    Ok(())
                },
            )
            .confirm_text("Quit")
            .cancel_text("Stay"),
        );
    }

    /// Resolve the pending confirmation, turning a failed action into an
    /// error modal
    pub fn resolve_confirm(self, app: &mut App, outcome: Outcome) -> Option<Resolution> {
        match app.confirm.resolve(outcome, &mut app.data) {
            Ok(resolution) => Some(resolution),
            Err(err) => {
                app.set_error(format!("{:#}", anyhow::Error::new(err)));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Mode;
    use crate::cart::{Cart, CartItem};
    use crate::config::Config;
    use pretty_assertions::assert_eq;

    fn create_test_app() -> App {
        App::new(
            Config::default(),
            Cart::with_items(vec![
                CartItem::new("Mug", 1),
                CartItem::new("Kettle", 2),
            ]),
        )
    }

    #[test]
    fn test_navigation_actions() {
        let mut app = create_test_app();
        Actions::new().handle_action(&mut app, Action::NextItem);
        assert_eq!(app.data.selected, 1);
        Actions::new().handle_action(&mut app, Action::PrevItem);
        assert_eq!(app.data.selected, 0);
    }

    #[test]
    fn test_remove_shows_destructive_confirmation() {
        let mut app = create_test_app();
        Actions::new().handle_action(&mut app, Action::NextItem);
        Actions::new().handle_action(&mut app, Action::RemoveItem);

        let view = app.confirm.view();
        assert_eq!(view.map(|v| v.title), Some("Remove item?"));
        assert_eq!(
            view.map(|v| v.message),
            Some("Remove Kettle from your cart?")
        );
        assert_eq!(view.map(|v| v.confirm_text), Some("Remove"));
        assert_eq!(view.map(|v| v.cancel_text), Some("Keep"));
        assert_eq!(
            view.map(|v| v.variant),
            Some(crate::confirm::Variant::Destructive)
        );
        assert_eq!(app.data.cart.len(), 2);
    }

    #[test]
    fn test_confirm_remove() {
        let mut app = create_test_app();
        Actions::new().handle_action(&mut app, Action::NextItem);
        Actions::new().handle_action(&mut app, Action::RemoveItem);
        Actions::new().handle_action(&mut app, Action::Confirm);

        assert!(!app.confirm.is_visible());
        assert_eq!(app.data.cart.len(), 1);
        assert_eq!(app.data.selected, 0);
        assert_eq!(app.data.status_message.as_deref(), Some("Removed Kettle"));
    }

    #[test]
    fn test_cancel_remove() {
        let mut app = create_test_app();
        Actions::new().handle_action(&mut app, Action::RemoveItem);
        Actions::new().handle_action(&mut app, Action::Cancel);

        assert!(!app.confirm.is_visible());
        assert_eq!(app.data.cart.len(), 2);
        assert_eq!(app.data.status_message, None);
    }

    #[test]
    fn test_remove_on_empty_cart_does_nothing() {
        let mut app = App::new(Config::default(), Cart::new());
        Actions::new().handle_action(&mut app, Action::RemoveItem);
        assert!(!app.confirm.is_visible());
    }

    #[test]
    fn test_clear_replaces_pending_remove() {
        let mut app = create_test_app();
        Actions::new().handle_action(&mut app, Action::RemoveItem);
        Actions::new().handle_action(&mut app, Action::ClearCart);

        assert_eq!(app.confirm.view().map(|v| v.title), Some("Empty cart?"));

        let resolution = Actions::new().resolve_confirm(&mut app, Outcome::Confirmed);
        assert!(matches!(resolution, Some(Resolution::Confirmed { .. })));
        assert!(app.data.cart.is_empty());
        assert_eq!(app.data.status_message.as_deref(), Some("Cart emptied"));
    }

    #[test]
    fn test_clear_empty_cart_sets_status() {
        let mut app = App::new(Config::default(), Cart::new());
        Actions::new().handle_action(&mut app, Action::ClearCart);
        assert!(!app.confirm.is_visible());
        assert_eq!(
            app.data.status_message.as_deref(),
            Some("Cart is already empty")
        );
    }

    #[test]
    fn test_quit_with_items_asks_first() {
        let mut app = create_test_app();
        Actions::new().handle_action(&mut app, Action::Quit);
        assert!(!app.should_quit());
        assert_eq!(
            app.confirm.view().map(|v| v.message),
            Some("Your cart still has 3 items. Quit anyway?")
        );

        Actions::new().handle_action(&mut app, Action::Confirm);
        assert!(app.should_quit());
    }

    #[test]
    fn test_quit_with_empty_cart_is_immediate() {
        let mut app = App::new(Config::default(), Cart::new());
        Actions::new().handle_action(&mut app, Action::Quit);
        assert!(app.should_quit());
        assert!(!app.confirm.is_visible());
    }

    #[test]
    fn test_failed_action_shows_error_modal() {
        let mut app = create_test_app();
        Actions::new().handle_action(&mut app, Action::RemoveItem);

        // The item disappears before the user answers
        app.data.cart.clear();

        let resolution = Actions::new().resolve_confirm(&mut app, Outcome::Confirmed);

        assert_eq!(resolution, None);
        assert!(!app.confirm.is_visible());
        match &app.mode {
            Mode::ErrorModal(message) => {
                assert!(message.starts_with("\"Remove item?\" could not be completed: item "));
                assert!(message.ends_with("is no longer in the cart"));
            }
            Mode::Normal => unreachable!("expected error modal"),
        }
    }

    #[test]
    fn test_dialog_actions_while_idle_are_noops() {
        let mut app = create_test_app();
        assert_eq!(
            Actions::new().resolve_confirm(&mut app, Outcome::Confirmed),
            Some(Resolution::Idle)
        );
        Actions::new().handle_action(&mut app, Action::Cancel);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.data.cart.len(), 2);
    }
}
