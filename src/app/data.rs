//! Shared application data handed to confirmed actions.

use crate::cart::{Cart, CartItem};

/// Mutable shop state that confirmation actions operate on.
///
/// Kept separate from [`super::App`] so the coordinator (owned by `App`) can
/// hand it to a commit action without borrowing itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppData {
    /// Cart contents
    pub cart: Cart,
    /// Index of the selected cart line
    pub selected: usize,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Status message to display
    pub status_message: Option<String>,
}

impl AppData {
    /// Create shop state around a cart
    #[must_use]
    pub const fn new(cart: Cart) -> Self {
        Self {
            cart,
            selected: 0,
            should_quit: false,
            status_message: None,
        }
    }

    /// Currently selected cart line
    #[must_use]
    pub fn selected_item(&self) -> Option<&CartItem> {
        self.cart.get(self.selected)
    }

    /// Move selection to the next line, wrapping around
    pub const fn select_next(&mut self) {
        let count = self.cart.len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    /// Move selection to the previous line, wrapping around
    pub const fn select_prev(&mut self) {
        let count = self.cart.len();
        if count > 0 {
            self.selected = match self.selected.checked_sub(1) {
                Some(prev) => prev,
                None => count - 1,
            };
        }
    }

    /// Keep the selection inside the cart after lines are removed
    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.cart.len().saturating_sub(1));
    }

    /// Set a status message to display
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
