//! Application state

use super::AppData;
use crate::cart::Cart;
use crate::config::Config;
use crate::confirm::ConfirmCoordinator;

/// Overlay shown on top of the cart, besides confirmations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    /// No overlay
    #[default]
    Normal,
    /// Error message, dismissed by any key
    ErrorModal(String),
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Shop state handed to confirmed actions
    pub data: AppData,

    /// The one confirmation owed to the user, if any
    pub confirm: ConfirmCoordinator<AppData>,

    /// Current overlay mode
    pub mode: Mode,
}

impl App {
    /// Create a new application with the given config and cart
    #[must_use]
    pub fn new(config: Config, cart: Cart) -> Self {
        let confirm = ConfirmCoordinator::with_labels(config.labels());
        Self {
            config,
            data: AppData::new(cart),
            confirm,
            mode: Mode::Normal,
        }
    }

    /// Show an error modal
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.mode = Mode::ErrorModal(message.into());
    }

    /// Close the error modal
    pub fn dismiss_error(&mut self) {
        self.mode = Mode::Normal;
    }

    /// Whether the main loop should stop
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.data.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app_is_idle() {
        let app = App::new(Config::default(), Cart::sample());
        assert_eq!(app.mode, Mode::Normal);
        assert!(!app.confirm.is_visible());
        assert!(!app.should_quit());
        assert_eq!(app.data.selected, 0);
    }

    #[test]
    fn test_labels_from_config() {
        let config = Config {
            cancel_text: "Back".to_string(),
            ..Config::default()
        };
        let app = App::new(config, Cart::new());
        assert_eq!(app.confirm.labels().cancel_text, "Back");
    }

    #[test]
    fn test_error_modal() {
        let mut app = App::new(Config::default(), Cart::new());
        app.set_error("boom");
        assert_eq!(app.mode, Mode::ErrorModal("boom".to_string()));
        app.dismiss_error();
        assert_eq!(app.mode, Mode::Normal);
    }
}
