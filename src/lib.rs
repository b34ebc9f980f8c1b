//! Storefront - a terminal shopping cart with confirmation dialogs
//!
//! Destructive cart actions go through a [`ConfirmCoordinator`]: a single
//! slot holding the one yes/no question currently owed to the user, and the
//! action to run if the answer is yes.

pub mod app;
pub mod cart;
pub mod config;
pub mod confirm;
pub mod paths;
pub mod tui;

pub use app::App;
pub use cart::Cart;
pub use config::Config;
pub use confirm::{ConfirmCoordinator, ConfirmRequest, Outcome, Resolution};
