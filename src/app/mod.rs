//! Application state and logic

mod data;
mod event;
mod handler;
mod state;

pub use data::AppData;
pub use event::{Event, Handler};
pub use handler::Actions;
pub use state::{App, Mode};
