//! Terminal input for the storefront loop.

use anyhow::Result;
use ratatui::crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::time::Duration;

/// Input the storefront reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Mouse input
    Mouse(MouseEvent),
    /// Terminal was resized; the next draw picks up the new size
    Resize,
}

impl Event {
    /// Map a crossterm event, dropping the kinds the storefront ignores
    #[must_use]
    pub fn from_crossterm(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) => Some(Self::Key(key)),
            CrosstermEvent::Mouse(mouse) => Some(Self::Mouse(mouse)),
            CrosstermEvent::Resize(..) => Some(Self::Resize),
            _ => None,
        }
    }
}

/// Polls the terminal, waiting at most one poll interval per call
#[derive(Debug, Clone, Copy)]
pub struct Handler {
    poll_interval: Duration,
}

impl Handler {
    /// Create a handler that waits `poll_interval_ms` for input
    #[must_use]
    pub const fn new(poll_interval_ms: u64) -> Self {
        Self {
            poll_interval: Duration::from_millis(poll_interval_ms),
        }
    }

    /// Wait for the next event.
    ///
    /// Returns `None` when the interval passes quietly or the event is one
    /// the storefront ignores.
    ///
    /// # Errors
    ///
    /// Returns an error if polling or reading the terminal fails
    pub fn next(&self) -> Result<Option<Event>> {
        if !event::poll(self.poll_interval)? {
            return Ok(None);
        }
        Ok(Event::from_crossterm(event::read()?))
    }
}
