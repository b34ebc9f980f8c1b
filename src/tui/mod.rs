//! Terminal User Interface for the storefront

mod input;
mod render;

pub use input::{handle_key_event, handle_mouse_event};
pub use render::render;

use crate::app::{Actions, App, Event, Handler};
use anyhow::Result;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    layout::Rect,
};
use std::io;
use tracing::info;

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or restored
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = Handler::new(app.config.poll_interval_ms);
    let action_handler = Actions::new();

    let result = run_loop(&mut terminal, &mut app, event_handler, action_handler);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(items = app.data.cart.len(), "Storefront exited");
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: Handler,
    action_handler: Actions,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match event_handler.next()? {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                handle_key_event(app, action_handler, key.code, key.modifiers);
            }
            Some(Event::Mouse(mouse)) => {
                let size = terminal.size()?;
                let frame_area = Rect::new(0, 0, size.width, size.height);
                handle_mouse_event(app, action_handler, mouse, frame_area);
            }
            Some(Event::Key(_) | Event::Resize) | None => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
