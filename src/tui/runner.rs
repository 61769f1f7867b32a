//! TUI Runner - main event loop.
//!
//! The `TuiRunner` owns the terminal, app, and event handler. It runs the
//! main loop: render → wait for an event → apply it → repeat.

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views::render;
use eyre::Result;
use log::{debug, info};

/// Main TUI runner that owns the event loop.
pub struct TuiRunner {
    terminal: Tui,
    app: App,
    event_handler: EventHandler,
}

impl TuiRunner {
    pub fn new(terminal: Tui, app: App, event_handler: EventHandler) -> Self {
        Self {
            terminal,
            app,
            event_handler,
        }
    }

    /// Run until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting TUI main loop");

        loop {
            self.terminal.draw(|f| render(&self.app, f))?;

            match self.event_handler.next_event().await? {
                Event::Key(key) => {
                    if self.app.handle_key(key) {
                        break;
                    }
                }
                Event::Resize(w, h) => {
                    // Redrawn on the next pass
                    debug!("Terminal resized to {}x{}", w, h);
                }
                Event::Tick => {}
            }

            if self.app.should_quit() {
                break;
            }
        }

        info!("TUI main loop ended with {} projects", self.app.store().len());
        Ok(())
    }
}
