//! Terminal User Interface for projectboard.
//!
//! One screen, three regions:
//! - **Add Project**: the input form
//! - **ACTIVE PROJECTS** / **FINISHED PROJECTS**: lists derived from the store
//!
//! The lists draw through the [`RenderTarget`] capability, so the same
//! views also feed the plain-text CLI output.

mod app;
mod events;
mod runner;
mod views;

pub mod input;
pub mod project_form;
pub mod project_list;
pub mod surface;

pub use app::App;
pub use events::{Event, EventHandler};
pub use project_form::{FormField, ProjectForm};
pub use project_list::{ListKind, ProjectList};
pub use runner::TuiRunner;
pub use surface::{ListPanel, ProjectItem, RenderTarget};
pub use views::render;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::Result;
use log::error;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};
use std::panic;
use std::sync::Once;

static PANIC_HOOK: Once = Once::new();

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// Enables raw mode and switches to the alternate screen.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Send panic reports to the log instead of stderr, which would draw over
/// the alternate screen. Installing more than once is a no-op.
pub fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        panic::set_hook(Box::new(|info| {
            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                .unwrap_or_else(|| "unknown".to_string());
            let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = info.payload().downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic".to_string()
            };
            error!("Panic at {}: {}", location, message);
        }));
    });
}

/// Restore the terminal to its original state.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

pub mod colors {
    use ratatui::style::Color;

    pub const ACTIVE: Color = Color::Rgb(0, 255, 127); // Spring green
    pub const FINISHED: Color = Color::Rgb(50, 205, 50); // Lime green
    pub const ALERT: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const DIM: Color = Color::DarkGray;
}
