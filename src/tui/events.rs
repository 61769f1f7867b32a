//! Terminal events for the board.
//!
//! `EventHandler` polls crossterm off the async runtime and turns what it
//! sees into an [`Event`]. A quiet poll window becomes a `Tick`.

use super::input::KeyEvent;
use crate::config::TuiConfig;
use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use eyre::Result;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Nothing happened within the tick window
    Tick,
    /// Terminal resize
    Resize(u16, u16),
}

impl Event {
    /// Map a raw crossterm event. Key releases and repeats are ticks.
    pub fn from_crossterm(event: CrosstermEvent) -> Self {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key.into()),
            CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
            _ => Event::Tick,
        }
    }
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    pub fn from_config(config: &TuiConfig) -> Self {
        Self::new(config.tick_rate_ms)
    }

    /// Wait up to one tick for the next event.
    pub async fn next_event(&self) -> Result<Event> {
        let tick_rate = self.tick_rate;

        let event = tokio::task::spawn_blocking(move || -> Result<Event> {
            if event::poll(tick_rate)? {
                Ok(Event::from_crossterm(event::read()?))
            } else {
                Ok(Event::Tick)
            }
        })
        .await??;

        Ok(event)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::from_config(&TuiConfig::default())
    }
}
