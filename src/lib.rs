//! projectboard - a terminal project board
//!
//! An input form commits projects into an observable in-memory store; two
//! derived lists (active and finished) re-render on every change.

pub mod board;
pub mod config;
pub mod domain;
pub mod error;
pub mod id;
pub mod store;
pub mod tui;
pub mod validation;

pub use board::Board;
pub use error::{BoardError, Result};
