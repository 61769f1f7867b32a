//! TUI Application
//!
//! `App` owns the session's [`Board`] and turns key presses into form
//! actions, raising a blocking alert when a submission is rejected.

use super::input::KeyEvent;
use super::project_form::ProjectForm;
use super::project_list::ListKind;
use super::surface::ListPanel;
use crate::board::Board;
use crate::config::Config;
use crate::error::BoardError;
use crate::store::ProjectStore;
use log::{info, warn};
use std::cell::Ref;

/// Main TUI application
pub struct App {
    board: Board,
    /// Blocking message; while set, only dismiss keys are accepted
    alert: Option<String>,
    status_message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Create an application with a fresh store
    pub fn new(config: &Config) -> Self {
        Self::from_board(Board::new(config.form.clone()))
    }

    fn from_board(board: Board) -> Self {
        Self {
            board,
            alert: None,
            status_message: None,
            should_quit: false,
        }
    }

    pub fn store(&self) -> &ProjectStore {
        self.board.store()
    }

    pub fn form(&self) -> &ProjectForm {
        self.board.form()
    }

    pub fn form_mut(&mut self) -> &mut ProjectForm {
        self.board.form_mut()
    }

    pub fn panel(&self, kind: ListKind) -> Ref<'_, ListPanel> {
        self.board.panel(kind)
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handle a key press. Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.is_quit() {
            self.quit();
            return true;
        }

        if self.alert.is_some() {
            if key.is_escape() || key.is_enter() {
                self.alert = None;
            }
            return false;
        }

        if key.is_escape() {
            self.quit();
        } else if key.is_enter() {
            self.submit();
        } else if key.is_next_field() {
            self.form_mut().focus_next();
        } else if key.is_prev_field() {
            self.form_mut().focus_prev();
        } else {
            self.form_mut().handle_key(&key);
        }

        self.should_quit
    }

    /// Submit the form, raising the alert on rejection.
    pub fn submit(&mut self) {
        match self.form_mut().submit() {
            Ok(id) => {
                self.status_message = Some(format!("Added project {}", id));
            }
            Err(BoardError::Validation(message)) => {
                info!("Submission rejected");
                self.alert = Some(message);
            }
            Err(e) => {
                warn!("Submission failed: {}", e);
                self.alert = Some(e.to_string());
            }
        }
    }
}
