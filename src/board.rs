//! A wired board: one store, both project lists and the input form.
//!
//! The TUI keeps a `Board` for the whole session; the `add` command builds a
//! fresh one, submits once and prints it.

use crate::error::Result;
use crate::id::ProjectId;
use crate::store::ProjectStore;
use crate::tui::{ListKind, ListPanel, ProjectForm, ProjectList};
use crate::validation::FormLimits;
use colored::*;
use std::cell::{Ref, RefCell};
use std::fmt::Write;
use std::rc::Rc;

pub struct Board {
    store: Rc<ProjectStore>,
    form: ProjectForm,
    active: ProjectList<ListPanel>,
    finished: ProjectList<ListPanel>,
}

impl Board {
    /// Board around a fresh, empty store
    pub fn new(limits: FormLimits) -> Self {
        Self::with_store(Rc::new(ProjectStore::new()), limits)
    }

    /// Board around an existing store
    pub fn with_store(store: Rc<ProjectStore>, limits: FormLimits) -> Self {
        let form = ProjectForm::new(Rc::clone(&store), limits);
        let active = ProjectList::new(ListKind::Active, &store, Rc::new(RefCell::new(ListPanel::new())));
        let finished = ProjectList::new(ListKind::Finished, &store, Rc::new(RefCell::new(ListPanel::new())));

        Self {
            store,
            form,
            active,
            finished,
        }
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn form(&self) -> &ProjectForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProjectForm {
        &mut self.form
    }

    pub fn list(&self, kind: ListKind) -> &ProjectList<ListPanel> {
        match kind {
            ListKind::Active => &self.active,
            ListKind::Finished => &self.finished,
        }
    }

    pub fn panel(&self, kind: ListKind) -> Ref<'_, ListPanel> {
        self.list(kind).target().borrow()
    }

    /// Fill the form with raw values and submit it.
    pub fn submit(&mut self, title: &str, description: &str, people: &str) -> Result<ProjectId> {
        self.form.submit_values(title, description, people)
    }

    /// Store contents as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.store.snapshot())?)
    }

    /// Both panels as terminal text, active first
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        write_panel(&mut out, &self.panel(ListKind::Active));
        out.push('\n');
        write_panel(&mut out, &self.panel(ListKind::Finished));
        out
    }
}

fn write_panel(out: &mut String, panel: &ListPanel) {
    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", format!("{} ({})", panel.title(), panel.items().len()).cyan().bold());
    if panel.items().is_empty() {
        let _ = writeln!(out, "  {}", "No projects".dimmed());
    }
    for item in panel.items() {
        let _ = writeln!(out, "  {} {}", item.title.bold(), format!("[{}]", item.id).dimmed());
        let _ = writeln!(out, "    {}", item.assigned.green());
        let _ = writeln!(out, "    {}", item.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::validation::INVALID_INPUT_MESSAGE;

    fn board() -> Board {
        Board::new(FormLimits::default())
    }

    #[test]
    fn test_new_board_wires_both_lists() {
        let b = board();
        assert_eq!(b.store().listener_count(), 2);
        assert_eq!(b.panel(ListKind::Active).title(), "ACTIVE PROJECTS");
        assert_eq!(b.panel(ListKind::Finished).title(), "FINISHED PROJECTS");
    }

    #[test]
    fn test_submit_reaches_active_panel() {
        let mut b = board();
        let id = b.submit("Build API", "Design and build the REST API", "3").unwrap();

        assert_eq!(id.to_string(), "p-1");
        assert_eq!(b.panel(ListKind::Active).items().len(), 1);
        assert!(b.panel(ListKind::Finished).items().is_empty());
        assert_eq!(b.list(ListKind::Active).render_count(), 1);
    }

    #[test]
    fn test_rejected_submit_leaves_board_empty() {
        let mut b = board();
        match b.submit("T", "abc", "3") {
            Err(BoardError::Validation(msg)) => assert_eq!(msg, INVALID_INPUT_MESSAGE),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(b.store().is_empty());
        assert!(b.to_text().contains("ACTIVE PROJECTS (0)"));
        assert_eq!(b.to_json().unwrap().trim(), "[]");
    }

    #[test]
    fn test_json_snapshot_shape() {
        let mut b = board();
        b.submit("Build API", "Design and build the REST API", "3").unwrap();

        let value: serde_json::Value = serde_json::from_str(&b.to_json().unwrap()).unwrap();
        let projects = value.as_array().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0]["id"], "p-1");
        assert_eq!(projects[0]["title"], "Build API");
        assert_eq!(projects[0]["description"], "Design and build the REST API");
        assert_eq!(projects[0]["people"], 3);
        assert_eq!(projects[0]["status"], "active");
    }

    #[test]
    fn test_text_lists_both_panels() {
        let mut b = board();
        b.submit("Build API", "Design and build the REST API", "1").unwrap();

        let text = b.to_text();
        let active_at = text.find("ACTIVE PROJECTS (1)").unwrap();
        let finished_at = text.find("FINISHED PROJECTS (0)").unwrap();
        assert!(active_at < finished_at);
        assert!(text.contains("Build API"));
        assert!(text.contains("[p-1]"));
        assert!(text.contains("1 person assigned"));
        assert!(text.contains("Design and build the REST API"));
        assert!(text.contains("No projects"));
    }
}
