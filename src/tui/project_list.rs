//! Derived project lists.
//!
//! A `ProjectList` subscribes to the store once, at construction, and on
//! every snapshot keeps the projects matching its kind and re-renders its
//! target from scratch.

use super::surface::{ProjectItem, RenderTarget};
use crate::domain::{Project, ProjectStatus};
use crate::error::BoardError;
use crate::store::ProjectStore;
use log::debug;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Which bucket a list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Active,
    Finished,
}

impl ListKind {
    pub fn status(self) -> ProjectStatus {
        match self {
            ListKind::Active => ProjectStatus::Active,
            ListKind::Finished => ProjectStatus::Finished,
        }
    }

    /// Region id on the render surface
    pub fn region_id(self) -> &'static str {
        match self {
            ListKind::Active => "active-projects",
            ListKind::Finished => "finished-projects",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            ListKind::Active => "ACTIVE PROJECTS",
            ListKind::Finished => "FINISHED PROJECTS",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        project.status() == self.status()
    }
}

/// A filtered, self-rendering projection of the store
pub struct ProjectList<T: RenderTarget> {
    kind: ListKind,
    target: Rc<RefCell<T>>,
    assigned: Rc<RefCell<Vec<Project>>>,
    renders: Rc<Cell<usize>>,
}

impl<T: RenderTarget + 'static> ProjectList<T> {
    /// Mount `target` and subscribe to `store`.
    pub fn new(kind: ListKind, store: &ProjectStore, target: Rc<RefCell<T>>) -> Self {
        target.borrow_mut().mount(kind.region_id(), kind.heading());

        let list = Self {
            kind,
            target,
            assigned: Rc::new(RefCell::new(Vec::new())),
            renders: Rc::new(Cell::new(0)),
        };
        list.configure(store);
        list
    }

    fn configure(&self, store: &ProjectStore) {
        let kind = self.kind;
        let target = Rc::clone(&self.target);
        let assigned = Rc::clone(&self.assigned);
        let renders = Rc::clone(&self.renders);

        store.subscribe(move |projects| {
            let relevant: Vec<Project> = projects.into_iter().filter(|p| kind.matches(p)).collect();
            let items: Vec<ProjectItem> = relevant.iter().map(ProjectItem::from_project).collect();
            debug!("Rendering {} with {} items", kind.region_id(), items.len());

            let mut target = target
                .try_borrow_mut()
                .map_err(|_| BoardError::Render(format!("{} target is busy", kind.region_id())))?;
            target.replace_items(items)?;

            // Only what the target accepted counts as assigned
            *assigned.borrow_mut() = relevant;
            renders.set(renders.get() + 1);
            Ok(())
        });
    }

    /// Shared handle to the render target
    pub fn target(&self) -> &Rc<RefCell<T>> {
        &self.target
    }

    /// Projects currently drawn on the target
    pub fn assigned(&self) -> Vec<Project> {
        self.assigned.borrow().clone()
    }

    /// Number of snapshots the target accepted
    pub fn render_count(&self) -> usize {
        self.renders.get()
    }
}
