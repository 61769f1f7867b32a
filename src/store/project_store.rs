//! ProjectStore: the observable in-memory project list.
//!
//! The store owns every `Project` and an ordered list of listeners. Each
//! `add` appends one project and then hands every listener its own copy of
//! the full list, synchronously and in registration order.
//!
//! Listeners are isolated from each other: an `Err` or a panic in one is
//! logged and the next listener still runs.

use crate::domain::{Project, ProjectStatus};
use crate::error::Result;
use crate::id::{IdGenerator, ProjectId};
use log::{debug, error, info, warn};
use std::any::Any;
use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

/// Callback that receives a full snapshot of the store after each change.
pub type Listener = Box<dyn FnMut(Vec<Project>) -> Result<()>>;

type SharedListener = Rc<RefCell<Listener>>;

/// In-memory, single-threaded project store.
#[derive(Default)]
pub struct ProjectStore {
    ids: IdGenerator,
    projects: RefCell<Vec<Project>>,
    listeners: RefCell<Vec<SharedListener>>,
}

impl ProjectStore {
    /// Create an empty store with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new active project and notify every listener.
    ///
    /// Inputs are assumed to be validated already; this never fails.
    pub fn add(&self, title: impl Into<String>, description: impl Into<String>, people: u32) -> ProjectId {
        let project = Project::new_active(self.ids.next_id(), title.into(), description.into(), people);
        let id = project.id();
        info!("Added project {} ({:?}, {} people)", id, project.title(), project.people());

        self.projects.borrow_mut().push(project);
        self.notify();
        id
    }

    /// Register a listener for all future snapshots.
    ///
    /// Past state is not replayed, and there is no way to unsubscribe.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: FnMut(Vec<Project>) -> Result<()> + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        listeners.push(Rc::new(RefCell::new(Box::new(listener))));
        debug!("Listener {} subscribed", listeners.len() - 1);
    }

    /// Copy of the current project list, in insertion order.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.borrow().clone()
    }

    /// Projects in the given bucket, in insertion order.
    pub fn list_by_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.projects
            .borrow()
            .iter()
            .filter(|p| p.status() == status)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.borrow().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self) {
        // Clone the handles so listeners may subscribe or add while we iterate.
        let listeners: Vec<SharedListener> = self.listeners.borrow().clone();

        for (index, listener) in listeners.iter().enumerate() {
            let Ok(mut listener) = listener.try_borrow_mut() else {
                warn!("Listener {} is already running, skipping nested notification", index);
                continue;
            };

            // Fresh per listener: a nested add from an earlier listener must not be undone.
            let snapshot = self.snapshot();
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| (&mut *listener)(snapshot)));

            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(e)) => warn!("Listener {} failed: {}", index, e),
                Err(payload) => error!("Listener {} panicked: {}", index, panic_message(payload.as_ref())),
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
