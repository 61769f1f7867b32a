//! Rendering surface abstraction.
//!
//! Views never draw directly. They mount a titled region on a
//! [`RenderTarget`] and replace its items wholesale; the TUI and the CLI
//! then present whatever the target holds.

use crate::domain::Project;
use crate::error::{BoardError, Result};
use crate::id::ProjectId;

/// Capability a view renders through.
pub trait RenderTarget {
    /// Claim the target for a region and give it a heading.
    fn mount(&mut self, region_id: &str, title: &str);

    /// Swap the whole item list in one step.
    fn replace_items(&mut self, items: Vec<ProjectItem>) -> Result<()>;
}

/// Display text for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub id: ProjectId,
    pub title: String,
    /// e.g. "3 persons assigned"
    pub assigned: String,
    pub description: String,
}

impl ProjectItem {
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: project.id(),
            title: project.title().to_string(),
            assigned: format!("{} assigned", project.people_label()),
            description: project.description().to_string(),
        }
    }
}

/// In-memory render target holding the last rendered items.
#[derive(Debug, Clone, Default)]
pub struct ListPanel {
    region_id: Option<String>,
    title: String,
    items: Vec<ProjectItem>,
}

impl ListPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.region_id.is_some()
    }

    /// Region id given at mount, e.g. `active-projects`
    pub fn region_id(&self) -> Option<&str> {
        self.region_id.as_deref()
    }

    /// Id of the item list inside the region, e.g. `active-projects-list`
    pub fn list_id(&self) -> Option<String> {
        self.region_id.as_ref().map(|id| format!("{}-list", id))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[ProjectItem] {
        &self.items
    }
}

impl RenderTarget for ListPanel {
    fn mount(&mut self, region_id: &str, title: &str) {
        self.region_id = Some(region_id.to_string());
        self.title = title.to_string();
    }

    fn replace_items(&mut self, items: Vec<ProjectItem>) -> Result<()> {
        if !self.is_mounted() {
            return Err(BoardError::Render("panel is not mounted".to_string()));
        }
        self.items = items;
        Ok(())
    }
}
