//! Project record and status
//!
//! A `Project` is created by the store and never changes afterwards. Views
//! only ever see copies of it.

use crate::id::ProjectId;
use serde::Serialize;

/// A single project on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    people: u32,
    status: ProjectStatus,
}

/// Which bucket a project belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl Project {
    /// New projects always start out active.
    pub(crate) fn new_active(id: ProjectId, title: String, description: String, people: u32) -> Self {
        Self {
            id,
            title,
            description,
            people,
            status: ProjectStatus::Active,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn people(&self) -> u32 {
        self.people
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Pluralized head count: "1 person", "3 persons"
    pub fn people_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.people)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::IdGenerator;

    fn project(people: u32) -> Project {
        let ids = IdGenerator::new();
        Project::new_active(ids.next_id(), "Build API".into(), "Design the API".into(), people)
    }

    #[test]
    fn test_new_project_is_active() {
        let p = project(3);
        assert_eq!(p.status(), ProjectStatus::Active);
        assert_eq!(p.id().to_string(), "p-1");
        assert_eq!(p.title(), "Build API");
        assert_eq!(p.description(), "Design the API");
        assert_eq!(p.people(), 3);
    }

    #[test]
    fn test_people_label_singular() {
        assert_eq!(project(1).people_label(), "1 person");
    }

    #[test]
    fn test_people_label_plural() {
        assert_eq!(project(2).people_label(), "2 persons");
        assert_eq!(project(5).people_label(), "5 persons");
    }

    #[test]
    fn test_project_serializes() {
        let json = serde_json::to_value(project(4)).unwrap();
        assert_eq!(json["id"], "p-1");
        assert_eq!(json["people"], 4);
        assert_eq!(json["status"], "active");
    }
}
