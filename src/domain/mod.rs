//! Domain types for projectboard
//!
//! - Project: an immutable project record with identity and status
//! - ProjectStatus: the active / finished bucket a project sits in

pub mod project;

pub use project::{Project, ProjectStatus};
