//! Observable project store.
//!
//! # Example
//!
//! ```
//! use projectboard::store::ProjectStore;
//!
//! let store = ProjectStore::new();
//! store.subscribe(|projects| {
//!     println!("{} projects", projects.len());
//!     Ok(())
//! });
//!
//! let id = store.add("Build API", "Design and build the REST API", 3);
//! assert_eq!(store.snapshot()[0].id(), id);
//! ```

mod project_store;

pub use project_store::{Listener, ProjectStore};
