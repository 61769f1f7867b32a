//! ID generation for projects
//!
//! Ids come from a per-store counter, so they can never collide for the
//! lifetime of the store that issued them.

use serde::{Serialize, Serializer};
use std::cell::Cell;
use std::fmt;

/// Opaque project identifier.
///
/// Format: `p-{sequence}`
/// Example: `p-1`, `p-42`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(u64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p-{}", self.0)
    }
}

impl Serialize for ProjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Monotonic id source. Single-threaded, so a `Cell` is enough.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Cell<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id
    pub fn next_id(&self) -> ProjectId {
        let next = self.last.get() + 1;
        self.last.set(next);
        ProjectId(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_id_format() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_id().to_string(), "p-1");
        assert_eq!(ids.next_id().to_string(), "p-2");
    }

    #[test]
    fn test_ids_are_monotonic() {
        let ids = IdGenerator::new();
        let first = ids.next_id();
        let second = ids.next_id();
        assert!(second > first);
        assert_eq!(second.to_string(), "p-2");
    }

    #[test]
    fn test_ids_unique_over_many_calls() {
        let ids = IdGenerator::new();
        let seen: HashSet<ProjectId> = (0..10_000).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 10_000);
    }

    #[test]
    fn test_separate_generators_restart() {
        let a = IdGenerator::new();
        let b = IdGenerator::new();
        assert_eq!(a.next_id(), b.next_id());
    }

    #[test]
    fn test_project_id_serializes_as_string() {
        let ids = IdGenerator::new();
        let json = serde_json::to_string(&ids.next_id()).unwrap();
        assert_eq!(json, "\"p-1\"");
    }
}
