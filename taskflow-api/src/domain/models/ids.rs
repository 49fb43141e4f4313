use serde::{Deserialize, Serialize};
use std::fmt;

/// A project identifier assigned by the store.
///
/// Wraps u64; ids start at 1 and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u64);

impl ProjectId {
    pub const FIRST: ProjectId = ProjectId::new(1);

    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The id that follows this one, or `None` once the id space is exhausted.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
