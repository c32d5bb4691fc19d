use serde::{Deserialize, Serialize};

/// Identity a write is attributed to in the repository history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Committer {
    pub name: String,
    pub email: String,
}

/// A single file write handed to a [`crate::store::ResultStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWrite {
    /// Repository-relative path, e.g. `results/2025-01-15T08-00-00-000Z_kim.json`.
    pub path: String,
    /// File contents as text. Stores encode it however their API needs.
    pub content: String,
    /// Commit message.
    pub message: String,
}
