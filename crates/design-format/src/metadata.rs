use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Design metadata stored alongside the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignMetadata {
    /// Human-readable design name.
    pub name: String,
    /// When the design was first created.
    pub created: DateTime<Utc>,
    /// When the design was last modified.
    pub modified: DateTime<Utc>,
}

impl DesignMetadata {
    /// Create metadata with the given name and current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            created: now,
            modified: now,
        }
    }

    /// Bump the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}
