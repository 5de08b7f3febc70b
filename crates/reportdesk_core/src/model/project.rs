//! Project domain model.
//!
//! # Invariants
//! - `id` is unique across all projects and never changes.
//! - `description` is optional at creation but required on update.

use super::validation::{required, ValidationError};
use super::EntityKind;
use serde::{Deserialize, Serialize};

/// Persisted project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Serialized as `null` when the project was created without one.
    pub description: Option<String>,
}

impl Project {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description,
        }
    }
}

/// Unvalidated create-project input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectDraft {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ProjectDraft {
    /// Checks `id` then `name` and builds the record to insert.
    pub fn validate(self) -> Result<Project, ValidationError> {
        let id = required(self.id, EntityKind::Project, "id")?;
        let name = required(self.name, EntityKind::Project, "name")?;
        Ok(Project {
            id,
            name,
            description: self.description,
        })
    }
}

/// Unvalidated full-replace update input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ProjectUpdate {
    /// Both fields are required; returns `(name, description)`.
    pub fn validate(self) -> Result<(String, String), ValidationError> {
        let name = required(self.name, EntityKind::Project, "name")?;
        let description = required(self.description, EntityKind::Project, "description")?;
        Ok((name, description))
    }
}
