//! Domain model for projects and their reports.
//!
//! # Responsibility
//! - Define canonical records persisted by the repository layer.
//! - Define caller input shapes and their field-presence validation.
//!
//! # Invariants
//! - Every record is identified by a caller-supplied, immutable string id.
//! - A report belongs to exactly one project.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub mod project;
pub mod report;
pub mod validation;

/// Entity types owned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Project,
    Report,
}

impl EntityKind {
    /// Capitalized label used in caller-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Project => "Project",
            Self::Report => "Report",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Project => write!(f, "project"),
            Self::Report => write!(f, "report"),
        }
    }
}
