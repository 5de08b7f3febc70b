//! Report domain model.
//!
//! # Invariants
//! - `id` is unique across all reports and never changes.
//! - `project_id` references an existing project; serialized as `projectid`.
//! - Only `text` is mutable after creation.

use super::validation::{required, ValidationError};
use super::EntityKind;
use serde::{Deserialize, Serialize};

/// Persisted report record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    #[serde(rename = "projectid")]
    pub project_id: String,
    pub text: String,
}

impl Report {
    pub fn new(
        id: impl Into<String>,
        project_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            project_id: project_id.into(),
            text: text.into(),
        }
    }
}

/// Unvalidated single-report create input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportDraft {
    pub id: Option<String>,
    #[serde(rename = "projectid")]
    pub project_id: Option<String>,
    pub text: Option<String>,
}

impl ReportDraft {
    pub fn validate(self) -> Result<Report, ValidationError> {
        let id = required(self.id, EntityKind::Report, "id")?;
        let project_id = required(self.project_id, EntityKind::Report, "projectid")?;
        let text = required(self.text, EntityKind::Report, "text")?;
        Ok(Report {
            id,
            project_id,
            text,
        })
    }
}

/// One `{id, text}` entry of a batch create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportBatchItem {
    pub id: Option<String>,
    pub text: Option<String>,
}

/// Batch create input; the owning project comes from the request path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportBatch {
    pub reports: Option<Vec<ReportBatchItem>>,
}

impl ReportBatch {
    pub fn from_items(items: Vec<ReportBatchItem>) -> Self {
        Self {
            reports: Some(items),
        }
    }

    /// Validates every entry before any of them may be inserted.
    ///
    /// Returns records in request order, all bound to `project_id`.
    pub fn validate(self, project_id: &str) -> Result<Vec<Report>, ValidationError> {
        let items = match self.reports {
            Some(items) if !items.is_empty() => items,
            _ => return Err(ValidationError::EmptyBatch),
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| -> Result<Report, ValidationError> {
                let id = non_empty(item.id).ok_or(ValidationError::InvalidBatchItem {
                    index,
                    field: "id",
                })?;
                let text = non_empty(item.text).ok_or(ValidationError::InvalidBatchItem {
                    index,
                    field: "text",
                })?;
                Ok(Report::new(id, project_id, text))
            })
            .collect()
    }
}

/// Text replacement input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportTextUpdate {
    pub text: Option<String>,
}

impl ReportTextUpdate {
    pub fn validate(self) -> Result<String, ValidationError> {
        required(self.text, EntityKind::Report, "text")
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
