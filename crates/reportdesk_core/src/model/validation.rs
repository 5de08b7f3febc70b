//! Field-presence validation shared by project and report inputs.
//!
//! A field counts as missing when it is absent, `null`, or the empty string.

use super::EntityKind;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Caller input is missing or malformed; always detected before storage access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingField {
        entity: EntityKind,
        field: &'static str,
    },
    /// Batch create received no report entries.
    EmptyBatch,
    /// One entry of a batch create is incomplete.
    InvalidBatchItem { index: usize, field: &'static str },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { entity, field } => {
                write!(f, "{} {field} is required", entity.label())
            }
            Self::EmptyBatch => {
                write!(f, "At least one report is required in the request body")
            }
            Self::InvalidBatchItem { index, field } => write!(
                f,
                "Each report must have an id and text (report at index {index} is missing {field})"
            ),
        }
    }
}

impl Error for ValidationError {}

/// Returns the value when present and non-empty.
pub(crate) fn required(
    value: Option<String>,
    entity: EntityKind,
    field: &'static str,
) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::MissingField { entity, field }),
    }
}

/// Rejects empty path identifiers.
pub fn require_id(id: &str, entity: EntityKind) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::MissingField { entity, field: "id" });
    }
    Ok(())
}
