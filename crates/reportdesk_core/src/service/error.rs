//! Service error taxonomy surfaced to callers.

use crate::db::DbError;
use crate::model::validation::ValidationError;
use crate::model::EntityKind;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Coarse classification used by transport layers to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Internal,
}

#[derive(Debug)]
pub enum ServiceError {
    Validation(ValidationError),
    /// Id-addressed read/update/delete matched no row.
    NotFound { entity: EntityKind, id: String },
    /// Duplicate primary key on insert.
    Conflict { entity: EntityKind, id: String },
    /// Special-report selection had no reports to inspect.
    NoReports,
    /// Special-report selection matched nothing.
    NoSpecialReports,
    Repo(RepoError),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound { .. } | Self::NoReports | Self::NoSpecialReports => {
                ErrorKind::NotFound
            }
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::Repo(_) => ErrorKind::Internal,
        }
    }

    pub(crate) fn not_found(entity: EntityKind, id: &str) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => {
                write!(f, "{} with ID {id} not found", entity.label())
            }
            Self::Conflict { entity, id } => {
                write!(f, "{} with ID {id} already exists", entity.label())
            }
            Self::NoReports => write!(f, "No reports found"),
            Self::NoSpecialReports => {
                write!(f, "No reports found with the required word frequency")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Conflict { entity, id } => Self::Conflict { entity, id },
            RepoError::MissingProject(id) => Self::NotFound {
                entity: EntityKind::Project,
                id,
            },
            other => Self::Repo(other),
        }
    }
}

impl From<DbError> for ServiceError {
    fn from(value: DbError) -> Self {
        Self::Repo(RepoError::Db(value))
    }
}
