//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service/business orchestration.
//! - Translate SQLite constraint failures into semantic errors.
//!
//! # Invariants
//! - Every statement binds caller values as parameters.
//! - Update/delete return affected row counts; `0` is not an error here.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::EntityKind;
use rusqlite::{ffi, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod project_repo;
pub mod report_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for project/report persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Primary key already taken; the existing row is untouched.
    Conflict { entity: EntityKind, id: String },
    /// Report insert referenced a project that does not exist.
    MissingProject(String),
    InvalidData(String),
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Conflict { entity, id } => write!(f, "{entity} already exists: {id}"),
            Self::MissingProject(id) => write!(f, "referenced project does not exist: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::MissingRequiredTable(table) => write!(f, "required table missing: {table}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Maps an `INSERT` failure to `Conflict`/`MissingProject` where applicable.
pub(crate) fn map_insert_error(
    err: rusqlite::Error,
    entity: EntityKind,
    id: &str,
    project_id: Option<&str>,
) -> RepoError {
    if let rusqlite::Error::SqliteFailure(failure, _) = &err {
        match failure.extended_code {
            ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE => {
                return RepoError::Conflict {
                    entity,
                    id: id.to_string(),
                };
            }
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
                if let Some(project_id) = project_id {
                    return RepoError::MissingProject(project_id.to_string());
                }
            }
            _ => {}
        }
    }
    RepoError::from(err)
}

pub(crate) fn ensure_tables_ready(conn: &Connection, tables: &[&'static str]) -> RepoResult<()> {
    for &table in tables {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
