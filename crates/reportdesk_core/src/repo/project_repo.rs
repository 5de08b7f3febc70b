//! Project repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over the `projects` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Inserts never overwrite an existing id.
//! - Lists are returned in insertion order.
//! - Deleting a project cascades to its reports (schema-level rule).

use crate::model::project::Project;
use crate::model::EntityKind;
use crate::repo::{ensure_tables_ready, map_insert_error, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const PROJECT_SELECT_SQL: &str = "SELECT id, name, description FROM projects";

/// Repository interface for project CRUD operations.
pub trait ProjectRepository {
    fn insert_project(&self, project: &Project) -> RepoResult<()>;
    fn list_projects(&self) -> RepoResult<Vec<Project>>;
    fn get_project(&self, id: &str) -> RepoResult<Option<Project>>;
    /// Replaces name and description; returns the affected row count.
    fn update_project(&self, id: &str, name: &str, description: &str) -> RepoResult<usize>;
    /// Returns the affected row count.
    fn delete_project(&self, id: &str) -> RepoResult<usize>;
}

/// SQLite-backed project repository.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_tables_ready(conn, &["projects"])?;
        Ok(Self { conn })
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn insert_project(&self, project: &Project) -> RepoResult<()> {
        self.conn
            .execute(
                "INSERT INTO projects (id, name, description) VALUES (?1, ?2, ?3);",
                params![
                    project.id.as_str(),
                    project.name.as_str(),
                    project.description.as_deref(),
                ],
            )
            .map_err(|err| map_insert_error(err, EntityKind::Project, &project.id, None))?;
        Ok(())
    }

    fn list_projects(&self) -> RepoResult<Vec<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }
        Ok(projects)
    }

    fn get_project(&self, id: &str) -> RepoResult<Option<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        let project = parse_project_row(row)?;

        if rows.next()?.is_some() {
            return Err(RepoError::InvalidData(format!(
                "multiple rows share id `{id}` in projects.id"
            )));
        }

        Ok(Some(project))
    }

    fn update_project(&self, id: &str, name: &str, description: &str) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "UPDATE projects SET name = ?1, description = ?2 WHERE id = ?3;",
            params![name, description, id],
        )?;
        Ok(changed)
    }

    fn delete_project(&self, id: &str) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM projects WHERE id = ?1;", [id])?;
        Ok(changed)
    }
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    let id: String = row.get("id")?;
    let name = row.get::<_, Option<String>>("name")?.ok_or_else(|| {
        RepoError::InvalidData(format!("null name for project `{id}` in projects.name"))
    })?;

    Ok(Project {
        id,
        name,
        description: row.get("description")?,
    })
}
