//! Project use-case service.
//!
//! # Responsibility
//! - Validate project input and delegate persistence to a repository.
//! - Map zero affected rows to `NotFound`.
//!
//! # Invariants
//! - Validation failures never reach storage.
//! - Update echoes the caller's applied state instead of re-reading it.

use crate::model::project::{Project, ProjectDraft, ProjectUpdate};
use crate::model::validation::require_id;
use crate::model::EntityKind;
use crate::repo::project_repo::ProjectRepository;
use crate::service::error::{ServiceError, ServiceResult};
use log::info;

/// Use-case service wrapper for project CRUD operations.
pub struct ProjectService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and inserts a new project.
    ///
    /// Returns `Conflict` when the id is taken; the stored row is untouched.
    pub fn create_project(&self, draft: ProjectDraft) -> ServiceResult<Project> {
        let project = draft.validate()?;
        self.repo.insert_project(&project)?;
        info!(
            "event=project_create module=service status=ok project_id={}",
            project.id
        );
        Ok(project)
    }

    pub fn list_projects(&self) -> ServiceResult<Vec<Project>> {
        Ok(self.repo.list_projects()?)
    }

    pub fn get_project(&self, id: &str) -> ServiceResult<Project> {
        require_id(id, EntityKind::Project)?;
        self.repo
            .get_project(id)?
            .ok_or_else(|| ServiceError::not_found(EntityKind::Project, id))
    }

    /// Replaces name and description of an existing project.
    pub fn update_project(&self, id: &str, update: ProjectUpdate) -> ServiceResult<Project> {
        require_id(id, EntityKind::Project)?;
        let (name, description) = update.validate()?;

        let changed = self.repo.update_project(id, &name, &description)?;
        if changed == 0 {
            return Err(ServiceError::not_found(EntityKind::Project, id));
        }

        info!("event=project_update module=service status=ok project_id={id}");
        Ok(Project::new(id, name, Some(description)))
    }

    /// Deletes a project (and, through the schema, its reports).
    ///
    /// Returns the deleted id.
    pub fn delete_project(&self, id: &str) -> ServiceResult<String> {
        require_id(id, EntityKind::Project)?;
        let changed = self.repo.delete_project(id)?;
        if changed == 0 {
            return Err(ServiceError::not_found(EntityKind::Project, id));
        }

        info!("event=project_delete module=service status=ok project_id={id}");
        Ok(id.to_string())
    }
}
