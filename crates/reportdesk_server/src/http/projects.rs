use crate::http::response::ApiError;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use reportdesk_core::{ProjectDraft, ProjectService, ProjectUpdate, SqliteProjectRepository};
use serde_json::json;

pub(crate) async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<ProjectDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(draft) = payload.map_err(ApiError::malformed_body)?;
    let project = state
        .run("Error creating project", move |conn| {
            ProjectService::new(SqliteProjectRepository::try_new(conn)?).create_project(draft)
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Project created successfully",
            "projectId": project.id,
        })),
    ))
}

pub(crate) async fn list_projects(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let projects = state
        .run("Error fetching projects", |conn| {
            ProjectService::new(SqliteProjectRepository::try_new(conn)?).list_projects()
        })
        .await?;
    Ok(Json(projects))
}

pub(crate) async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let project = state
        .run("Error fetching project", move |conn| {
            ProjectService::new(SqliteProjectRepository::try_new(conn)?).get_project(&id)
        })
        .await?;
    Ok(Json(project))
}

pub(crate) async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ProjectUpdate>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(update) = payload.map_err(ApiError::malformed_body)?;
    let project = state
        .run("Error updating project", move |conn| {
            ProjectService::new(SqliteProjectRepository::try_new(conn)?)
                .update_project(&id, update)
        })
        .await?;

    Ok(Json(json!({
        "message": format!("Project with ID {} has been updated.", project.id),
        "updatedProject": project,
    })))
}

pub(crate) async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state
        .run("Error deleting project", move |conn| {
            ProjectService::new(SqliteProjectRepository::try_new(conn)?).delete_project(&id)
        })
        .await?;

    Ok(Json(json!({
        "message": format!("Project with ID {deleted} has been deleted."),
        "deletedProjectId": deleted,
    })))
}
