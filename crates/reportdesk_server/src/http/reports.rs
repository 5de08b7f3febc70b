use crate::http::response::ApiError;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use reportdesk_core::{
    ReportBatch, ReportDraft, ReportService, ReportTextUpdate, SqliteReportRepository,
};
use serde_json::json;

pub(crate) async fn create_reports_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    payload: Result<Json<ReportBatch>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(batch) = payload.map_err(ApiError::malformed_body)?;
    let (project_id, reports) = state
        .run("Error creating reports", move |conn| {
            let reports = ReportService::new(SqliteReportRepository::try_new(conn)?)
                .create_reports_for_project(&project_id, batch)?;
            Ok((project_id, reports))
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "projectid": project_id,
            "reports": reports,
        })),
    ))
}

pub(crate) async fn list_reports_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let reports = state
        .run("Error fetching reports", move |conn| {
            ReportService::new(SqliteReportRepository::try_new(conn)?)
                .list_reports_for_project(&project_id)
        })
        .await?;
    Ok(Json(reports))
}

pub(crate) async fn create_report(
    State(state): State<AppState>,
    payload: Result<Json<ReportDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(draft) = payload.map_err(ApiError::malformed_body)?;
    let report = state
        .run("Error creating report", move |conn| {
            ReportService::new(SqliteReportRepository::try_new(conn)?).create_report(draft)
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Report created successfully",
            "report": report,
        })),
    ))
}

pub(crate) async fn list_reports(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let reports = state
        .run("Error fetching reports", |conn| {
            ReportService::new(SqliteReportRepository::try_new(conn)?).list_reports()
        })
        .await?;
    Ok(Json(reports))
}

pub(crate) async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let report = state
        .run("Error fetching report", move |conn| {
            ReportService::new(SqliteReportRepository::try_new(conn)?).get_report(&id)
        })
        .await?;
    Ok(Json(report))
}

pub(crate) async fn update_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ReportTextUpdate>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(update) = payload.map_err(ApiError::malformed_body)?;
    let change = state
        .run("Error updating report", move |conn| {
            ReportService::new(SqliteReportRepository::try_new(conn)?)
                .update_report_text(&id, update)
        })
        .await?;

    Ok(Json(json!({
        "message": format!("Report with ID {} has been successfully updated.", change.id),
    })))
}

pub(crate) async fn delete_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state
        .run("Error deleting report", move |conn| {
            ReportService::new(SqliteReportRepository::try_new(conn)?).delete_report(&id)
        })
        .await?;

    Ok(Json(json!({
        "message": format!("Report with ID {deleted} has been successfully deleted."),
    })))
}

/// Reports in which some word occurs at least three times.
pub(crate) async fn special_reports(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let reports = state
        .run("Error fetching special reports", |conn| {
            ReportService::new(SqliteReportRepository::try_new(conn)?).special_reports()
        })
        .await?;
    Ok(Json(json!({ "reports": reports })))
}
