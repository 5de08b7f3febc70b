#![forbid(unsafe_code)]
//! HTTP boundary for ReportDesk.
//!
//! # Responsibility
//! - Map REST routes onto core project/report services.
//! - Gate every request behind the shared API token.
//! - Keep one error body shape: `{"error": "<message>"}`.

use axum::middleware;
use axum::routing::get;
use axum::Router;
use log::error;
use reportdesk_core::{Connection, ServiceError, ServiceResult, SharedDb};
use std::sync::Arc;

pub mod config;
mod http;

pub use config::{ConfigError, ServerConfig};

use http::response::ApiError;

/// Shared handler state: the store and the expected API token.
#[derive(Clone)]
pub struct AppState {
    db: Arc<SharedDb>,
    api_token: Arc<str>,
}

impl AppState {
    pub fn new(db: SharedDb, api_token: impl Into<String>) -> Self {
        Self {
            db: Arc::new(db),
            api_token: Arc::from(api_token.into()),
        }
    }

    pub(crate) fn token_matches(&self, candidate: &str) -> bool {
        self.api_token.as_bytes() == candidate.as_bytes()
    }

    /// Runs one service operation on the blocking pool with exclusive
    /// connection access.
    ///
    /// `context` is the caller-facing message for unexpected failures.
    pub(crate) async fn run<T, F>(&self, context: &'static str, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut Connection) -> ServiceResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);
        match tokio::task::spawn_blocking(move || db.with_conn(f)).await {
            Ok(Ok(Ok(value))) => Ok(value),
            Ok(Ok(Err(err))) => Err(ApiError::from_service(err, context)),
            Ok(Err(err)) => Err(ApiError::from_service(ServiceError::from(err), context)),
            Err(err) => {
                error!(
                    "event=blocking_task module=http status=error context={:?} error={}",
                    context, err
                );
                Err(ApiError::internal(context))
            }
        }
    }
}

/// Builds the application router with auth and request logging applied to
/// every route, including unknown ones.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/projects",
            get(http::projects::list_projects).post(http::projects::create_project),
        )
        .route(
            "/projects/:id",
            get(http::projects::get_project)
                .put(http::projects::update_project)
                .delete(http::projects::delete_project),
        )
        .route(
            "/projects/:id/reports",
            get(http::reports::list_reports_for_project)
                .post(http::reports::create_reports_for_project),
        )
        .route(
            "/reports",
            get(http::reports::list_reports).post(http::reports::create_report),
        )
        .route(
            "/reports/:id",
            get(http::reports::get_report)
                .put(http::reports::update_report)
                .delete(http::reports::delete_report),
        )
        .route("/special-reports", get(http::reports::special_reports));

    Router::new()
        .nest("/api", api)
        .fallback(http::response::route_not_found)
        .layer(middleware::from_fn(http::middleware::uniform_method_not_allowed))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            http::middleware::require_api_token,
        ))
        .layer(middleware::from_fn(http::middleware::log_requests))
        .with_state(state)
}
