use crate::http::response::ApiError;
use crate::AppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use log::{info, warn};
use std::time::Instant;

/// Rejects requests whose `Authorization` header is not the shared token.
pub(crate) async fn require_api_token(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|token| state.token_matches(token));

    if !authorized {
        warn!(
            "event=auth_rejected module=http method={} path={}",
            request.method(),
            request.uri().path()
        );
        return ApiError::unauthorized().into_response();
    }

    next.run(request).await
}

/// Replaces the router's bodiless 405 with the uniform error body.
pub(crate) async fn uniform_method_not_allowed(request: Request<Body>, next: Next) -> Response {
    let response = next.run(request).await;
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut rewritten = ApiError::method_not_allowed().into_response();
    if let Some(allow) = allow {
        rewritten.headers_mut().insert(header::ALLOW, allow);
    }
    rewritten
}

/// Logs one line per request and tags the response with `x-request-id`.
pub(crate) async fn log_requests(request: Request<Body>, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let request_id = uuid::Uuid::new_v4().to_string();

    let mut response = next.run(request).await;

    info!(
        "event=http_request module=http method={} path={} status={} duration_ms={} request_id={}",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis(),
        request_id
    );
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}
