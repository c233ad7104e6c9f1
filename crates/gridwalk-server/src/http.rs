//! HTTP endpoints
//!
//! Endpoints:
//! - GET  /health         - liveness, no computation
//! - POST {server.path}   - submit a path, default `/enter-path`

use std::time::Instant;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use gridwalk_core::errors::{ExError, ExErrorKind};
use gridwalk_core::{compute_coverage, log_op_end, log_op_error, log_op_start, PathRequest};
use gridwalk_core_types::{RequestContext, RequestId, TraceId};
use gridwalk_store::{Execution, ExecutionRepo, NewExecution};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Build the router with the submission endpoint mounted at `path`
pub fn router(state: AppState, path: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(path, post(enter_path))
        .with_state(state)
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn enter_path(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<PathRequest>,
) -> Result<Json<Execution>, ApiError> {
    let ctx = request_context(&headers);
    let span = tracing::info_span!(
        "enter_path",
        request_id = %ctx.request_id,
        trace_id = ctx.trace_id.as_ref().map(TraceId::as_str),
    );

    let execution = tokio::task::spawn_blocking(move || {
        let _entered = span.enter();
        handle_submission(&state, &request).map_err(|err| tag_error(err, ctx))
    })
    .await
    .map_err(|err| ApiError::internal("enter_path", err.to_string()))??;

    Ok(Json(execution))
}

/// Correlation ids from the caller's headers; a fresh request id otherwise
fn request_context(headers: &HeaderMap) -> RequestContext {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    let request_id = header(REQUEST_ID_HEADER)
        .map(RequestId::from_string)
        .unwrap_or_default();
    let ctx = RequestContext::with_request_id(request_id);
    match header(TRACE_ID_HEADER) {
        Some(trace_id) => ctx.with_trace_id(TraceId::from_string(trace_id)),
        None => ctx,
    }
}

fn tag_error(err: ExError, ctx: RequestContext) -> ExError {
    let err = err.with_request_id(ctx.request_id);
    match ctx.trace_id {
        Some(trace_id) => err.with_trace_id(trace_id),
        None => err,
    }
}

/// Validate, compute and persist one submission
///
/// Runs on the blocking pool: both the computation and the insert block.
fn handle_submission(state: &AppState, request: &PathRequest) -> Result<Execution, ExError> {
    const OP: &str = "enter_path";
    log_op_start!(OP, move_count = request.commands.len() as u64);
    let started = Instant::now();

    let result = submit(state, request);
    match &result {
        Ok(execution) => {
            log_op_end!(
                OP,
                duration_ms = started.elapsed().as_millis() as u64,
                execution_id = execution.id,
                unique = execution.result
            );
        }
        Err(err) => {
            log_op_error!(
                OP,
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64
            );
        }
    }
    result
}

fn submit(state: &AppState, request: &PathRequest) -> Result<Execution, ExError> {
    let moves = request.validate()?;
    let coverage = compute_coverage(request.start, &moves, state.strategy.counter())?;

    let record = NewExecution::now(
        moves.len() as u64,
        coverage.unique,
        coverage.duration_seconds(),
    );
    let mut conn = state.db.lock().map_err(|_| {
        ExError::new(ExErrorKind::Internal)
            .with_op("enter_path")
            .with_message("database lock poisoned")
    })?;
    ExecutionRepo::insert(&mut conn, &record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use gridwalk_core::Strategy;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let mut conn = gridwalk_store::db::open_in_memory().unwrap();
        gridwalk_store::migrations::apply_migrations(&mut conn).unwrap();
        AppState::new(conn, Strategy::default())
    }

    #[tokio::test]
    async fn test_health() {
        let app = router(test_state(), "/enter-path");

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"status":"ok"}"#);
    }

    #[test]
    fn test_request_context_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, "req-7".parse().unwrap());
        headers.insert(TRACE_ID_HEADER, "trace-9".parse().unwrap());

        let ctx = request_context(&headers);
        assert_eq!(ctx.request_id.as_str(), "req-7");
        assert_eq!(ctx.trace_id.as_ref().map(TraceId::as_str), Some("trace-9"));

        let err = tag_error(ExError::new(ExErrorKind::Persistence), ctx);
        assert_eq!(err.request_id().map(RequestId::as_str), Some("req-7"));
        assert_eq!(err.trace_id().map(TraceId::as_str), Some("trace-9"));
    }

    #[test]
    fn test_request_context_generates_request_id() {
        let ctx = request_context(&HeaderMap::new());
        assert!(!ctx.request_id.as_str().is_empty());
        assert!(ctx.trace_id.is_none());
    }

    #[tokio::test]
    async fn test_custom_route() {
        let app = router(test_state(), "/tibber-developer-test/enter-path");
        let body = r#"{"start":{"x":0,"y":0},"commands":[{"direction":"east","steps":1}]}"#;

        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/tibber-developer-test/enter-path")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
