// Handlers: version, execute, metrics summary, runtime compare

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::AppState;
use crate::benchmark::{BenchmarkError, RuntimeComparison};
use crate::models::{BenchmarkResult, ExecutionOutcome, Runtime, SummaryStats};
use crate::stats;
use crate::version::{NAME, VERSION};

/// Error body: `{"error": "..."}` with a status reflecting where it failed
/// (400 for bad requests, 502 for upstream platform failures).
pub(super) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn upstream(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

impl From<BenchmarkError> for ApiError {
    fn from(e: BenchmarkError) -> Self {
        match e {
            BenchmarkError::InvalidIterations { .. } => ApiError::bad_request(e.to_string()),
            BenchmarkError::ExecutionFailure { .. } => ApiError::upstream(e.to_string()),
        }
    }
}

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ExecuteParams {
    runtime: Runtime,
    #[serde(default)]
    warm_start: bool,
}

/// POST /functions/{name}/execute — one ad-hoc execution, proxied to the backend.
pub(super) async fn execute_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(params): Json<ExecuteParams>,
) -> Result<Json<ExecutionOutcome>, ApiError> {
    if params.runtime == Runtime::Unknown {
        return Err(ApiError::bad_request("runtime must be docker or gvisor"));
    }
    let outcome = state
        .executor
        .execute(&name, params.runtime, params.warm_start)
        .await
        .map_err(|e| ApiError::upstream(e.to_string()))?;
    Ok(Json(outcome))
}

/// GET /metrics/functions/{name}/summary — aggregate the function's history.
pub(super) async fn summary_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SummaryStats>, ApiError> {
    let records = state
        .metrics_repo
        .fetch_executions(&name)
        .await
        .map_err(|e| ApiError::upstream(e.to_string()))?;
    Ok(Json(stats::summarize(&records)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CompareParams {
    function_name: String,
    iterations: Option<u32>,
    #[serde(default)]
    warm_start: bool,
}

/// GET /runtime/compare?functionName=&iterations=&warmStart= — benchmark run.
pub(super) async fn compare_handler(
    State(state): State<AppState>,
    Query(params): Query<CompareParams>,
) -> Result<Json<BenchmarkResult>, ApiError> {
    let iterations = params
        .iterations
        .unwrap_or(state.config.benchmark.default_iterations);
    let engine = RuntimeComparison::new(
        state.executor.clone(),
        state.config.benchmark.max_iterations,
    );
    let result = engine
        .compare(&params.function_name, iterations, params.warm_start)
        .await?;
    Ok(Json(result))
}
