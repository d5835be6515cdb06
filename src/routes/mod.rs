// HTTP routes

mod http;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::benchmark::Executor;
use crate::config::AppConfig;
use crate::platform_repo::MetricsRepo;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) executor: Arc<dyn Executor>,
    pub(crate) metrics_repo: Arc<dyn MetricsRepo>,
    pub(crate) config: AppConfig,
}

pub fn app(
    executor: Arc<dyn Executor>,
    metrics_repo: Arc<dyn MetricsRepo>,
    config: AppConfig,
) -> Router {
    let state = AppState {
        executor,
        metrics_repo,
        config,
    };
    Router::new()
        .route("/", get(|| async { "faasboard: serverless platform dashboard API" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/functions/{name}/execute", post(http::execute_handler)) // POST one ad-hoc execution
        .route("/metrics/functions/{name}/summary", get(http::summary_handler)) // GET summary stats
        .route("/runtime/compare", get(http::compare_handler)) // GET Docker vs gVisor benchmark
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
