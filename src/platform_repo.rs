// Outbound HTTP client for the platform API: the execution backend
// (POST /functions/execute/{name}) and the read-only metrics store
// (GET /metrics/functions/{name}).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::benchmark::Executor;
use crate::models::{ExecStatus, ExecutionOutcome, ExecutionRecord, Runtime};

/// Read-only view of the platform's metrics store.
#[async_trait]
pub trait MetricsRepo: Send + Sync {
    async fn fetch_executions(&self, function_name: &str) -> anyhow::Result<Vec<ExecutionRecord>>;
}

pub struct PlatformRepo {
    client: reqwest::Client,
    base_url: String,
}

impl PlatformRepo {
    pub fn connect(base_url: &str, request_timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExecuteRequest {
    runtime: &'static str,
    warm_start: bool,
}

// Platform wire shape: the execution reply nests timings under "metrics".
#[derive(Deserialize)]
struct ExecuteEnvelope {
    result: ExecuteResult,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExecuteResult {
    #[serde(default)]
    status: ExecStatus,
    #[serde(default)]
    metrics: Option<ExecuteMetrics>,
    #[serde(default)]
    stdout: String,
    #[serde(default)]
    stderr: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExecuteMetrics {
    #[serde(default)]
    initialization_time_ms: Option<f64>,
    #[serde(default)]
    execution_time_ms: Option<f64>,
    #[serde(default)]
    total_time_ms: Option<f64>,
}

impl From<ExecuteResult> for ExecutionOutcome {
    fn from(r: ExecuteResult) -> Self {
        let metrics = r.metrics.unwrap_or(ExecuteMetrics {
            initialization_time_ms: None,
            execution_time_ms: None,
            total_time_ms: None,
        });
        ExecutionOutcome {
            status: r.status,
            init_time_ms: metrics.initialization_time_ms,
            exec_time_ms: metrics.execution_time_ms,
            total_time_ms: metrics.total_time_ms,
            stdout: r.stdout,
            stderr: r.stderr,
        }
    }
}

#[async_trait]
impl Executor for PlatformRepo {
    async fn execute(
        &self,
        function_name: &str,
        runtime: Runtime,
        warm_start: bool,
    ) -> anyhow::Result<ExecutionOutcome> {
        let url = format!("{}/functions/execute/{}", self.base_url, function_name);
        let body = ExecuteRequest {
            runtime: runtime.as_str(),
            warm_start,
        };
        let resp = self.client.post(&url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            warn!(function = function_name, runtime = %runtime, %status, "executor call failed");
            anyhow::bail!(
                "executor returned {} for '{}' on {}: {}",
                status,
                function_name,
                runtime,
                text
            );
        }
        let envelope: ExecuteEnvelope = resp.json().await?;
        Ok(envelope.result.into())
    }
}

#[async_trait]
impl MetricsRepo for PlatformRepo {
    async fn fetch_executions(&self, function_name: &str) -> anyhow::Result<Vec<ExecutionRecord>> {
        let url = format!("{}/metrics/functions/{}", self.base_url, function_name);
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            warn!(function = function_name, %status, "metrics fetch failed");
            anyhow::bail!("metrics store returned {} for '{}'", status, function_name);
        }
        Ok(resp.json().await?)
    }
}
