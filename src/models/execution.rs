// Execution records and executor outcomes

use serde::{Deserialize, Serialize};

/// Isolation runtime; serializes to lowercase JSON (e.g. "docker").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    Docker,
    Gvisor,
    #[serde(other)]
    Unknown,
}

impl Runtime {
    /// Parse from platform API runtime string (e.g. "docker", "gvisor").
    pub fn from_api(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "docker" => Runtime::Docker,
            "gvisor" => Runtime::Gvisor,
            _ => Runtime::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Runtime::Docker => "docker",
            Runtime::Gvisor => "gvisor",
            Runtime::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Function language; informational only, never affects aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Javascript,
    #[serde(other)]
    Unknown,
}

/// Execution status. A missing status field deserializes to Error so that a
/// malformed record never counts toward the success rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecStatus {
    Success,
    #[default]
    Error,
    #[serde(other)]
    Unknown,
}

/// One observed execution, as stored by the platform's metrics store.
/// Timing fields are optional: a failed execution may never reach a
/// measurement phase, and "absent" must stay distinguishable from "zero".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRecord {
    pub function_name: String,
    #[serde(default)]
    pub runtime: Option<Runtime>,
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub initialization_time_ms: Option<f64>,
    #[serde(default)]
    pub execution_time_ms: Option<f64>,
    #[serde(default)]
    pub total_time_ms: Option<f64>,
    #[serde(default)]
    pub cold_start: Option<bool>,
    #[serde(default)]
    pub status: ExecStatus,
    #[serde(default)]
    pub error_message: Option<String>,
    /// Epoch millis; ordering/display only.
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl ExecutionRecord {
    pub fn is_success(&self) -> bool {
        self.status == ExecStatus::Success
    }
}

/// Reply from one executor invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionOutcome {
    #[serde(default)]
    pub status: ExecStatus,
    #[serde(default)]
    pub init_time_ms: Option<f64>,
    #[serde(default)]
    pub exec_time_ms: Option<f64>,
    #[serde(default)]
    pub total_time_ms: Option<f64>,
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
}
