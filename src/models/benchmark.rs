// Benchmark comparison result (Docker vs gVisor)

use serde::{Deserialize, Serialize};

use super::Runtime;

/// Per-runtime timing series. Each vector has exactly `iterations` entries;
/// index = trial order, shared across both runtimes so trials can be paired.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeSeries {
    pub init_times_ms: Vec<f64>,
    pub exec_times_ms: Vec<f64>,
    pub total_times_ms: Vec<f64>,
    pub avg_init_time_ms: f64,
    pub avg_exec_time_ms: f64,
    pub avg_total_time_ms: f64,
}

/// Signed percentage delta of gVisor relative to the Docker baseline.
/// Positive = gVisor slower. When the baseline average is 0 the percent is
/// reported as 0 and zero_baseline is set instead of dividing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDelta {
    pub percent: f64,
    pub zero_baseline: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkDeltas {
    pub init: MetricDelta,
    pub exec: MetricDelta,
    pub total: MetricDelta,
}

/// One trial whose execution reported a non-success status. The trial still
/// occupies its slot in the timing series (missing timings recorded as 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialFailure {
    /// 1-based trial number.
    pub trial: u32,
    pub runtime: Runtime,
    pub message: String,
}

/// Outcome of one comparison run. Built fresh per invocation; never cached
/// or merged across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    pub function_name: String,
    pub iterations: u32,
    pub warm_start: bool,
    pub docker: RuntimeSeries,
    pub gvisor: RuntimeSeries,
    pub deltas: BenchmarkDeltas,
    pub failures: Vec<TrialFailure>,
}
