// Summary statistics over historical executions of one function

use serde::{Deserialize, Serialize};

/// avg/min/max over the records that actually carry the field.
/// All zeros when no record carries it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingSummary {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

/// Executions per recognized runtime. Records with an unrecognized runtime
/// land in neither bucket, so docker + gvisor <= total_executions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeDistribution {
    pub docker: u64,
    pub gvisor: u64,
}

/// warm + cold == total_executions; a record without an explicit
/// cold_start = false counts as cold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarmColdSplit {
    pub warm: u64,
    pub cold: u64,
}

/// Derived summary for one function's execution history. Recomputed on every
/// call, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_executions: u64,
    /// Percentage in [0, 100]; 0 for an empty history. Unrounded.
    pub success_rate: f64,
    pub initialization_time: TimingSummary,
    pub execution_time: TimingSummary,
    pub total_time: TimingSummary,
    pub runtime_distribution: RuntimeDistribution,
    pub warm_vs_cold: WarmColdSplit,
}
