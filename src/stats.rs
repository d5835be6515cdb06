// Summary statistics over execution histories.
// Pure and total: malformed or partial records degrade per-field, never error.

use crate::models::{
    ExecutionRecord, Runtime, RuntimeDistribution, SummaryStats, TimingSummary, WarmColdSplit,
};

/// Summarizes a function's execution history. An empty history yields the
/// all-zero default SummaryStats.
pub fn summarize(records: &[ExecutionRecord]) -> SummaryStats {
    if records.is_empty() {
        return SummaryStats::default();
    }

    let total = records.len();
    let successes = records.iter().filter(|r| r.is_success()).count();
    let success_rate = 100.0 * successes as f64 / total as f64;

    let initialization_time =
        timing_summary(records.iter().filter_map(|r| r.initialization_time_ms));
    let execution_time = timing_summary(records.iter().filter_map(|r| r.execution_time_ms));
    let total_time = timing_summary(records.iter().filter_map(|r| r.total_time_ms));

    let mut runtime_distribution = RuntimeDistribution::default();
    for r in records {
        match r.runtime {
            Some(Runtime::Docker) => runtime_distribution.docker += 1,
            Some(Runtime::Gvisor) => runtime_distribution.gvisor += 1,
            // Unrecognized or missing runtime goes in neither bucket.
            Some(Runtime::Unknown) | None => {}
        }
    }

    let mut warm_vs_cold = WarmColdSplit::default();
    for r in records {
        // Warm only when the record says so explicitly; missing cold_start
        // counts as cold.
        if r.cold_start == Some(false) {
            warm_vs_cold.warm += 1;
        } else {
            warm_vs_cold.cold += 1;
        }
    }

    SummaryStats {
        total_executions: total as u64,
        success_rate,
        initialization_time,
        execution_time,
        total_time,
        runtime_distribution,
        warm_vs_cold,
    }
}

/// avg/min/max over the values present for one timing field.
/// Records lacking the field are excluded, not treated as zero.
fn timing_summary(values: impl Iterator<Item = f64>) -> TimingSummary {
    let values: Vec<f64> = values.collect();
    if values.is_empty() {
        return TimingSummary::default();
    }
    let avg = values.iter().sum::<f64>() / values.len() as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    TimingSummary { avg, min, max }
}
