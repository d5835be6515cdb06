// Runtime comparison engine: repeated paired trials of one function under
// Docker and gVisor, via the external executor.
//
// Trials run strictly sequentially (and Docker before gVisor within a trial):
// concurrent trials against the shared execution backend would contend for
// CPU/scheduler and skew the very timings being measured.

use std::sync::Arc;

use tracing::{info, warn};

use crate::models::{
    BenchmarkDeltas, BenchmarkResult, ExecStatus, ExecutionOutcome, MetricDelta, Runtime,
    RuntimeSeries, TrialFailure,
};

/// Executes one function invocation on the isolation backend.
/// An Err means the executor itself failed (transport/backend); a completed
/// execution with a failing function comes back as Ok with status Error.
#[async_trait::async_trait]
pub trait Executor: Send + Sync {
    async fn execute(
        &self,
        function_name: &str,
        runtime: Runtime,
        warm_start: bool,
    ) -> anyhow::Result<ExecutionOutcome>;
}

#[derive(Debug, thiserror::Error)]
pub enum BenchmarkError {
    #[error("iterations must be between 1 and {max}, got {requested}")]
    InvalidIterations { requested: u32, max: u32 },
    /// The executor failed outright on one trial. The whole comparison is
    /// aborted; no partial result is returned. Trial numbers are 1-based.
    #[error("execution failed for runtime {runtime} on trial {trial}: {cause}")]
    ExecutionFailure {
        runtime: Runtime,
        trial: u32,
        cause: anyhow::Error,
    },
}

pub struct RuntimeComparison {
    executor: Arc<dyn Executor>,
    max_iterations: u32,
}

impl RuntimeComparison {
    pub fn new(executor: Arc<dyn Executor>, max_iterations: u32) -> Self {
        Self {
            executor,
            max_iterations,
        }
    }

    /// Runs `iterations` paired trials of `function_name` and returns the
    /// per-runtime timing series plus gVisor-vs-Docker percentage deltas.
    pub async fn compare(
        &self,
        function_name: &str,
        iterations: u32,
        warm_start: bool,
    ) -> Result<BenchmarkResult, BenchmarkError> {
        if iterations == 0 || iterations > self.max_iterations {
            return Err(BenchmarkError::InvalidIterations {
                requested: iterations,
                max: self.max_iterations,
            });
        }

        let started = std::time::Instant::now();
        let mut docker = RuntimeSeries::default();
        let mut gvisor = RuntimeSeries::default();
        let mut failures: Vec<TrialFailure> = Vec::new();

        for trial in 1..=iterations {
            for runtime in [Runtime::Docker, Runtime::Gvisor] {
                let outcome = self
                    .executor
                    .execute(function_name, runtime, warm_start)
                    .await
                    .map_err(|cause| BenchmarkError::ExecutionFailure {
                        runtime,
                        trial,
                        cause,
                    })?;

                let series = match runtime {
                    Runtime::Docker => &mut docker,
                    _ => &mut gvisor,
                };
                record_trial(series, &outcome);

                if outcome.status != ExecStatus::Success {
                    warn!(
                        function = function_name,
                        runtime = %runtime,
                        trial,
                        "trial execution reported non-success status"
                    );
                    failures.push(TrialFailure {
                        trial,
                        runtime,
                        message: if outcome.stderr.is_empty() {
                            "execution reported non-success status".to_string()
                        } else {
                            outcome.stderr.clone()
                        },
                    });
                }
            }
        }

        finalize_averages(&mut docker);
        finalize_averages(&mut gvisor);

        let deltas = BenchmarkDeltas {
            init: percent_delta(docker.avg_init_time_ms, gvisor.avg_init_time_ms),
            exec: percent_delta(docker.avg_exec_time_ms, gvisor.avg_exec_time_ms),
            total: percent_delta(docker.avg_total_time_ms, gvisor.avg_total_time_ms),
        };

        info!(
            function = function_name,
            iterations,
            warm_start,
            failed_trials = failures.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "runtime comparison complete"
        );

        Ok(BenchmarkResult {
            function_name: function_name.to_string(),
            iterations,
            warm_start,
            docker,
            gvisor,
            deltas,
            failures,
        })
    }
}

/// Appends one trial's timings at the next index. A phase the execution never
/// reached is recorded as 0 so every series keeps exactly one slot per trial.
fn record_trial(series: &mut RuntimeSeries, outcome: &ExecutionOutcome) {
    series.init_times_ms.push(outcome.init_time_ms.unwrap_or(0.0));
    series.exec_times_ms.push(outcome.exec_time_ms.unwrap_or(0.0));
    series
        .total_times_ms
        .push(outcome.total_time_ms.unwrap_or(0.0));
}

fn finalize_averages(series: &mut RuntimeSeries) {
    series.avg_init_time_ms = mean(&series.init_times_ms);
    series.avg_exec_time_ms = mean(&series.exec_times_ms);
    series.avg_total_time_ms = mean(&series.total_times_ms);
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Signed percentage of `candidate` relative to `baseline`; positive means
/// the candidate (gVisor) is slower. A zero baseline yields percent 0 with
/// the zero_baseline flag set instead of a division fault.
fn percent_delta(baseline: f64, candidate: f64) -> MetricDelta {
    if baseline == 0.0 {
        return MetricDelta {
            percent: 0.0,
            zero_baseline: true,
        };
    }
    MetricDelta {
        percent: 100.0 * (candidate - baseline) / baseline,
        zero_baseline: false,
    }
}
