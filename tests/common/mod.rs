// Shared test helpers: record builders and fake platform repos

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use faasboard::benchmark::Executor;
use faasboard::models::*;
use faasboard::platform_repo::MetricsRepo;

/// Successful docker record with the given execution time; other timings set.
pub fn record(runtime: Runtime, exec_time_ms: f64) -> ExecutionRecord {
    ExecutionRecord {
        function_name: "hello".to_string(),
        runtime: Some(runtime),
        language: Some(Language::Python),
        initialization_time_ms: Some(exec_time_ms / 2.0),
        execution_time_ms: Some(exec_time_ms),
        total_time_ms: Some(exec_time_ms * 2.0),
        cold_start: Some(true),
        status: ExecStatus::Success,
        error_message: None,
        timestamp: Some(1_700_000_000_000),
    }
}

/// Record with every optional field absent (as a sparse metrics row would be).
pub fn bare_record() -> ExecutionRecord {
    ExecutionRecord {
        function_name: "hello".to_string(),
        runtime: None,
        language: None,
        initialization_time_ms: None,
        execution_time_ms: None,
        total_time_ms: None,
        cold_start: None,
        status: ExecStatus::Error,
        error_message: None,
        timestamp: None,
    }
}

/// Scripted executor. Times are per-trial (init, exec, total) tuples, indexed
/// by how many times the given runtime has been invoked. Records every call
/// so tests can assert ordering and pairing.
#[derive(Default)]
pub struct FakeExecutor {
    pub docker_times: Vec<(f64, f64, f64)>,
    pub gvisor_times: Vec<(f64, f64, f64)>,
    /// Return Err (executor failure) when this runtime reaches this 0-based
    /// call index.
    pub fail_on: Option<(Runtime, usize)>,
    /// Return a status=error outcome with no timings at this call index.
    pub error_on: Option<(Runtime, usize)>,
    pub calls: Mutex<Vec<(String, Runtime, bool)>>,
}

#[async_trait]
impl Executor for FakeExecutor {
    async fn execute(
        &self,
        function_name: &str,
        runtime: Runtime,
        warm_start: bool,
    ) -> anyhow::Result<ExecutionOutcome> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            let index = calls.iter().filter(|(_, r, _)| *r == runtime).count();
            calls.push((function_name.to_string(), runtime, warm_start));
            index
        };

        if self.fail_on == Some((runtime, index)) {
            anyhow::bail!("backend unreachable");
        }
        if self.error_on == Some((runtime, index)) {
            return Ok(ExecutionOutcome {
                status: ExecStatus::Error,
                init_time_ms: None,
                exec_time_ms: None,
                total_time_ms: None,
                stdout: String::new(),
                stderr: "Traceback: boom".to_string(),
            });
        }

        let times = match runtime {
            Runtime::Docker => &self.docker_times,
            _ => &self.gvisor_times,
        };
        let (init, exec, total) = times.get(index).copied().unwrap_or((1.0, 2.0, 3.0));
        Ok(ExecutionOutcome {
            status: ExecStatus::Success,
            init_time_ms: Some(init),
            exec_time_ms: Some(exec),
            total_time_ms: Some(total),
            stdout: "ok".to_string(),
            stderr: String::new(),
        })
    }
}

impl FakeExecutor {
    /// Same (init, exec, total) on every trial of each runtime.
    pub fn constant(docker: (f64, f64, f64), gvisor: (f64, f64, f64)) -> Self {
        Self {
            docker_times: vec![docker; 16],
            gvisor_times: vec![gvisor; 16],
            ..Default::default()
        }
    }
}

/// Metrics repo serving a canned history.
pub struct FakeMetricsRepo {
    pub records: Vec<ExecutionRecord>,
}

#[async_trait]
impl MetricsRepo for FakeMetricsRepo {
    async fn fetch_executions(&self, _function_name: &str) -> anyhow::Result<Vec<ExecutionRecord>> {
        Ok(self.records.clone())
    }
}

/// Metrics repo whose fetch always fails (store unreachable).
pub struct FailingMetricsRepo;

#[async_trait]
impl MetricsRepo for FailingMetricsRepo {
    async fn fetch_executions(&self, _function_name: &str) -> anyhow::Result<Vec<ExecutionRecord>> {
        anyhow::bail!("metrics store unreachable")
    }
}
