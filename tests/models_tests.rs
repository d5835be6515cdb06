// Model serde tests: wire naming stability and optional-field handling

use faasboard::models::*;

#[test]
fn execution_record_deserializes_with_missing_optional_fields() {
    let json = r#"{"functionName": "hello"}"#;
    let r: ExecutionRecord = serde_json::from_str(json).unwrap();
    assert_eq!(r.function_name, "hello");
    assert_eq!(r.runtime, None);
    assert_eq!(r.execution_time_ms, None);
    assert_eq!(r.cold_start, None);
    // Missing status defaults to Error: never counted as a success.
    assert_eq!(r.status, ExecStatus::Error);
    assert!(!r.is_success());
}

#[test]
fn execution_record_distinguishes_zero_from_missing_timing() {
    let json = r#"{"functionName": "hello", "executionTimeMs": 0.0}"#;
    let r: ExecutionRecord = serde_json::from_str(json).unwrap();
    assert_eq!(r.execution_time_ms, Some(0.0));
    assert_eq!(r.initialization_time_ms, None);
}

#[test]
fn unknown_runtime_string_maps_to_unknown_variant() {
    let json = r#"{"functionName": "hello", "runtime": "firecracker"}"#;
    let r: ExecutionRecord = serde_json::from_str(json).unwrap();
    assert_eq!(r.runtime, Some(Runtime::Unknown));
}

#[test]
fn runtime_parses_and_serializes_lowercase() {
    assert_eq!(Runtime::from_api("Docker"), Runtime::Docker);
    assert_eq!(Runtime::from_api("gvisor"), Runtime::Gvisor);
    assert_eq!(Runtime::from_api("kata"), Runtime::Unknown);
    assert_eq!(serde_json::to_string(&Runtime::Gvisor).unwrap(), "\"gvisor\"");
}

#[test]
fn summary_stats_serializes_with_stable_camel_case_keys() {
    let stats = SummaryStats {
        total_executions: 2,
        success_rate: 50.0,
        ..Default::default()
    };
    let v: serde_json::Value = serde_json::to_value(&stats).unwrap();
    assert_eq!(v["totalExecutions"], 2);
    assert_eq!(v["successRate"], 50.0);
    assert_eq!(v["runtimeDistribution"]["docker"], 0);
    assert_eq!(v["runtimeDistribution"]["gvisor"], 0);
    assert_eq!(v["warmVsCold"]["warm"], 0);
    assert_eq!(v["warmVsCold"]["cold"], 0);
    assert_eq!(v["executionTime"]["avg"], 0.0);
}

#[test]
fn benchmark_result_serializes_series_and_deltas() {
    let result = BenchmarkResult {
        function_name: "hello".to_string(),
        iterations: 2,
        warm_start: false,
        docker: RuntimeSeries {
            init_times_ms: vec![1.0, 3.0],
            exec_times_ms: vec![10.0, 30.0],
            total_times_ms: vec![11.0, 33.0],
            avg_init_time_ms: 2.0,
            avg_exec_time_ms: 20.0,
            avg_total_time_ms: 22.0,
        },
        gvisor: RuntimeSeries::default(),
        deltas: BenchmarkDeltas::default(),
        failures: vec![TrialFailure {
            trial: 1,
            runtime: Runtime::Gvisor,
            message: "boom".to_string(),
        }],
    };
    let v: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(v["functionName"], "hello");
    assert_eq!(v["docker"]["initTimesMs"][1], 3.0);
    assert_eq!(v["docker"]["avgExecTimeMs"], 20.0);
    assert_eq!(v["deltas"]["exec"]["percent"], 0.0);
    assert_eq!(v["deltas"]["exec"]["zeroBaseline"], false);
    assert_eq!(v["failures"][0]["runtime"], "gvisor");
    assert_eq!(v["failures"][0]["trial"], 1);
}

#[test]
fn execution_outcome_defaults_missing_fields() {
    let json = r#"{"status": "success"}"#;
    let o: ExecutionOutcome = serde_json::from_str(json).unwrap();
    assert_eq!(o.status, ExecStatus::Success);
    assert_eq!(o.init_time_ms, None);
    assert!(o.stdout.is_empty());
}
