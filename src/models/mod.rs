// Domain models (shared shapes between the platform API and this core)

mod benchmark;
mod execution;
mod stats;

pub use benchmark::{BenchmarkDeltas, BenchmarkResult, MetricDelta, RuntimeSeries, TrialFailure};
pub use execution::{ExecStatus, ExecutionOutcome, ExecutionRecord, Language, Runtime};
pub use stats::{RuntimeDistribution, SummaryStats, TimingSummary, WarmColdSplit};
