//! # peridyn-bench
//!
//! Benchmark suite for the peridyn evaluators.
//!
//! Provides 3 synthetic lattice scenarios, per-kernel timing metrics,
//! and CSV/JSON export for regression tracking.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind};
