//! # Fluid Bench Library
//!
//! A benchmark suite for comparing serverless execution models and billing
//! regimes. The library drives bounded-rate load tests against synthetic
//! workloads, aggregates the per-call observations into summary statistics,
//! and prices each run under both usage-metered (active CPU time) and
//! full-duration billing.
//!
//! ## Architecture Overview
//!
//! - `loadtest`: the rate-paced load driver and its configuration
//! - `stats`: pure summary-statistics derivation from observation sets
//! - `cost`: the deterministic cost model and billing-regime comparison
//! - `workload`: the call-target abstraction and built-in synthetic workloads
//! - `results`: report assembly and JSON output management
//! - `cli`: command-line parsing and configuration
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use fluid_bench::{
//!     cost::PricingTable,
//!     loadtest::{LoadTestConfig, LoadTestRunner},
//!     workload::IoBoundWorkload,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let runner = LoadTestRunner::new(LoadTestConfig::new(10, 10));
//!     let outcome = runner.run(Arc::new(IoBoundWorkload::new(250))).await?;
//!
//!     println!("p95: {:?} ms", outcome.summary.p95_ms);
//!     Ok(())
//! }
//! ```

/// Command-line interface and configuration
pub mod cli;

/// Deterministic cost arithmetic and billing-regime comparison
///
/// Pure functions over a fixed [`cost::PricingTable`]: itemized cost
/// breakdowns, active/idle wall-time splits, and the metered vs.
/// full-duration comparison. Thread-safe by construction; no shared state.
pub mod cost;

/// Bounded-rate load driver
///
/// Contains the [`loadtest::LoadTestRunner`], which launches calls at a
/// fixed cadence without awaiting completions, joins every in-flight call
/// after the window closes, and hands the observation set to `stats`.
pub mod loadtest;

/// Log output configuration
pub mod logging;

/// Result collection and output formatting
pub mod results;

/// Summary statistics over per-call observations
///
/// Nearest-rank percentiles, success rates, and achieved throughput, with
/// explicit undefined states instead of NaN when no call succeeded.
pub mod stats;

pub mod utils;

/// Synthetic workloads standing in for serverless function shapes
pub mod workload;

// Re-export the types most library users touch directly
pub use cli::{Args, WorkloadKind};
pub use cost::{CostBreakdown, CostComparison, PricingTable, ResourceProfile};
pub use loadtest::{ConfigError, LoadTestConfig, LoadTestOutcome, LoadTestRunner};
pub use results::{ResultsManager, WorkloadRunResults};
pub use stats::{summarize, Observation, SummaryStatistics};
pub use workload::{Workload, WorkloadFactory, WorkloadParams};

/// The current version of the benchmark suite, used in result metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values
pub mod defaults {
    /// Default launch window in seconds
    ///
    /// Ten seconds gathers around a hundred samples at the default rate,
    /// enough for stable percentiles while keeping runs short.
    pub const DURATION_SECS: u64 = 10;

    /// Default launch rate in calls per second
    pub const TARGET_RPS: u32 = 10;

    /// Default output file name
    pub const OUTPUT_FILE: &str = "fluid_bench_results.json";

    /// Default Fibonacci depth for the CPU-intensive workload
    ///
    /// Depth 30 keeps a single invocation in the tens of milliseconds on
    /// current hardware; the cost grows exponentially with depth.
    pub const FIB_DEPTH: u32 = 30;

    /// Default simulated I/O delay in milliseconds
    pub const IO_DELAY_MS: u64 = 1000;

    /// Default fan-out width for the concurrent workload
    pub const CONCURRENT_TASKS: usize = 5;

    /// Default compute-loop multiplier for the traditional workload
    pub const COMPLEXITY: u64 = 1000;
}
