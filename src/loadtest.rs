//! # Load Test Driver Module
//!
//! Drives a bounded-rate stream of calls against a workload and aggregates
//! the observations into summary statistics. The driver controls launch
//! *rate*, not in-flight concurrency: calls are started on a fixed cadence
//! without awaiting the previous one, so an arbitrary number of calls may
//! overlap when the target is slow relative to the configured rate.
//!
//! ## Execution Lifecycle
//!
//! 1. **Validation**: the configuration is checked before any call is issued
//! 2. **Launch window**: one call task is spawned per launch interval until
//!    the wall-clock deadline passes
//! 3. **Join**: every launched call is awaited to completion; nothing is
//!    abandoned, so total run time can exceed the window by one in-flight
//!    call's latency
//! 4. **Summarization**: the full observation set is reduced to statistics
//!
//! ## Failure Semantics
//!
//! Individual call failures are data, not control flow: a failed call yields
//! a `success=false` observation with the captured reason and never aborts
//! the run. No timeout is applied to individual calls, so a call that hangs
//! forever stalls the join step; that limitation is deliberate rather than
//! masked with an arbitrary deadline.

use crate::stats::{summarize, Observation, SummaryStatistics};
use crate::workload::Workload;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, info};

/// Upper bound on the test window, in seconds
pub const MAX_DURATION_SECS: u64 = 60;

/// Upper bound on the launch rate, in calls per second
pub const MAX_TARGET_RPS: u32 = 50;

/// Configuration errors detected before a run starts
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("duration of {0}s is outside the allowed range 1-{MAX_DURATION_SECS}s")]
    DurationOutOfRange(u64),

    #[error("target rate of {0} req/s is outside the allowed range 1-{MAX_TARGET_RPS} req/s")]
    RateOutOfRange(u32),
}

/// Parameters of one load-test run
///
/// Immutable for the run's lifetime once validated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoadTestConfig {
    /// Wall-clock window during which new calls are launched
    pub duration_secs: u64,
    /// Nominal launch rate; call initiation is spaced at `1000 / rate` ms
    pub target_rps: u32,
}

impl LoadTestConfig {
    pub fn new(duration_secs: u64, target_rps: u32) -> Self {
        Self {
            duration_secs,
            target_rps,
        }
    }

    /// Check the configured bounds, without issuing any calls
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration_secs == 0 || self.duration_secs > MAX_DURATION_SECS {
            return Err(ConfigError::DurationOutOfRange(self.duration_secs));
        }
        if self.target_rps == 0 || self.target_rps > MAX_TARGET_RPS {
            return Err(ConfigError::RateOutOfRange(self.target_rps));
        }
        Ok(())
    }

    /// Spacing between call launches
    pub fn launch_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_rps as f64)
    }
}

impl std::fmt::Display for LoadTestConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}s window at {} req/s (~{} calls)",
            self.duration_secs,
            self.target_rps,
            self.duration_secs * self.target_rps as u64
        )
    }
}

/// Everything a completed run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadTestOutcome {
    pub observations: Vec<Observation>,
    pub summary: SummaryStatistics,
}

/// Load test runner that paces call launches against a single workload
pub struct LoadTestRunner {
    config: LoadTestConfig,
}

impl LoadTestRunner {
    pub fn new(config: LoadTestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoadTestConfig {
        &self.config
    }

    /// Execute the run and summarize its observations
    ///
    /// Rejects an out-of-bounds configuration before the first call is
    /// issued. Each launched call runs as its own task that resolves to an
    /// [`Observation`]; collecting results through the task handles means
    /// concurrent completions can never lose an entry. Observations arrive
    /// unordered with respect to completion; each carries its own timestamp
    /// for consumers that need ordering.
    pub async fn run(&self, workload: Arc<dyn Workload>) -> Result<LoadTestOutcome> {
        self.config.validate()?;

        info!("Starting load test: {}", self.config);

        let launch_interval = self.config.launch_interval();
        let window = Duration::from_secs(self.config.duration_secs);
        let started = Instant::now();

        let mut handles = Vec::new();
        while started.elapsed() < window {
            let workload = Arc::clone(&workload);
            handles.push(tokio::spawn(async move {
                let call_started = Instant::now();
                let outcome = workload.invoke().await;
                let elapsed_ms = call_started.elapsed().as_secs_f64() * 1000.0;
                let timestamp_ms = chrono::Utc::now().timestamp_millis();

                match outcome {
                    Ok(()) => Observation::ok(timestamp_ms, elapsed_ms),
                    Err(e) => Observation::failed(timestamp_ms, elapsed_ms, format!("{e:#}")),
                }
            }));
            sleep(launch_interval).await;
        }

        debug!(
            launched = handles.len(),
            "Launch window closed, waiting for in-flight calls"
        );

        // Every launched call is awaited; whatever was collected is
        // summarized even when calls failed along the way.
        let mut observations = Vec::with_capacity(handles.len());
        for handle in handles {
            let observation = match handle.await {
                Ok(observation) => observation,
                Err(e) => Observation::failed(
                    chrono::Utc::now().timestamp_millis(),
                    0.0,
                    format!("call task aborted: {e}"),
                ),
            };
            observations.push(observation);
        }

        let summary = summarize(&observations, self.config.duration_secs);
        info!(
            "Load test complete: {}/{} calls succeeded",
            summary.successful_requests, summary.total_requests
        );

        Ok(LoadTestOutcome {
            observations,
            summary,
        })
    }
}
