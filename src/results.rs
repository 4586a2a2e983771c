use crate::cli::WorkloadKind;
use crate::cost::{compare, CostComparison, PricingTable, ResourceProfile};
use crate::loadtest::{LoadTestConfig, LoadTestOutcome};
use crate::stats::SummaryStatistics;
use crate::workload::Workload;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Complete results for one workload's load-test run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadRunResults {
    pub workload: WorkloadKind,
    pub workload_name: String,
    pub config: LoadTestConfig,
    pub summary: SummaryStatistics,
    pub cost: CostComparison,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl WorkloadRunResults {
    /// Couple a run's summary with its cost comparison
    ///
    /// The comparison is computed over an aggregate resource profile: the
    /// wall duration is the sum of successful call times, the invocation
    /// count is the total number of calls, and utilization and memory come
    /// from the workload's fixed simulated profile.
    pub fn from_outcome(
        workload_kind: WorkloadKind,
        workload: &dyn Workload,
        config: LoadTestConfig,
        outcome: &LoadTestOutcome,
        pricing: &PricingTable,
    ) -> Self {
        let total_wall_ms: f64 = outcome
            .observations
            .iter()
            .filter(|o| o.success)
            .map(|o| o.elapsed_ms)
            .sum();

        let profile = ResourceProfile {
            wall_duration_ms: total_wall_ms,
            cpu_utilization_percent: workload.cpu_utilization_percent(),
            memory_mb: workload.memory_mb(),
            concurrent_invocations: outcome.summary.total_requests as u64,
        };

        Self {
            workload: workload_kind,
            workload_name: workload.name().to_string(),
            config,
            summary: outcome.summary.clone(),
            cost: compare(&profile, pricing),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// System information recorded for reproducibility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub architecture: String,
    pub cpu_cores: usize,
    pub benchmark_version: String,
}

impl Default for SystemInfo {
    fn default() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            architecture: std::env::consts::ARCH.to_string(),
            cpu_cores: num_cpus::get(),
            benchmark_version: crate::VERSION.to_string(),
        }
    }
}

/// Metadata attached to the final report
#[derive(Debug, Serialize, Deserialize)]
pub struct RunMetadata {
    pub version: String,
    pub run_id: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub total_runs: usize,
    pub system_info: SystemInfo,
}

/// Cross-workload roll-up of a full benchmark session
#[derive(Debug, Serialize, Deserialize)]
pub struct OverallSummary {
    pub total_requests: usize,
    pub total_failures: usize,
    pub total_metered_cost_usd: f64,
    pub total_full_duration_cost_usd: f64,
    pub total_savings_usd: f64,
    /// Workload with the lowest median latency, when any run has timing data
    pub fastest_workload: Option<String>,
    /// Workload with the largest savings percentage
    pub largest_savings_workload: Option<String>,
}

/// Final report written to the output file
#[derive(Debug, Serialize, Deserialize)]
pub struct FinalReport {
    pub metadata: RunMetadata,
    pub results: Vec<WorkloadRunResults>,
    pub summary: OverallSummary,
}

/// Results manager accumulating per-workload runs and writing the report
pub struct ResultsManager {
    output_file: PathBuf,
    run_id: String,
    results: Vec<WorkloadRunResults>,
}

impl ResultsManager {
    pub fn new(output_file: &Path) -> Self {
        Self {
            output_file: output_file.to_path_buf(),
            run_id: uuid::Uuid::new_v4().to_string(),
            results: Vec::new(),
        }
    }

    /// Add one workload's completed run
    pub fn add_results(&mut self, results: WorkloadRunResults) {
        info!("Recording results for {} workload", results.workload_name);
        self.results.push(results);
    }

    pub fn results(&self) -> &[WorkloadRunResults] {
        &self.results
    }

    /// Write the consolidated report as pretty-printed JSON
    pub fn finalize(&self) -> Result<()> {
        let report = FinalReport {
            metadata: RunMetadata {
                version: crate::VERSION.to_string(),
                run_id: self.run_id.clone(),
                timestamp: chrono::Utc::now(),
                total_runs: self.results.len(),
                system_info: SystemInfo::default(),
            },
            results: self.results.clone(),
            summary: self.overall_summary(),
        };

        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&self.output_file, json)
            .with_context(|| format!("failed to write results to {:?}", self.output_file))?;

        info!("Results written to {:?}", self.output_file);
        Ok(())
    }

    /// Roll up totals and best-of picks across all recorded runs
    fn overall_summary(&self) -> OverallSummary {
        let total_requests = self.results.iter().map(|r| r.summary.total_requests).sum();
        let total_failures = self.results.iter().map(|r| r.summary.failed_requests).sum();
        let total_metered_cost_usd = self
            .results
            .iter()
            .map(|r| r.cost.metered_cost.total_cost_usd)
            .sum();
        let total_full_duration_cost_usd = self
            .results
            .iter()
            .map(|r| r.cost.full_duration_cost.total_cost_usd)
            .sum();
        let total_savings_usd = self.results.iter().map(|r| r.cost.savings_usd).sum();

        let fastest_workload = self
            .results
            .iter()
            .filter_map(|r| r.summary.median_ms.map(|median| (r, median)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(r, _)| r.workload_name.clone());

        let largest_savings_workload = self
            .results
            .iter()
            .max_by(|a, b| a.cost.savings_percent.total_cmp(&b.cost.savings_percent))
            .map(|r| r.workload_name.clone());

        OverallSummary {
            total_requests,
            total_failures,
            total_metered_cost_usd,
            total_full_duration_cost_usd,
            total_savings_usd,
            fastest_workload,
            largest_savings_workload,
        }
    }
}
