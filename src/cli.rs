use crate::cost::PricingTable;
use crate::loadtest::LoadTestConfig;
use crate::workload::WorkloadParams;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fluid Bench - load-test and cost-model benchmarks for serverless execution models
#[derive(Parser, Debug, Clone)]
#[clap(version, about, long_about = None)]
pub struct Args {
    /// Workloads to benchmark (space-separated: cpu-intensive, io-bound, concurrent, traditional, or all)
    #[clap(short = 'w', value_enum, default_values_t = vec![WorkloadKind::IoBound], num_args = 1..)]
    pub workloads: Vec<WorkloadKind>,

    /// Launch window in seconds (1-60)
    #[clap(short = 'd', long, default_value_t = crate::defaults::DURATION_SECS)]
    pub duration_secs: u64,

    /// Target launch rate in calls per second (1-50)
    #[clap(short = 'r', long, default_value_t = crate::defaults::TARGET_RPS)]
    pub rate: u32,

    /// Output file for results (JSON format)
    #[clap(short = 'o', long, default_value = crate::defaults::OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// Fibonacci depth for the cpu-intensive workload
    #[clap(long, default_value_t = crate::defaults::FIB_DEPTH)]
    pub fib_depth: u32,

    /// Simulated I/O delay in milliseconds for the io-bound workload
    #[clap(long, default_value_t = crate::defaults::IO_DELAY_MS)]
    pub io_delay_ms: u64,

    /// Parallel sub-tasks for the concurrent workload
    #[clap(long, default_value_t = crate::defaults::CONCURRENT_TASKS)]
    pub concurrent_tasks: usize,

    /// Compute-loop multiplier for the traditional workload
    #[clap(long, default_value_t = crate::defaults::COMPLEXITY)]
    pub complexity: u64,

    /// Billing rate in USD per active CPU hour
    #[clap(long, default_value_t = 0.128)]
    pub active_cpu_cost_per_hour: f64,

    /// Billing rate in USD per provisioned memory GB-hour
    #[clap(long, default_value_t = 0.0106)]
    pub memory_cost_per_gb_hour: f64,

    /// Billing rate in USD per invocation
    #[clap(long, default_value_t = 0.0000002)]
    pub cost_per_invocation: f64,

    /// Continue running the remaining workloads even if one fails
    #[clap(long, default_value_t = false)]
    pub continue_on_error: bool,

    /// Verbose output
    #[clap(short = 'v', long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Load-test parameters shared by every selected workload
    pub fn load_config(&self) -> LoadTestConfig {
        LoadTestConfig::new(self.duration_secs, self.rate)
    }

    /// Workload tuning knobs
    pub fn workload_params(&self) -> WorkloadParams {
        WorkloadParams {
            fib_depth: self.fib_depth,
            io_delay_ms: self.io_delay_ms,
            concurrent_tasks: self.concurrent_tasks,
            complexity: self.complexity,
        }
    }

    /// The process-wide pricing table, fixed for the run
    pub fn pricing(&self) -> PricingTable {
        PricingTable {
            active_cpu_cost_per_hour: self.active_cpu_cost_per_hour,
            memory_cost_per_gb_hour: self.memory_cost_per_gb_hour,
            cost_per_invocation: self.cost_per_invocation,
        }
    }
}

/// Available workloads for benchmarking
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkloadKind {
    /// Recursive Fibonacci on a blocking thread
    #[clap(name = "cpu-intensive")]
    CpuIntensive,

    /// Async sleep standing in for upstream I/O
    #[clap(name = "io-bound")]
    IoBound,

    /// Parallel jittered sub-tasks in one execution
    #[clap(name = "concurrent")]
    Concurrent,

    /// Busy compute loop billed for its full duration
    #[clap(name = "traditional")]
    Traditional,

    /// All available workloads
    #[clap(name = "all")]
    All,
}

impl std::fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkloadKind::CpuIntensive => write!(f, "CPU Intensive"),
            WorkloadKind::IoBound => write!(f, "I/O Bound"),
            WorkloadKind::Concurrent => write!(f, "Concurrent"),
            WorkloadKind::Traditional => write!(f, "Traditional Serverless"),
            WorkloadKind::All => write!(f, "All Workloads"),
        }
    }
}

impl WorkloadKind {
    /// Expand the "All" variant to every concrete workload
    pub fn expand_all(workloads: Vec<WorkloadKind>) -> Vec<WorkloadKind> {
        if workloads.contains(&WorkloadKind::All) {
            vec![
                WorkloadKind::CpuIntensive,
                WorkloadKind::IoBound,
                WorkloadKind::Concurrent,
                WorkloadKind::Traditional,
            ]
        } else {
            workloads
        }
    }
}
