use anyhow::Result;
use async_trait::async_trait;

pub mod concurrent;
pub mod cpu_intensive;
pub mod io_bound;
pub mod traditional;

pub use concurrent::ConcurrentWorkload;
pub use cpu_intensive::CpuIntensiveWorkload;
pub use io_bound::IoBoundWorkload;
pub use traditional::TraditionalWorkload;

/// Tuning knobs for the built-in workloads
///
/// Each field applies to one workload kind; unrelated fields are ignored.
#[derive(Debug, Clone)]
pub struct WorkloadParams {
    /// Fibonacci recursion depth for the CPU-intensive workload
    pub fib_depth: u32,
    /// Sleep length for the I/O-bound workload
    pub io_delay_ms: u64,
    /// Fan-out width for the concurrent workload
    pub concurrent_tasks: usize,
    /// Iteration multiplier for the traditional compute loop
    pub complexity: u64,
}

impl Default for WorkloadParams {
    fn default() -> Self {
        Self {
            fib_depth: crate::defaults::FIB_DEPTH,
            io_delay_ms: crate::defaults::IO_DELAY_MS,
            concurrent_tasks: crate::defaults::CONCURRENT_TASKS,
            complexity: crate::defaults::COMPLEXITY,
        }
    }
}

/// An opaque async call target for the load-test driver
///
/// Implementations simulate a serverless function shape: `invoke` performs
/// the synthetic work, and the remaining methods report the fixed resource
/// profile the execution is modeled to consume. The driver treats `invoke`
/// as a black box with unspecified latency and applies no timeout to it.
#[async_trait]
pub trait Workload: Send + Sync {
    /// Workload name for identification in logs and results
    fn name(&self) -> &'static str;

    /// Simulated CPU utilization during execution, as a 0..=100 percentage
    fn cpu_utilization_percent(&self) -> f64;

    /// Simulated provisioned memory in MB
    fn memory_mb(&self) -> f64;

    /// Number of invocations sharing one execution (resource-sharing fan-out)
    fn concurrency(&self) -> u64 {
        1
    }

    /// Execute one synthetic invocation
    async fn invoke(&self) -> Result<()>;
}

/// Workload factory for creating call-target instances
pub struct WorkloadFactory;

impl WorkloadFactory {
    /// Create a workload instance for the given kind
    pub fn create(kind: crate::cli::WorkloadKind, params: &WorkloadParams) -> Result<Box<dyn Workload>> {
        use crate::cli::WorkloadKind;

        match kind {
            WorkloadKind::CpuIntensive => Ok(Box::new(CpuIntensiveWorkload::new(params.fib_depth))),
            WorkloadKind::IoBound => Ok(Box::new(IoBoundWorkload::new(params.io_delay_ms))),
            WorkloadKind::Concurrent => {
                Ok(Box::new(ConcurrentWorkload::new(params.concurrent_tasks)))
            }
            WorkloadKind::Traditional => Ok(Box::new(TraditionalWorkload::new(params.complexity))),
            WorkloadKind::All => Err(anyhow::anyhow!(
                "'all' should be expanded before workload creation"
            )),
        }
    }
}
