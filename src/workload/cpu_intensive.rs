use super::Workload;
use anyhow::{Context, Result};
use async_trait::async_trait;

/// CPU-bound workload driven by naive recursive Fibonacci
///
/// Models a function that spends nearly its whole execution window on the
/// CPU, the shape that benefits least from metered billing. The recursion
/// runs on the blocking thread pool so the launch loop keeps its cadence.
pub struct CpuIntensiveWorkload {
    fib_depth: u32,
}

impl CpuIntensiveWorkload {
    pub fn new(fib_depth: u32) -> Self {
        Self { fib_depth }
    }
}

fn fibonacci(n: u32) -> u64 {
    if n <= 1 {
        return n as u64;
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}

#[async_trait]
impl Workload for CpuIntensiveWorkload {
    fn name(&self) -> &'static str {
        "cpu-intensive"
    }

    fn cpu_utilization_percent(&self) -> f64 {
        95.0
    }

    fn memory_mb(&self) -> f64 {
        128.0
    }

    async fn invoke(&self) -> Result<()> {
        let depth = self.fib_depth;
        let result = tokio::task::spawn_blocking(move || fibonacci(depth))
            .await
            .context("CPU-intensive task panicked")?;
        std::hint::black_box(result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci_base_cases() {
        assert_eq!(fibonacci(0), 0);
        assert_eq!(fibonacci(1), 1);
        assert_eq!(fibonacci(10), 55);
    }

    #[tokio::test]
    async fn test_invoke_completes() {
        let workload = CpuIntensiveWorkload::new(15);
        workload.invoke().await.unwrap();
    }
}
