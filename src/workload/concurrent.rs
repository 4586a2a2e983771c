use super::Workload;
use anyhow::{Context, Result};
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

/// Fan-out workload running several jittered tasks in parallel
///
/// Models concurrent request handling inside one shared execution: N
/// sub-tasks with randomized 500-1500 ms latencies run simultaneously, so
/// the wall duration approaches the slowest task rather than the sum.
pub struct ConcurrentWorkload {
    tasks: usize,
}

impl ConcurrentWorkload {
    pub fn new(tasks: usize) -> Self {
        Self { tasks }
    }
}

#[async_trait]
impl Workload for ConcurrentWorkload {
    fn name(&self) -> &'static str {
        "concurrent"
    }

    fn cpu_utilization_percent(&self) -> f64 {
        25.0
    }

    fn memory_mb(&self) -> f64 {
        256.0
    }

    fn concurrency(&self) -> u64 {
        self.tasks as u64
    }

    async fn invoke(&self) -> Result<()> {
        // Draw delays up front; the RNG handle is not Send across awaits
        let delays: Vec<u64> = {
            let mut rng = rand::thread_rng();
            (0..self.tasks).map(|_| rng.gen_range(500..1500)).collect()
        };

        let handles: Vec<_> = delays
            .into_iter()
            .map(|delay_ms| tokio::spawn(sleep(Duration::from_millis(delay_ms))))
            .collect();

        for handle in handles {
            handle.await.context("concurrent sub-task panicked")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_tasks_overlap() {
        let workload = ConcurrentWorkload::new(4);
        let start = Instant::now();
        workload.invoke().await.unwrap();
        // Four 500-1500 ms tasks in parallel finish well under their 2-6 s sum
        assert!(start.elapsed() < Duration::from_millis(2000));
        assert_eq!(workload.concurrency(), 4);
    }
}
