use super::Workload;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

/// I/O-bound workload that idles on an async sleep
///
/// Models a function waiting on upstream services for most of its window,
/// the shape with the largest metered-billing savings: low CPU utilization
/// against a long wall duration.
pub struct IoBoundWorkload {
    delay: Duration,
}

impl IoBoundWorkload {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }
}

#[async_trait]
impl Workload for IoBoundWorkload {
    fn name(&self) -> &'static str {
        "io-bound"
    }

    fn cpu_utilization_percent(&self) -> f64 {
        15.0
    }

    fn memory_mb(&self) -> f64 {
        64.0
    }

    async fn invoke(&self) -> Result<()> {
        sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_invoke_waits_for_delay() {
        let workload = IoBoundWorkload::new(20);
        let start = Instant::now();
        workload.invoke().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
