use super::Workload;
use anyhow::{Context, Result};
use async_trait::async_trait;

/// Traditional serverless workload with full-duration billing shape
///
/// A busy numeric loop with no idle time: utilization is modeled at 100%,
/// so metered and full-duration billing converge and the comparison
/// baseline shows zero savings.
pub struct TraditionalWorkload {
    complexity: u64,
}

impl TraditionalWorkload {
    pub fn new(complexity: u64) -> Self {
        Self { complexity }
    }
}

fn busy_compute(complexity: u64) -> f64 {
    let mut accumulator = 0.0f64;
    for i in 0..complexity * 1000 {
        accumulator += (i as f64).sqrt() * (i as f64 / 1000.0).sin();
    }
    accumulator
}

#[async_trait]
impl Workload for TraditionalWorkload {
    fn name(&self) -> &'static str {
        "traditional"
    }

    fn cpu_utilization_percent(&self) -> f64 {
        100.0
    }

    fn memory_mb(&self) -> f64 {
        128.0
    }

    async fn invoke(&self) -> Result<()> {
        let complexity = self.complexity;
        let result = tokio::task::spawn_blocking(move || busy_compute(complexity))
            .await
            .context("traditional compute task panicked")?;
        std::hint::black_box(result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invoke_completes() {
        let workload = TraditionalWorkload::new(10);
        workload.invoke().await.unwrap();
    }

    #[test]
    fn test_busy_compute_is_finite() {
        assert!(busy_compute(5).is_finite());
    }
}
