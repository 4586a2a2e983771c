use anyhow::Result;
use fluid_bench::{
    loadtest::{ConfigError, LoadTestConfig, LoadTestRunner},
    workload::IoBoundWorkload,
};
use std::sync::Arc;

/// Verify a short run end-to-end: pacing, join, and summarization.
///
/// This is a lightweight smoke test; exact launch counts depend on
/// scheduler timing, so it checks invariants rather than exact figures.
#[tokio::test]
async fn io_bound_load_test_smoke() -> Result<()> {
    let runner = LoadTestRunner::new(LoadTestConfig::new(1, 10));
    let outcome = runner.run(Arc::new(IoBoundWorkload::new(25))).await?;

    let summary = &outcome.summary;
    assert!(summary.total_requests > 0);
    assert_eq!(summary.total_requests, outcome.observations.len());
    assert_eq!(summary.success_rate_percent, 100.0);
    assert!(summary.has_timing_data());

    // A 25 ms sleep bounds every successful sample from below
    let min = summary.min_ms.unwrap();
    assert!(min >= 25.0, "min elapsed was {min} ms");

    let (median, p95, p99, max) = (
        summary.median_ms.unwrap(),
        summary.p95_ms.unwrap(),
        summary.p99_ms.unwrap(),
        summary.max_ms.unwrap(),
    );
    assert!(min <= median && median <= p95 && p95 <= p99 && p99 <= max);

    Ok(())
}

/// An out-of-bounds config is rejected before any call is issued.
#[tokio::test]
async fn rejects_out_of_bounds_config() {
    let runner = LoadTestRunner::new(LoadTestConfig::new(1, 1000));
    let err = runner
        .run(Arc::new(IoBoundWorkload::new(10)))
        .await
        .expect_err("config beyond the rate limit must not run");

    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::RateOutOfRange(1000))
    );
}
