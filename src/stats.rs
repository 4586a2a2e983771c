use serde::{Deserialize, Serialize};

/// A single completed call attempt recorded during a load-test window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    /// Milliseconds since the Unix epoch at call completion
    pub timestamp_ms: i64,
    pub elapsed_ms: f64,
    pub success: bool,
    pub error_reason: Option<String>,
}

impl Observation {
    /// Record a successful call attempt
    pub fn ok(timestamp_ms: i64, elapsed_ms: f64) -> Self {
        Self {
            timestamp_ms,
            elapsed_ms,
            success: true,
            error_reason: None,
        }
    }

    /// Record a failed call attempt with the captured reason
    pub fn failed(timestamp_ms: i64, elapsed_ms: f64, reason: impl Into<String>) -> Self {
        Self {
            timestamp_ms,
            elapsed_ms,
            success: false,
            error_reason: Some(reason.into()),
        }
    }
}

/// Summary statistics derived from a full observation set
///
/// Timing fields are computed over the successful subset only and are `None`
/// when that subset is empty. They are never NaN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub total_requests: usize,
    pub successful_requests: usize,
    pub failed_requests: usize,
    pub success_rate_percent: f64,
    pub mean_ms: Option<f64>,
    pub median_ms: Option<f64>,
    pub p95_ms: Option<f64>,
    pub p99_ms: Option<f64>,
    pub min_ms: Option<f64>,
    pub max_ms: Option<f64>,
    pub achieved_rate_per_second: f64,
}

impl SummaryStatistics {
    /// True when no successful observation contributed timing data
    pub fn has_timing_data(&self) -> bool {
        self.median_ms.is_some()
    }
}

/// Derive summary statistics from a set of observations
///
/// `duration_secs` is the configured wall window of the run; the achieved
/// rate is `total_requests / duration_secs` regardless of how long the
/// individual calls took. Pure function, recomputed fresh per run.
///
/// Percentiles are nearest-rank: the sorted successful elapsed times are
/// indexed at `floor(p * n)` (median at `floor(n / 2)`), clamped to the last
/// element, with no interpolation between ranks. Consumers compare runs on
/// this exact arithmetic, so it must not be replaced with an interpolated
/// definition.
pub fn summarize(observations: &[Observation], duration_secs: u64) -> SummaryStatistics {
    let total = observations.len();
    let mut elapsed: Vec<f64> = observations
        .iter()
        .filter(|o| o.success)
        .map(|o| o.elapsed_ms)
        .collect();
    elapsed.sort_by(f64::total_cmp);

    let successful = elapsed.len();
    let failed = total - successful;

    let success_rate_percent = if total > 0 {
        successful as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    let achieved_rate_per_second = if duration_secs > 0 {
        total as f64 / duration_secs as f64
    } else {
        0.0
    };

    let mean_ms = if successful > 0 {
        Some(elapsed.iter().sum::<f64>() / successful as f64)
    } else {
        None
    };

    SummaryStatistics {
        total_requests: total,
        successful_requests: successful,
        failed_requests: failed,
        success_rate_percent,
        mean_ms,
        median_ms: sorted_value_at(&elapsed, |n| n / 2),
        p95_ms: percentile(&elapsed, 0.95),
        p99_ms: percentile(&elapsed, 0.99),
        min_ms: elapsed.first().copied(),
        max_ms: elapsed.last().copied(),
        achieved_rate_per_second,
    }
}

/// Nearest-rank percentile over an ascending-sorted slice
///
/// Index convention is `floor(p * n)`, clamped to `n - 1`.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    sorted_value_at(sorted, |n| (n as f64 * p).floor() as usize)
}

fn sorted_value_at(sorted: &[f64], index: impl Fn(usize) -> usize) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let idx = index(sorted.len()).min(sorted.len() - 1);
    Some(sorted[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn successes(elapsed: &[f64]) -> Vec<Observation> {
        elapsed.iter().map(|&ms| Observation::ok(0, ms)).collect()
    }

    #[test]
    fn test_summarize_four_samples() {
        let observations = successes(&[100.0, 200.0, 300.0, 400.0]);
        let summary = summarize(&observations, 1);

        assert_eq!(summary.total_requests, 4);
        assert_eq!(summary.successful_requests, 4);
        assert_eq!(summary.failed_requests, 0);
        assert_eq!(summary.success_rate_percent, 100.0);
        // floor(4 / 2) = 2 and floor(4 * 0.95) = 3, by the nearest-rank rule
        assert_eq!(summary.median_ms, Some(300.0));
        assert_eq!(summary.p95_ms, Some(400.0));
        assert_eq!(summary.p99_ms, Some(400.0));
        assert_eq!(summary.min_ms, Some(100.0));
        assert_eq!(summary.max_ms, Some(400.0));
        assert_eq!(summary.achieved_rate_per_second, 4.0);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[], 10);

        assert_eq!(summary.total_requests, 0);
        assert_eq!(summary.success_rate_percent, 0.0);
        assert_eq!(summary.achieved_rate_per_second, 0.0);
        assert_eq!(summary.mean_ms, None);
        assert_eq!(summary.median_ms, None);
        assert_eq!(summary.p95_ms, None);
        assert_eq!(summary.p99_ms, None);
        assert_eq!(summary.min_ms, None);
        assert_eq!(summary.max_ms, None);
        assert!(!summary.has_timing_data());
    }

    #[test]
    fn test_summarize_all_failures() {
        let observations: Vec<Observation> = (0..5)
            .map(|i| Observation::failed(i, 50.0, "connection refused"))
            .collect();
        let summary = summarize(&observations, 1);

        assert_eq!(summary.total_requests, 5);
        assert_eq!(summary.successful_requests, 0);
        assert_eq!(summary.failed_requests, 5);
        assert_eq!(summary.success_rate_percent, 0.0);
        assert_eq!(summary.median_ms, None);
        assert_eq!(summary.achieved_rate_per_second, 5.0);
    }

    #[test]
    fn test_summarize_mixed_outcomes() {
        let mut observations = successes(&[10.0, 30.0, 20.0]);
        observations.push(Observation::failed(0, 500.0, "HTTP 503"));
        let summary = summarize(&observations, 2);

        assert_eq!(summary.total_requests, 4);
        assert_eq!(summary.successful_requests, 3);
        assert_eq!(summary.success_rate_percent, 75.0);
        // Failed elapsed times do not contribute to timing statistics
        assert_eq!(summary.max_ms, Some(30.0));
        assert_eq!(summary.mean_ms, Some(20.0));
        assert_eq!(summary.achieved_rate_per_second, 2.0);
    }

    #[test]
    fn test_percentile_ordering_invariant() {
        let observations = successes(&[5.0, 1.0, 9.0, 3.0, 7.0, 2.0, 8.0]);
        let summary = summarize(&observations, 1);

        let (min, median, p95, p99, max) = (
            summary.min_ms.unwrap(),
            summary.median_ms.unwrap(),
            summary.p95_ms.unwrap(),
            summary.p99_ms.unwrap(),
            summary.max_ms.unwrap(),
        );
        assert!(min <= median && median <= max);
        assert!(median <= p95 && p95 <= p99 && p99 <= max);
    }

    #[test]
    fn test_percentile_single_sample() {
        assert_eq!(percentile(&[42.0], 0.95), Some(42.0));
        assert_eq!(percentile(&[42.0], 0.99), Some(42.0));
        assert_eq!(percentile(&[], 0.95), None);
    }
}
