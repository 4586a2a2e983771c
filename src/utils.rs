//! Formatting helpers for human-readable benchmark output.
//!
//! Costs are displayed in USD and durations in milliseconds or seconds,
//! matching the units the reporting surface uses everywhere else.

/// Format a USD cost for display
///
/// Simulated per-run costs are usually fractions of a cent, so amounts under
/// one cent keep six decimal places; larger amounts use four.
///
/// ```rust
/// # use fluid_bench::utils::format_cost;
/// assert_eq!(format_cost(0.1386002), "$0.1386");
/// assert_eq!(format_cost(0.0001386), "$0.000139");
/// ```
pub fn format_cost(cost_usd: f64) -> String {
    if cost_usd.abs() < 0.01 {
        format!("${:.6}", cost_usd)
    } else {
        format!("${:.4}", cost_usd)
    }
}

/// Format a millisecond duration for display
///
/// Sub-second values show whole milliseconds; anything longer switches to
/// seconds with two decimal places.
///
/// ```rust
/// # use fluid_bench::utils::format_duration_ms;
/// assert_eq!(format_duration_ms(250.4), "250ms");
/// assert_eq!(format_duration_ms(2500.0), "2.50s");
/// ```
pub fn format_duration_ms(ms: f64) -> String {
    if ms < 1000.0 {
        format!("{:.0}ms", ms)
    } else {
        format!("{:.2}s", ms / 1000.0)
    }
}

/// Milliseconds since the Unix epoch
pub fn current_timestamp_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cost() {
        assert_eq!(format_cost(0.0), "$0.000000");
        assert_eq!(format_cost(0.0000002), "$0.000000");
        assert_eq!(format_cost(0.0001386), "$0.000139");
        assert_eq!(format_cost(0.1386002), "$0.1386");
        assert_eq!(format_cost(12.5), "$12.5000");
    }

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(0.0), "0ms");
        assert_eq!(format_duration_ms(250.4), "250ms");
        assert_eq!(format_duration_ms(999.4), "999ms");
        assert_eq!(format_duration_ms(1000.0), "1.00s");
        assert_eq!(format_duration_ms(2500.0), "2.50s");
    }

    #[test]
    fn test_current_timestamp_ms() {
        assert!(current_timestamp_ms() > 0);
    }
}
