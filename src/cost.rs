use serde::{Deserialize, Serialize};

/// Milliseconds in one billing hour
const MS_PER_HOUR: f64 = 3_600_000.0;

/// Billing rates for a compute platform
///
/// Constructed once at process start and passed by reference for the process
/// lifetime; never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingTable {
    /// USD per hour of active CPU time
    pub active_cpu_cost_per_hour: f64,
    /// USD per GB-hour of provisioned memory
    pub memory_cost_per_gb_hour: f64,
    /// USD per invocation
    pub cost_per_invocation: f64,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            active_cpu_cost_per_hour: 0.128,
            memory_cost_per_gb_hour: 0.0106,
            cost_per_invocation: 0.0000002,
        }
    }
}

/// Resource consumption of one simulated workload execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceProfile {
    pub wall_duration_ms: f64,
    /// Fraction of wall time spent on CPU, as a 0..=100 percentage
    pub cpu_utilization_percent: f64,
    pub memory_mb: f64,
    pub concurrent_invocations: u64,
}

impl ResourceProfile {
    /// Provisioned memory in GB, using the decimal convention (128 MB = 0.128 GB)
    pub fn memory_gb(&self) -> f64 {
        self.memory_mb / 1000.0
    }

    /// Wall duration expressed in billing hours
    pub fn duration_hours(&self) -> f64 {
        self.wall_duration_ms / MS_PER_HOUR
    }
}

/// Active vs. idle split of a wall-clock execution window
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResourceMetrics {
    pub active_cpu_ms: f64,
    pub idle_ms: f64,
}

/// Split a wall-clock window into active CPU time and idle time
///
/// `active + idle` reconstructs the wall duration exactly: idle is computed
/// by subtraction rather than from the complementary percentage.
pub fn derive_resource_metrics(wall_duration_ms: f64, cpu_utilization_percent: f64) -> ResourceMetrics {
    let active_cpu_ms = wall_duration_ms * (cpu_utilization_percent / 100.0);
    ResourceMetrics {
        active_cpu_ms,
        idle_ms: wall_duration_ms - active_cpu_ms,
    }
}

/// Itemized cost of a workload under one billing regime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub active_cpu_ms: f64,
    pub provisioned_memory_gb_hours: f64,
    pub invocations: u64,
    pub total_cost_usd: f64,
}

/// Compute the billed cost for the given resource figures
///
/// `total = active_cpu_hours * cpu_rate + memory_gb_hours * memory_rate
///        + invocations * invocation_rate`. Total over non-negative inputs;
/// callers validate upstream.
pub fn cost_of(
    active_cpu_ms: f64,
    memory_gb: f64,
    duration_hours: f64,
    invocations: u64,
    pricing: &PricingTable,
) -> CostBreakdown {
    let active_cpu_cost = active_cpu_ms / MS_PER_HOUR * pricing.active_cpu_cost_per_hour;
    let memory_gb_hours = memory_gb * duration_hours;
    let memory_cost = memory_gb_hours * pricing.memory_cost_per_gb_hour;
    let invocation_cost = invocations as f64 * pricing.cost_per_invocation;

    CostBreakdown {
        active_cpu_ms,
        provisioned_memory_gb_hours: memory_gb_hours,
        invocations,
        total_cost_usd: active_cpu_cost + memory_cost + invocation_cost,
    }
}

/// Metered vs. full-duration billing for the same workload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostComparison {
    /// Billed on active CPU time only
    pub metered_cost: CostBreakdown,
    /// Billed on the full wall-clock window
    pub full_duration_cost: CostBreakdown,
    pub savings_usd: f64,
    pub savings_percent: f64,
}

/// Cost the same execution under both billing regimes
///
/// The metered regime charges for utilization-scaled active CPU time; the
/// full-duration regime substitutes the entire wall window as CPU time.
/// Memory and invocation charges are identical across both.
pub fn compare(profile: &ResourceProfile, pricing: &PricingTable) -> CostComparison {
    let metrics = derive_resource_metrics(profile.wall_duration_ms, profile.cpu_utilization_percent);
    let memory_gb = profile.memory_gb();
    let duration_hours = profile.duration_hours();

    let metered_cost = cost_of(
        metrics.active_cpu_ms,
        memory_gb,
        duration_hours,
        profile.concurrent_invocations,
        pricing,
    );
    let full_duration_cost = cost_of(
        profile.wall_duration_ms,
        memory_gb,
        duration_hours,
        profile.concurrent_invocations,
        pricing,
    );

    let savings_usd = full_duration_cost.total_cost_usd - metered_cost.total_cost_usd;
    let savings_percent = if full_duration_cost.total_cost_usd > 0.0 {
        savings_usd / full_duration_cost.total_cost_usd * 100.0
    } else {
        0.0
    };

    CostComparison {
        metered_cost,
        full_duration_cost,
        savings_usd,
        savings_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn profile(wall_ms: f64, cpu_pct: f64) -> ResourceProfile {
        ResourceProfile {
            wall_duration_ms: wall_ms,
            cpu_utilization_percent: cpu_pct,
            memory_mb: 128.0,
            concurrent_invocations: 1,
        }
    }

    #[test]
    fn test_derive_resource_metrics() {
        let metrics = derive_resource_metrics(1000.0, 20.0);
        assert_eq!(metrics.active_cpu_ms, 200.0);
        assert_eq!(metrics.idle_ms, 800.0);
    }

    #[test]
    fn test_active_plus_idle_reconstructs_wall() {
        for pct in [0.0, 7.0, 33.3, 50.0, 95.0, 100.0] {
            let metrics = derive_resource_metrics(1234.5, pct);
            assert!((metrics.active_cpu_ms + metrics.idle_ms - 1234.5).abs() < EPSILON);
        }
    }

    #[test]
    fn test_cost_of_one_hour() {
        let pricing = PricingTable::default();
        // 1h active CPU + 1 GB-hour + 1 invocation at the default rates
        let breakdown = cost_of(3_600_000.0, 1.0, 1.0, 1, &pricing);

        assert!((breakdown.total_cost_usd - 0.1386002).abs() < 1e-9);
        assert_eq!(breakdown.provisioned_memory_gb_hours, 1.0);
        assert_eq!(breakdown.invocations, 1);
    }

    #[test]
    fn test_cost_of_zero_inputs() {
        let pricing = PricingTable::default();
        let breakdown = cost_of(0.0, 0.0, 0.0, 0, &pricing);
        assert_eq!(breakdown.total_cost_usd, 0.0);
    }

    #[test]
    fn test_invocation_cost_is_linear() {
        let pricing = PricingTable::default();
        let single = cost_of(0.0, 0.0, 0.0, 10, &pricing);
        let double = cost_of(0.0, 0.0, 0.0, 20, &pricing);
        assert!((double.total_cost_usd - 2.0 * single.total_cost_usd).abs() < EPSILON);
    }

    #[test]
    fn test_compare_partial_utilization_saves() {
        let pricing = PricingTable::default();
        let comparison = compare(&profile(2000.0, 15.0), &pricing);

        assert!(comparison.savings_usd > 0.0);
        assert!(comparison.savings_percent > 0.0);
        assert!(
            comparison.metered_cost.total_cost_usd < comparison.full_duration_cost.total_cost_usd
        );
    }

    #[test]
    fn test_compare_full_utilization_saves_nothing() {
        let pricing = PricingTable::default();
        let comparison = compare(&profile(2000.0, 100.0), &pricing);
        assert!(comparison.savings_usd.abs() < EPSILON);
        assert!(comparison.savings_percent.abs() < EPSILON);
    }

    #[test]
    fn test_compare_zero_cost_guard() {
        let pricing = PricingTable {
            active_cpu_cost_per_hour: 0.0,
            memory_cost_per_gb_hour: 0.0,
            cost_per_invocation: 0.0,
        };
        let comparison = compare(&profile(1000.0, 50.0), &pricing);
        // Division by a zero full-duration total reports 0, not NaN
        assert_eq!(comparison.savings_percent, 0.0);
        assert_eq!(comparison.savings_usd, 0.0);
    }
}
