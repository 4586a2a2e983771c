//! # Fluid Bench - Main Entry Point
//!
//! Runs a bounded-rate load test against each selected synthetic workload,
//! aggregates per-call observations into summary statistics, prices every
//! run under metered and full-duration billing, and writes a consolidated
//! JSON report.
//!
//! The flow mirrors the library structure:
//! 1. **Initialize logging** with level-colorized output
//! 2. **Parse and validate** the load-test configuration before any work
//! 3. **Run workloads** one at a time, each under the same config
//! 4. **Finalize results** into the output file

use anyhow::Result;
use clap::Parser;
use fluid_bench::{
    cli::{Args, WorkloadKind},
    cost::PricingTable,
    loadtest::{LoadTestConfig, LoadTestRunner},
    logging,
    results::{ResultsManager, WorkloadRunResults},
    utils::{format_cost, format_duration_ms},
    workload::{Workload, WorkloadFactory, WorkloadParams},
};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    info!("Starting Fluid Bench {}", fluid_bench::VERSION);

    // A malformed config is fatal before any workload runs; per-call
    // failures during a run are recorded as data instead.
    let config = args.load_config();
    config.validate()?;

    let pricing = args.pricing();
    let params = args.workload_params();
    let mut results_manager = ResultsManager::new(&args.output_file);

    let workloads = WorkloadKind::expand_all(args.workloads.clone());
    for kind in &workloads {
        match run_workload(*kind, config, &params, &pricing, &mut results_manager).await {
            Ok(()) => info!("Benchmark completed for {}", kind),
            Err(e) => {
                error!("Benchmark failed for {}: {:#}", kind, e);
                if !args.continue_on_error {
                    return Err(e);
                }
            }
        }
    }

    results_manager.finalize()?;
    Ok(())
}

/// Run the configured load test against one workload and record its results
async fn run_workload(
    kind: WorkloadKind,
    config: LoadTestConfig,
    params: &WorkloadParams,
    pricing: &PricingTable,
    results_manager: &mut ResultsManager,
) -> Result<()> {
    info!("Running benchmark for workload: {}", kind);

    let workload: Arc<dyn Workload> = Arc::from(WorkloadFactory::create(kind, params)?);
    let runner = LoadTestRunner::new(config);
    let outcome = runner.run(Arc::clone(&workload)).await?;

    let results =
        WorkloadRunResults::from_outcome(kind, workload.as_ref(), config, &outcome, pricing);
    report_run(&results);
    results_manager.add_results(results);
    Ok(())
}

/// Log the human-facing summary of a completed run
fn report_run(results: &WorkloadRunResults) {
    let summary = &results.summary;
    info!(
        "  success rate: {:.1}% ({}/{} calls, {:.1} req/s achieved)",
        summary.success_rate_percent,
        summary.successful_requests,
        summary.total_requests,
        summary.achieved_rate_per_second,
    );

    match (summary.median_ms, summary.p95_ms, summary.p99_ms) {
        (Some(median), Some(p95), Some(p99)) => info!(
            "  latency: median {} / p95 {} / p99 {}",
            format_duration_ms(median),
            format_duration_ms(p95),
            format_duration_ms(p99),
        ),
        _ => info!("  latency: no successful calls, statistics undefined"),
    }

    info!(
        "  cost: metered {} vs full-duration {} ({} saved, {:.1}%)",
        format_cost(results.cost.metered_cost.total_cost_usd),
        format_cost(results.cost.full_duration_cost.total_cost_usd),
        format_cost(results.cost.savings_usd),
        results.cost.savings_percent,
    );
}
