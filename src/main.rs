// src/main.rs

use lanesim::config::CONFIG;
use lanesim::driver::run_configured;

use anyhow::Context;
use log::{error, info};

/// Entry point for the `lanesim` kernel checker.
fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting lanesim...");
    let config = match &*CONFIG {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            anyhow::bail!("invalid configuration: {e}");
        }
    };
    info!("Configuration: {:?}", config);

    let report = run_configured(config).context("Invalid kernel configuration")?;

    for outcome in &report.outcomes {
        println!(
            "[{}] {:<12} W={} N={}: {}",
            if outcome.passed { "PASS" } else { "FAIL" },
            outcome.name,
            report.lane_width,
            report.element_count,
            outcome.detail
        );
    }

    if !report.all_passed() {
        error!("Vector kernels disagree with their serial twins.");
        anyhow::bail!("kernel mismatch at lane width {}", report.lane_width);
    }

    info!("All kernels match their serial twins.");
    Ok(())
}
