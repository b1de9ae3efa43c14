//! Reference Monte Carlo Comparison
//!
//! Runs every model-suite protocol 500 times against the published
//! reference table, perturbing each run's latency with Gaussian measurement
//! noise, then projects the mean costs across the default network
//! scenarios.
//!
//! Run with: cargo run --example latency_comparison

mod handshake;

use handshake::{ComparisonRunner, HandshakeSimConfig, OutputConfig};
use log::info;
use simple_logger::SimpleLogger;

fn main() {
    SimpleLogger::new().init().unwrap();

    println!("╔════════════════════════════════════════════════════════╗");
    println!("║        Handshake Latency Comparison                    ║");
    println!("╚════════════════════════════════════════════════════════╝\n");

    info!("Setting up reference comparison...");

    let config = HandshakeSimConfig {
        run_count: 500,
        seed: Some(42),
        noise_std_ms: 0.05,
        output: OutputConfig {
            enable_console: true,
            csv_path: None,
            verbose: false,
        },
        ..Default::default()
    };

    info!("Configuration:");
    info!("  Runs per protocol: {}", config.run_count);
    info!("  Latency noise std: {} ms", config.noise_std_ms);
    info!("  Protocols: {}", config.protocols.len());
    info!("");

    info!("Starting comparison...");

    let runner = ComparisonRunner::new(config);
    let result = runner.run().unwrap_or_else(|e| {
        eprintln!("Comparison failed: {:?}", e);
        std::process::exit(1);
    });

    result.print_summary();
}
