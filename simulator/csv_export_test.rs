//! CSV Export Check
//!
//! Runs a short reference comparison with CSV output enabled and verifies
//! the report file landed on disk.
//!
//! Run with: cargo run --example csv_export_test

mod handshake;

use handshake::{ComparisonRunner, HandshakeSimConfig, OutputConfig};
use simple_logger::SimpleLogger;

fn main() {
    SimpleLogger::new().init().unwrap();

    let csv_path = "handshake_comparison.csv";

    let config = HandshakeSimConfig {
        run_count: 50,
        seed: Some(42),
        output: OutputConfig {
            enable_console: false,
            csv_path: Some(csv_path.to_string()),
            verbose: false,
        },
        ..Default::default()
    };

    let result = ComparisonRunner::new(config).run().unwrap_or_else(|e| {
        eprintln!("Comparison failed: {:?}", e);
        std::process::exit(1);
    });

    let metadata = std::fs::metadata(csv_path).unwrap_or_else(|e| {
        eprintln!("CSV report missing at {}: {}", csv_path, e);
        std::process::exit(1);
    });

    println!(
        "Wrote {} ({} bytes): {} summary rows, {} projection rows",
        csv_path,
        metadata.len(),
        result.reports.len(),
        result.projections.values().map(|rows| rows.len()).sum::<usize>()
    );
    println!("\n✓ CSV export check passed!");
}
