//! Fixed Seed Reproducibility Check
//!
//! Runs the same configuration twice with one seed and verifies the two
//! results match bit for bit: sample series, summary rows and scenario
//! projections.
//!
//! Run with: cargo run --example fixed_seed_test

mod handshake;

use handshake::{ComparisonRunner, HandshakeSimConfig};
use simple_logger::SimpleLogger;

fn main() {
    SimpleLogger::new().init().unwrap();

    println!("╔════════════════════════════════════════════════════════╗");
    println!("║        Fixed Seed Reproducibility Check                ║");
    println!("╚════════════════════════════════════════════════════════╝\n");

    let config = HandshakeSimConfig {
        run_count: 200,
        seed: Some(7),
        ..Default::default()
    };

    let first = ComparisonRunner::new(config.clone())
        .run()
        .unwrap_or_else(|e| {
            eprintln!("First run failed: {:?}", e);
            std::process::exit(1);
        });

    let second = ComparisonRunner::new(config).run().unwrap_or_else(|e| {
        eprintln!("Second run failed: {:?}", e);
        std::process::exit(1);
    });

    assert_eq!(first.series, second.series, "sample series diverged");
    assert_eq!(first.reports, second.reports, "summary rows diverged");
    assert_eq!(
        first.projections, second.projections,
        "projections diverged"
    );

    println!(
        "Seed {} reproduced {} samples per protocol across",
        first.seed_used, first.run_count
    );
    println!(
        "{} protocols and {} scenarios, bit-identically.",
        first.reports.len(),
        first.scenarios.len()
    );
    println!("\n✓ Reproducibility check passed!");
}
