// Scenario Runner - Load and execute comparison scenario YAML files
//
// Usage:
//   cargo run --bin scenario_runner scenarios/reference.yaml
//   cargo run --bin scenario_runner scenarios/  (runs all .yaml files in directory)
//   cargo run --bin scenario_runner scenarios/reference.yaml --seed 42

mod handshake;

use handshake::{default_scenarios, ComparisonRunner, HandshakeSimConfig, OutputConfig};
use hs_rust::hs_projector::NetworkScenario;
use hs_rust::hs_protocols::ProtocolKind;
use simple_logger::SimpleLogger;
use std::env;
use std::fs;
use std::path::Path;

/// Scenario file format
#[derive(Debug, serde::Deserialize)]
struct ScenarioFile {
    /// Scenario metadata
    #[serde(default)]
    meta: ScenarioMeta,

    /// Configuration overrides
    config: ScenarioConfig,

    /// Network environments; empty means the default set
    #[serde(default)]
    scenarios: Vec<NetworkScenario>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct ScenarioMeta {
    name: Option<String>,
    description: Option<String>,
    hypothesis: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ScenarioConfig {
    // Core settings
    run_count: usize,

    #[serde(default = "default_noise_std")]
    noise_std_ms: f64,

    // Protocol suite override (optional)
    #[serde(default)]
    protocols: Option<Vec<ProtocolKind>>,

    // Efficiency baseline override (optional)
    #[serde(default)]
    baseline: Option<ProtocolKind>,

    // CSV output path (optional)
    #[serde(default)]
    csv_path: Option<String>,
}

fn default_noise_std() -> f64 {
    0.05
}

fn main() {
    SimpleLogger::new().init().unwrap();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <scenario.yaml | directory/> [--seed SEED]",
            args[0]
        );
        eprintln!("\nExamples:");
        eprintln!("  {} scenarios/reference.yaml", args[0]);
        eprintln!("  {} scenarios/", args[0]);
        eprintln!("  {} scenarios/reference.yaml --seed 42", args[0]);
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);

    // Parse optional seed
    let seed: Option<u64> = if args.len() >= 4 && args[2] == "--seed" {
        Some(args[3].parse().unwrap_or_else(|e| {
            eprintln!("Invalid seed: {}", e);
            std::process::exit(1);
        }))
    } else {
        None
    };

    if path.is_file() {
        run_scenario_file(path, seed);
    } else if path.is_dir() {
        run_scenario_directory(path, seed);
    } else {
        eprintln!("Error: Path does not exist: {}", path.display());
        std::process::exit(1);
    }
}

fn run_scenario_directory(dir: &Path, seed: Option<u64>) {
    let mut scenarios = Vec::new();

    // Find all .yaml files
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("yaml")
                || path.extension().and_then(|s| s.to_str()) == Some("yml")
            {
                scenarios.push(path);
            }
        }
    }

    scenarios.sort();

    if scenarios.is_empty() {
        eprintln!("No .yaml files found in {}", dir.display());
        std::process::exit(1);
    }

    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  SCENARIO RUNNER - Multiple Scenarios                 ║");
    println!("╚════════════════════════════════════════════════════════╝\n");
    println!("Found {} scenario(s) to run\n", scenarios.len());

    for (i, scenario_path) in scenarios.iter().enumerate() {
        println!(
            "\n{}/{} Running: {}\n",
            i + 1,
            scenarios.len(),
            scenario_path.display()
        );
        run_scenario_file(scenario_path, seed);
    }

    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  All scenarios complete!                               ║");
    println!("╚════════════════════════════════════════════════════════╝\n");
}

fn run_scenario_file(path: &Path, seed: Option<u64>) {
    println!("Loading scenario from: {}", path.display());

    // Load and parse YAML
    let yaml_content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", path.display(), e);
        std::process::exit(1);
    });

    let scenario: ScenarioFile = serde_yaml::from_str(&yaml_content).unwrap_or_else(|e| {
        eprintln!("Failed to parse {}: {}", path.display(), e);
        std::process::exit(1);
    });

    // Print scenario header
    println!("\n╔════════════════════════════════════════════════════════╗");
    if let Some(ref name) = scenario.meta.name {
        println!("║  {}", name);
    } else {
        println!(
            "║  Scenario: {}",
            path.file_stem().unwrap().to_str().unwrap()
        );
    }
    println!("╚════════════════════════════════════════════════════════╝\n");

    if let Some(ref desc) = scenario.meta.description {
        println!("{}\n", desc);
    }

    if let Some(ref hypothesis) = scenario.meta.hypothesis {
        println!("Hypothesis:");
        println!("  {}\n", hypothesis);
    }

    // Build configuration
    let mut config = HandshakeSimConfig {
        run_count: scenario.config.run_count,
        seed,
        noise_std_ms: scenario.config.noise_std_ms,
        output: OutputConfig {
            enable_console: true,
            csv_path: scenario.config.csv_path.clone(),
            verbose: false,
        },
        ..Default::default()
    };

    if let Some(protocols) = scenario.config.protocols {
        config.protocols = protocols;
    }
    if let Some(baseline) = scenario.config.baseline {
        config.baseline = baseline;
    }
    if !scenario.scenarios.is_empty() {
        config.scenarios = scenario.scenarios;
    } else {
        config.scenarios = default_scenarios();
    }

    println!("Configuration:");
    println!("  Runs per protocol: {}", config.run_count);
    println!("  Latency noise std: {} ms", config.noise_std_ms);
    println!("  Protocols: {}", config.protocols.len());
    println!("  Network scenarios: {}", config.scenarios.len());
    println!("\nStarting comparison...\n");

    // Run comparison
    let runner = ComparisonRunner::new(config);
    let result = runner.run().unwrap_or_else(|e| {
        eprintln!("Comparison failed: {:?}", e);
        std::process::exit(1);
    });

    // Print results
    result.print_summary();

    println!("\n✓ Scenario complete!\n");
}
