//! Results and console reporting for comparison runs

use hs_rust::hs_aggregator::{ProtocolSeries, SummaryStats};
use hs_rust::hs_projector::{NetworkScenario, ProjectionResult};
use hs_rust::hs_protocols::ProtocolKind;
use indexmap::IndexMap;

/// Complete result of one comparison run
#[derive(Debug, Clone, PartialEq)]
pub struct SimResult {
    /// Seed used for the run
    pub seed_used: u64,

    /// Latency samples collected per protocol
    pub run_count: usize,

    /// Baseline protocol for the efficiency column
    pub baseline: ProtocolKind,

    /// Summary rows, one per protocol, in suite order
    pub reports: Vec<ProtocolReport>,

    /// Full sample series per protocol (distribution plotting boundary)
    pub series: IndexMap<ProtocolKind, ProtocolSeries>,

    /// Scenarios the run projected into
    pub scenarios: Vec<NetworkScenario>,

    /// Per-scenario projected totals, protocols in suite order
    pub projections: IndexMap<String, Vec<ProjectionResult>>,
}

/// Summary row for one protocol
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolReport {
    pub protocol: ProtocolKind,

    /// Mean and population std deviation of the latency series (ms)
    pub latency: SummaryStats,

    /// Wire bytes per handshake
    pub overhead_bytes: u64,

    /// Overhead saving versus the baseline protocol (%); None when the
    /// baseline overhead is zero or unknown
    pub efficiency_vs_baseline: Option<f64>,
}

impl SimResult {
    /// Print summary to console
    pub fn print_summary(&self) {
        println!("\n╔════════════════════════════════════════════════════════╗");
        println!("║        Handshake Cost Comparison Results               ║");
        println!("╚════════════════════════════════════════════════════════╝\n");

        println!("Configuration:");
        println!("  Seed: {}", self.seed_used);
        println!("  Runs per protocol: {}", self.run_count);
        println!(
            "  Efficiency baseline: {}\n",
            self.baseline.display_name()
        );

        println!("═══ Protocol Costs ═══");
        for report in &self.reports {
            let efficiency = match report.efficiency_vs_baseline {
                Some(e) => format!("{:.1}%", e),
                None => "n/a".to_string(),
            };
            println!(
                "  {:<20} | Latency = {:>8.4} ms (σ {:.4}) | Overhead = {:>5} bytes | Efficiency = {}",
                report.protocol.display_name(),
                report.latency.mean,
                report.latency.std_dev,
                report.overhead_bytes,
                efficiency
            );
        }
        println!();

        println!("═══ Scenario Projections ═══");
        for scenario in &self.scenarios {
            println!(
                "  {} ({} Mbps, {} ms RTT):",
                scenario.name, scenario.bandwidth_mbps, scenario.rtt_ms
            );
            if let Some(rows) = self.projections.get(&scenario.name) {
                for row in rows {
                    println!(
                        "    {:<20} {:>10.3} ms",
                        row.protocol.display_name(),
                        row.total_latency_ms
                    );
                }
            }
            println!();
        }
    }
}
