//! Comparison run orchestration
//!
//! Wires the primitive table, aggregator and projector together for one
//! complete run: build per-run costs from the configured source, reduce the
//! series to summary rows, then project every protocol into every scenario.

use super::config::{CostSource, HandshakeSimConfig};
use super::export;
use super::stats::{ProtocolReport, SimResult};
use hs_rust::hs_aggregator::{run_measured, run_reference, summarize};
use hs_rust::hs_interface::{HandshakeCost, SimError};
use hs_rust::hs_primitives::PrimitiveCostTable;
use hs_rust::hs_projector::{project_suite, relative_overhead};
use hs_rust::hs_sampler::{
    seeded_rng, synthesize, GaussianNoise, TimingSampler, X25519Agreement, BASELINE_DOMAIN,
};
use log::{info, warn};

/// Runs one full comparison and collects the result
pub struct ComparisonRunner {
    config: HandshakeSimConfig,
}

impl ComparisonRunner {
    pub fn new(config: HandshakeSimConfig) -> Self {
        Self { config }
    }

    /// Execute the run. Consumes the runner; each invocation produces a
    /// fresh, independent data set.
    pub fn run(self) -> Result<SimResult, SimError> {
        let seed = self.config.resolve_seed();
        info!(
            "starting comparison run: {} protocols, seed {}",
            self.config.protocols.len(),
            seed
        );

        let series = match self.config.cost_source {
            CostSource::Reference => {
                let table = PrimitiveCostTable::reference();
                let mut noise = GaussianNoise::from_seed(self.config.noise_std_ms, seed);
                run_reference(
                    &self.config.protocols,
                    &table,
                    self.config.run_count,
                    &mut noise,
                )?
            }

            CostSource::Measured {
                trials,
                repetitions,
            } => {
                info!(
                    "measuring classical baseline: {} trials x {} repetitions",
                    trials, repetitions
                );
                let sampler = TimingSampler {
                    trials,
                    repetitions,
                    ..Default::default()
                };
                let mut op = X25519Agreement::new();
                let samples = sampler.measure_baseline(&mut op)?;
                run_measured(&self.config.protocols, &samples)?
            }

            CostSource::Synthetic {
                baseline_mean_ms,
                baseline_std_ms,
                trials,
            } => {
                let mut rng = seeded_rng(BASELINE_DOMAIN, seed);
                let samples = synthesize(baseline_mean_ms, baseline_std_ms, trials, &mut rng);
                run_measured(&self.config.protocols, &samples)?
            }
        };

        let run_count = series
            .values()
            .next()
            .map(|s| s.latency.samples.len())
            .unwrap_or(0);

        // Efficiency denominator: the baseline's overhead from this run if
        // it participated, its published wire total otherwise.
        let baseline_bytes = match series.get(&self.config.baseline) {
            Some(s) => s.overhead.samples[0] as u64,
            None => self.config.baseline.published_wire_bytes().unwrap_or(0),
        };

        let mut reports = Vec::with_capacity(series.len());
        let mut costs = Vec::with_capacity(series.len());
        for (&protocol, protocol_series) in &series {
            let latency = summarize(&protocol_series.latency);
            let overhead_bytes = protocol_series.overhead.samples[0] as u64;

            reports.push(ProtocolReport {
                protocol,
                latency,
                overhead_bytes,
                efficiency_vs_baseline: relative_overhead(overhead_bytes, baseline_bytes),
            });
            costs.push((
                protocol,
                HandshakeCost {
                    latency_ms: latency.mean,
                    overhead_bytes,
                },
            ));
        }

        let projections = project_suite(&costs, &self.config.scenarios)?;
        info!(
            "comparison complete: {} samples per protocol, {} scenarios",
            run_count,
            self.config.scenarios.len()
        );

        let result = SimResult {
            seed_used: seed,
            run_count,
            baseline: self.config.baseline,
            reports,
            series,
            scenarios: self.config.scenarios.clone(),
            projections,
        };

        if let Some(ref path) = self.config.output.csv_path {
            match export::write_csv(path, &result) {
                Ok(()) => info!("wrote CSV report to {}", path),
                Err(e) => warn!("failed to write CSV report to {}: {}", path, e),
            }
        }

        Ok(result)
    }
}
