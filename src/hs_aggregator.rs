//! Statistical Aggregator
//!
//! Turns a single deterministic cost formula into a distribution of
//! outcomes: runs each protocol's cost function N times, collecting the
//! latency samples (optionally perturbed per run by an injected noise
//! source, or evaluated against one benchmark table per measured baseline
//! sample), and reduces series to summary statistics.
//!
//! Every protocol in a run produces a latency series of exactly the
//! configured run count, so variance comparisons across protocols stay
//! apples-to-apples. Overhead is protocol-structural and does not vary per
//! run; its series has length one.

use indexmap::IndexMap;

use crate::hs_interface::SimError;
use crate::hs_primitives::PrimitiveCostTable;
use crate::hs_protocols::ProtocolKind;
use crate::hs_sampler::NoiseSource;

// ============================================================================
// Sample Series
// ============================================================================

/// Unit of a sample series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleUnit {
    Ms,
    Bytes,
}

/// Ordered samples for one protocol and one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    pub protocol: ProtocolKind,
    pub unit: SampleUnit,
    pub samples: Vec<f64>,
}

/// Latency and overhead series for one protocol.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolSeries {
    /// One latency sample per run (ms)
    pub latency: SampleSeries,

    /// Single-entry series; overhead is deterministic per protocol (bytes)
    pub overhead: SampleSeries,
}

/// Reduction of a sample series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub mean: f64,

    /// Population standard deviation, sqrt(sum((x - mean)^2) / n).
    ///
    /// Series lengths are equal across protocols by construction, so the
    /// population formula keeps spreads directly comparable.
    pub std_dev: f64,
}

// ============================================================================
// Sampling Runs
// ============================================================================

/// Run every protocol `run_count` times against a fixed reference table,
/// adding one independent noise draw to each latency sample.
///
/// Returns an insertion-ordered map so report and plot series follow the
/// suite order.
pub fn run_reference(
    protocols: &[ProtocolKind],
    table: &PrimitiveCostTable,
    run_count: usize,
    noise: &mut dyn NoiseSource,
) -> Result<IndexMap<ProtocolKind, ProtocolSeries>, SimError> {
    let mut results = IndexMap::new();

    for &protocol in protocols {
        let cost = protocol.cost(table)?;

        let mut samples = Vec::with_capacity(run_count);
        for _ in 0..run_count {
            samples.push(cost.latency_ms + noise.next_noise_ms());
        }

        results.insert(
            protocol,
            ProtocolSeries {
                latency: SampleSeries {
                    protocol,
                    unit: SampleUnit::Ms,
                    samples,
                },
                overhead: SampleSeries {
                    protocol,
                    unit: SampleUnit::Bytes,
                    samples: vec![cost.overhead_bytes as f64],
                },
            },
        );
    }

    Ok(results)
}

/// Run every protocol once per measured baseline sample.
///
/// Latency sample i is the protocol's cost evaluated against the benchmark
/// table built from baseline sample i, so measurement jitter flows through
/// the published ratios into every protocol. Overhead stays at the
/// protocol's published wire total (structural, not resampled); variants
/// without a published figure fall back to the parametric combination over
/// the benchmark sizes, which do not depend on the baseline.
pub fn run_measured(
    protocols: &[ProtocolKind],
    baseline_samples: &[f64],
) -> Result<IndexMap<ProtocolKind, ProtocolSeries>, SimError> {
    let tables: Vec<PrimitiveCostTable> = baseline_samples
        .iter()
        .map(|&sample| PrimitiveCostTable::benchmark(sample))
        .collect();

    // Sizes are baseline-independent, so any benchmark table resolves them.
    let size_table = PrimitiveCostTable::benchmark(0.0);

    let mut results = IndexMap::new();

    for &protocol in protocols {
        let mut samples = Vec::with_capacity(tables.len());
        for table in &tables {
            samples.push(protocol.cost(table)?.latency_ms);
        }

        let overhead_bytes = match protocol.published_wire_bytes() {
            Some(bytes) => bytes,
            None => protocol.cost(&size_table)?.overhead_bytes,
        };

        results.insert(
            protocol,
            ProtocolSeries {
                latency: SampleSeries {
                    protocol,
                    unit: SampleUnit::Ms,
                    samples,
                },
                overhead: SampleSeries {
                    protocol,
                    unit: SampleUnit::Bytes,
                    samples: vec![overhead_bytes as f64],
                },
            },
        );
    }

    Ok(results)
}

// ============================================================================
// Reduction
// ============================================================================

/// Mean and population standard deviation of a series.
pub fn summarize(series: &SampleSeries) -> SummaryStats {
    let n = series.samples.len();
    if n == 0 {
        return SummaryStats {
            mean: 0.0,
            std_dev: 0.0,
        };
    }

    let mean = series.samples.iter().sum::<f64>() / n as f64;

    let variance = series
        .samples
        .iter()
        .map(|&x| {
            let d = x - mean;
            d * d
        })
        .sum::<f64>()
        / n as f64;

    SummaryStats {
        mean,
        std_dev: variance.sqrt(),
    }
}
