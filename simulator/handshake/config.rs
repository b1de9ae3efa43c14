//! Configuration for handshake comparison runs

use hs_rust::hs_projector::NetworkScenario;
use hs_rust::hs_protocols::ProtocolKind;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Main configuration for a comparison run
#[derive(Debug, Clone)]
pub struct HandshakeSimConfig {
    /// Cost evaluations per protocol (reference mode)
    pub run_count: usize,

    /// Random seed driving noise and synthetic sampling (None = entropy)
    pub seed: Option<u64>,

    /// Std deviation of the per-run latency noise in reference mode (ms)
    pub noise_std_ms: f64,

    /// Where per-run costs come from
    pub cost_source: CostSource,

    /// Protocols under comparison, in report order
    pub protocols: Vec<ProtocolKind>,

    /// Denominator protocol for the overhead-efficiency column
    pub baseline: ProtocolKind,

    /// Network environments to project into
    pub scenarios: Vec<NetworkScenario>,

    /// Output configuration
    pub output: OutputConfig,
}

/// Where each run's handshake costs come from
#[derive(Debug, Clone)]
pub enum CostSource {
    /// Published reference table; per-run Gaussian latency noise
    Reference,

    /// Live baseline measurement; one run per trial
    Measured {
        /// Trials, one latency sample each
        trials: usize,

        /// Back-to-back operations timed per trial
        repetitions: usize,
    },

    /// Synthetic baseline samples drawn from a seeded Gaussian
    Synthetic {
        /// Mean per-operation baseline time (ms)
        baseline_mean_ms: f64,

        /// Std deviation of the synthetic baseline (ms)
        baseline_std_ms: f64,

        /// Samples to draw, one run each
        trials: usize,
    },
}

/// Configuration for output and logging
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Print the result summary to the console
    pub enable_console: bool,

    /// CSV output file path
    pub csv_path: Option<String>,

    /// Verbose logging
    pub verbose: bool,
}

impl Default for HandshakeSimConfig {
    fn default() -> Self {
        Self {
            run_count: 500,
            seed: None,
            noise_std_ms: 0.05,
            cost_source: CostSource::Reference,
            protocols: ProtocolKind::model_suite(),
            baseline: ProtocolKind::HybridTls13,
            scenarios: default_scenarios(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            enable_console: false,
            csv_path: None,
            verbose: false,
        }
    }
}

impl HandshakeSimConfig {
    /// Get or generate the seed
    pub fn resolve_seed(&self) -> u64 {
        self.seed
            .unwrap_or_else(|| StdRng::from_entropy().next_u64())
    }
}

/// The three standard deployment environments
pub fn default_scenarios() -> Vec<NetworkScenario> {
    vec![
        NetworkScenario::new("LAN/5G", 100.0, 10.0),
        NetworkScenario::new("4G/Wi-Fi", 10.0, 50.0),
        NetworkScenario::new("IoT/Satellite", 1.0, 200.0),
    ]
}
