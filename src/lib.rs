//! # hsRust - Handshake Cost Modeling and Comparison
//!
//! A Rust implementation of a cost model for cryptographic handshake
//! protocols (classical, post-quantum, and hybrid), comparing their compute
//! latency and communication overhead under varying computational and
//! network conditions.
//!
//! ## Core Components
//!
//! - **PrimitiveCostTable**: reference or measurement-derived costs per
//!   cryptographic primitive
//! - **ProtocolKind**: one pure cost function per handshake variant
//! - **Aggregator**: repeated-sampling runs and summary statistics
//! - **Projector**: total-latency projection across network scenarios
//! - **TimingSampler**: live or synthetic baseline duration sampling
//!
//! ## Usage
//!
//! ```
//! use hs_rust::hs_aggregator::{run_reference, summarize};
//! use hs_rust::hs_primitives::PrimitiveCostTable;
//! use hs_rust::hs_protocols::ProtocolKind;
//! use hs_rust::hs_sampler::GaussianNoise;
//!
//! let table = PrimitiveCostTable::reference();
//! let mut noise = GaussianNoise::from_seed(0.05, 42);
//!
//! let results = run_reference(&ProtocolKind::model_suite(), &table, 500, &mut noise)?;
//! for (protocol, series) in &results {
//!     let stats = summarize(&series.latency);
//!     println!("{}: {:.2} ms", protocol.display_name(), stats.mean);
//! }
//! # Ok::<(), hs_rust::hs_interface::SimError>(())
//! ```
//!
//! ## Simulation Drivers
//!
//! For ready-made comparison runs (reference Monte Carlo, live benchmark,
//! network projection) see the separate driver layer in `simulator/`: it
//! wires the components above behind a single configuration object and a
//! YAML scenario-file runner.

// Core cost-model modules
pub mod hs_aggregator;
pub mod hs_interface;
pub mod hs_primitives;
pub mod hs_projector;
pub mod hs_protocols;
pub mod hs_sampler;

// Re-export commonly used types
pub use hs_aggregator::{ProtocolSeries, SampleSeries, SampleUnit, SummaryStats};
pub use hs_interface::{HandshakeCost, Primitive, PrimitiveCost, SimError};
pub use hs_primitives::PrimitiveCostTable;
pub use hs_projector::{NetworkScenario, ProjectionResult};
pub use hs_protocols::ProtocolKind;
pub use hs_sampler::{
    GaussianNoise, MeasurableOp, NoNoise, NoiseSource, TimingSampler, X25519Agreement,
};
