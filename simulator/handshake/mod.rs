//! Handshake comparison driver module
//!
//! Wires the cost-model components into ready-made comparison runs:
//! - Reference Monte Carlo runs over a fixed primitive table
//! - Benchmark runs sampling a live (or synthetic) classical baseline
//! - Network projection of every protocol across every scenario

pub mod config;
pub mod export;
pub mod runner;
pub mod stats;

pub use config::{default_scenarios, CostSource, HandshakeSimConfig, OutputConfig};
pub use runner::ComparisonRunner;
pub use stats::{ProtocolReport, SimResult};
