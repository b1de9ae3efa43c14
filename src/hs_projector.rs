//! Network Scenario Projector
//!
//! Converts a protocol's (compute time, message size) pair into total
//! end-to-end handshake latency under a bandwidth/RTT assumption:
//!
//! ```text
//! total = latency_ms + overhead_bytes / bytes_per_ms(bandwidth) + 2 * rtt
//! ```
//!
//! The factor of 2 on RTT models a full request/response round trip. The
//! same formula is applied to every (protocol, scenario) pair so the
//! cross-scenario comparison stays valid.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::hs_interface::{HandshakeCost, SimError};
use crate::hs_protocols::ProtocolKind;

// ============================================================================
// Scenarios
// ============================================================================

/// Named deployment environment: access-link bandwidth and round-trip time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NetworkScenario {
    /// Scenario label, e.g. "LAN/5G"
    pub name: String,

    /// Access-link bandwidth (Mbps); must be positive
    pub bandwidth_mbps: f64,

    /// Round-trip time (ms)
    pub rtt_ms: f64,
}

impl NetworkScenario {
    pub fn new(name: impl Into<String>, bandwidth_mbps: f64, rtt_ms: f64) -> Self {
        Self {
            name: name.into(),
            bandwidth_mbps,
            rtt_ms,
        }
    }

    /// Reject scenarios whose bandwidth would divide by zero (or produce a
    /// negative transmission time) in the projection formula.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.bandwidth_mbps <= 0.0 {
            return Err(SimError::InvalidScenario {
                name: self.name.clone(),
                bandwidth_mbps: self.bandwidth_mbps,
            });
        }
        Ok(())
    }
}

/// Total projected latency for one (protocol, scenario) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionResult {
    pub protocol: ProtocolKind,
    pub scenario: String,
    pub total_latency_ms: f64,
}

// ============================================================================
// Projection
// ============================================================================

/// Bytes transferable per millisecond at the given bandwidth.
pub fn bytes_per_ms(bandwidth_mbps: f64) -> f64 {
    (bandwidth_mbps * 1_000_000.0 / 8.0) / 1000.0
}

/// Project one handshake cost into one scenario.
pub fn project(cost: &HandshakeCost, scenario: &NetworkScenario) -> Result<f64, SimError> {
    scenario.validate()?;

    let transmission_ms = cost.overhead_bytes as f64 / bytes_per_ms(scenario.bandwidth_mbps);
    Ok(cost.latency_ms + transmission_ms + 2.0 * scenario.rtt_ms)
}

/// Project every protocol into every scenario.
///
/// Scenarios are validated up front so a bad definition fails the whole
/// projection before any result is produced. The output maps scenario name
/// to one result per protocol, preserving the given protocol order.
pub fn project_suite(
    costs: &[(ProtocolKind, HandshakeCost)],
    scenarios: &[NetworkScenario],
) -> Result<IndexMap<String, Vec<ProjectionResult>>, SimError> {
    for scenario in scenarios {
        scenario.validate()?;
    }

    let mut projections = IndexMap::new();

    for scenario in scenarios {
        let mut rows = Vec::with_capacity(costs.len());
        for &(protocol, cost) in costs {
            rows.push(ProjectionResult {
                protocol,
                scenario: scenario.name.clone(),
                total_latency_ms: project(&cost, scenario)?,
            });
        }
        projections.insert(scenario.name.clone(), rows);
    }

    Ok(projections)
}

// ============================================================================
// Efficiency
// ============================================================================

/// Overhead saving versus a baseline protocol, as a signed percentage.
///
/// `(1 - overhead / baseline) * 100`: 0% at parity, approaching 100% as
/// overhead vanishes, negative when the protocol is heavier than the
/// baseline. Returns `None` (undefined, a reporting concern rather than a
/// failure) when the baseline overhead is zero.
pub fn relative_overhead(overhead_bytes: u64, baseline_bytes: u64) -> Option<f64> {
    if baseline_bytes == 0 {
        return None;
    }
    Some((1.0 - overhead_bytes as f64 / baseline_bytes as f64) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_per_ms_reference_value() {
        assert_eq!(bytes_per_ms(100.0), 12_500.0);
    }

    #[test]
    fn test_bytes_per_ms_strictly_increasing() {
        let mut last = bytes_per_ms(0.5);
        for bw in [1.0, 2.0, 10.0, 100.0, 1000.0] {
            let next = bytes_per_ms(bw);
            assert!(next > last);
            last = next;
        }
    }

    #[test]
    fn test_projection_concrete_scenario() {
        let cost = HandshakeCost {
            latency_ms: 3.33,
            overhead_bytes: 2784,
        };
        let scenario = NetworkScenario::new("LAN/5G", 100.0, 10.0);

        let total = project(&cost, &scenario).unwrap();
        // 3.33 + 2784 / 12500 + 20
        assert!((total - 23.55272).abs() < 1e-6);
    }

    #[test]
    fn test_total_latency_decreasing_in_bandwidth() {
        let cost = HandshakeCost {
            latency_ms: 5.0,
            overhead_bytes: 4000,
        };

        let slow = project(&cost, &NetworkScenario::new("a", 1.0, 50.0)).unwrap();
        let mid = project(&cost, &NetworkScenario::new("b", 10.0, 50.0)).unwrap();
        let fast = project(&cost, &NetworkScenario::new("c", 100.0, 50.0)).unwrap();

        assert!(slow > mid);
        assert!(mid > fast);
    }

    #[test]
    fn test_total_latency_non_decreasing_in_rtt() {
        let cost = HandshakeCost {
            latency_ms: 5.0,
            overhead_bytes: 4000,
        };

        let near = project(&cost, &NetworkScenario::new("a", 10.0, 10.0)).unwrap();
        let far = project(&cost, &NetworkScenario::new("b", 10.0, 200.0)).unwrap();
        let same = project(&cost, &NetworkScenario::new("c", 10.0, 10.0)).unwrap();

        assert!(far > near);
        assert_eq!(near, same);
        // Each RTT millisecond costs two on the total.
        assert!((far - near - 2.0 * 190.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_scenario_rejected() {
        let cost = HandshakeCost {
            latency_ms: 1.0,
            overhead_bytes: 100,
        };

        for bad_bw in [0.0, -5.0] {
            let scenario = NetworkScenario::new("broken", bad_bw, 10.0);
            assert_eq!(
                project(&cost, &scenario),
                Err(SimError::InvalidScenario {
                    name: "broken".into(),
                    bandwidth_mbps: bad_bw,
                })
            );
        }
    }

    #[test]
    fn test_project_suite_is_dense_and_ordered() {
        let costs = vec![
            (
                ProtocolKind::KyberOnly,
                HandshakeCost {
                    latency_ms: 1.31,
                    overhead_bytes: 2272,
                },
            ),
            (
                ProtocolKind::HpqAke,
                HandshakeCost {
                    latency_ms: 3.33,
                    overhead_bytes: 2784,
                },
            ),
        ];
        let scenarios = vec![
            NetworkScenario::new("LAN/5G", 100.0, 10.0),
            NetworkScenario::new("IoT/Satellite", 1.0, 200.0),
        ];

        let projections = project_suite(&costs, &scenarios).unwrap();

        assert_eq!(projections.len(), 2);
        let names: Vec<_> = projections.keys().cloned().collect();
        assert_eq!(names, vec!["LAN/5G", "IoT/Satellite"]);

        for rows in projections.values() {
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].protocol, ProtocolKind::KyberOnly);
            assert_eq!(rows[1].protocol, ProtocolKind::HpqAke);
        }
    }

    #[test]
    fn test_project_suite_rejects_any_invalid_scenario() {
        let costs = vec![(
            ProtocolKind::KyberOnly,
            HandshakeCost {
                latency_ms: 1.0,
                overhead_bytes: 100,
            },
        )];
        let scenarios = vec![
            NetworkScenario::new("ok", 10.0, 10.0),
            NetworkScenario::new("broken", 0.0, 10.0),
        ];

        assert!(project_suite(&costs, &scenarios).is_err());
    }

    #[test]
    fn test_relative_overhead_bounds() {
        // Parity is exactly zero.
        assert_eq!(relative_overhead(8500, 8500), Some(0.0));

        // Approaches 100% as overhead vanishes.
        assert_eq!(relative_overhead(0, 8500), Some(100.0));
        let near = relative_overhead(1, 8500).unwrap();
        assert!(near > 99.9 && near < 100.0);

        // Signed: heavier than baseline goes negative, unclamped.
        let regression = relative_overhead(17000, 8500).unwrap();
        assert_eq!(regression, -100.0);

        // Zero baseline is undefined, not an error.
        assert_eq!(relative_overhead(2784, 0), None);
    }
}
