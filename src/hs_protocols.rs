//! Protocol Cost Model
//!
//! One pure cost function per handshake variant, each a fixed linear
//! combination of primitive compute times (latency) and primitive sizes
//! (overhead). Variants are fully independent: adding one never touches
//! another's formula.

use serde::Deserialize;

use crate::hs_interface::{HandshakeCost, Primitive, SimError};
use crate::hs_primitives::PrimitiveCostTable;

/// Fixed extra processing per hybrid TLS 1.3 handshake (ms): record-layer
/// and state-machine work outside the measured primitives.
pub const HYBRID_TLS_PROCESSING_MS: f64 = 1.2;

/// Fixed extra processing per KEMTLS handshake (ms).
pub const KEMTLS_PROCESSING_MS: f64 = 0.5;

// ============================================================================
// Protocol Variants
// ============================================================================

/// Handshake protocol variants under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ProtocolKind {
    /// Unauthenticated KEM key agreement: two encapsulation operations
    KyberOnly,

    /// KEM key agreement authenticated with a post-quantum signature
    KyberDilithium,

    /// Hybrid key agreement: KEM plus one classical public-key operation
    HybridRsaKyber,

    /// TLS 1.3 with hybrid key exchange and full certificate authentication
    HybridTls13,

    /// KEMTLS: authentication via a third KEM operation instead of signatures
    Kemtls,

    /// HPQ-AKE: two KEM operations, one classical operation, symmetric
    /// confirmation tag
    HpqAke,
}

impl ProtocolKind {
    /// Human-readable name used in reports and plots.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProtocolKind::KyberOnly => "Kyber-only",
            ProtocolKind::KyberDilithium => "Kyber + Dilithium",
            ProtocolKind::HybridRsaKyber => "Hybrid RSA-Kyber",
            ProtocolKind::HybridTls13 => "Hybrid TLS 1.3",
            ProtocolKind::Kemtls => "KEMTLS",
            ProtocolKind::HpqAke => "HPQ-AKE",
        }
    }

    /// The cost-model comparison suite, in fixed report order.
    pub fn model_suite() -> Vec<ProtocolKind> {
        vec![
            ProtocolKind::KyberOnly,
            ProtocolKind::KyberDilithium,
            ProtocolKind::HybridRsaKyber,
            ProtocolKind::HpqAke,
        ]
    }

    /// The benchmark comparison suite, in fixed report order.
    pub fn benchmark_suite() -> Vec<ProtocolKind> {
        vec![
            ProtocolKind::KyberOnly,
            ProtocolKind::HybridTls13,
            ProtocolKind::Kemtls,
            ProtocolKind::KyberDilithium,
            ProtocolKind::HpqAke,
        ]
    }

    /// Evaluate this variant's cost against the active primitive table.
    ///
    /// Latency sums the compute times of every primitive operation in the
    /// handshake flow; overhead sums the wire sizes of every transported
    /// artifact. No rounding.
    pub fn cost(&self, table: &PrimitiveCostTable) -> Result<HandshakeCost, SimError> {
        match self {
            // Two KEM operations (encapsulate + decapsulate), wire carries
            // the public key out and the ciphertext back.
            ProtocolKind::KyberOnly => {
                let kem = table.compute_ms(Primitive::KemEncapsulation)?;
                Ok(HandshakeCost {
                    latency_ms: 2.0 * kem,
                    overhead_bytes: table.size_bytes(Primitive::KemEncapsulation)?
                        + table.size_bytes(Primitive::KemPublicKey)?,
                })
            }

            // KEM agreement plus one signature over the transcript.
            ProtocolKind::KyberDilithium => {
                let kem = table.compute_ms(Primitive::KemEncapsulation)?;
                let sig = table.compute_ms(Primitive::Signature)?;
                Ok(HandshakeCost {
                    latency_ms: 2.0 * kem + sig,
                    overhead_bytes: table.size_bytes(Primitive::KemEncapsulation)?
                        + table.size_bytes(Primitive::KemPublicKey)?
                        + table.size_bytes(Primitive::Signature)?,
                })
            }

            // KEM agreement combined with one classical public-key operation.
            ProtocolKind::HybridRsaKyber => {
                let kem = table.compute_ms(Primitive::KemEncapsulation)?;
                let classical = table.compute_ms(Primitive::ClassicalCipher)?;
                Ok(HandshakeCost {
                    latency_ms: 2.0 * kem + classical,
                    overhead_bytes: table.size_bytes(Primitive::KemEncapsulation)?
                        + table.size_bytes(Primitive::KemPublicKey)?
                        + table.size_bytes(Primitive::ClassicalCipher)?,
                })
            }

            // Full TLS 1.3 flight with hybrid key share, certificate
            // signature and classical fallback. The wire total is the
            // published aggregate for the complete flight (certificates
            // included); it has no per-primitive decomposition.
            ProtocolKind::HybridTls13 => {
                let kem = table.compute_ms(Primitive::KemEncapsulation)?;
                let sig = table.compute_ms(Primitive::Signature)?;
                let classical = table.compute_ms(Primitive::ClassicalCipher)?;
                Ok(HandshakeCost {
                    latency_ms: 2.0 * kem + sig + classical + HYBRID_TLS_PROCESSING_MS,
                    overhead_bytes: 8500,
                })
            }

            // Three KEM operations, no signatures. Published aggregate wire
            // total for the complete flight.
            ProtocolKind::Kemtls => {
                let kem = table.compute_ms(Primitive::KemEncapsulation)?;
                Ok(HandshakeCost {
                    latency_ms: 3.0 * kem + KEMTLS_PROCESSING_MS,
                    overhead_bytes: 6544,
                })
            }

            // Target protocol: two KEM operations, one classical operation,
            // one symmetric confirmation step.
            ProtocolKind::HpqAke => {
                let kem = table.compute_ms(Primitive::KemEncapsulation)?;
                let classical = table.compute_ms(Primitive::ClassicalCipher)?;
                let sym = table.compute_ms(Primitive::SymmetricSuite)?;
                Ok(HandshakeCost {
                    latency_ms: 2.0 * kem + classical + sym,
                    overhead_bytes: table.size_bytes(Primitive::KemEncapsulation)?
                        + table.size_bytes(Primitive::KemPublicKey)?
                        + table.size_bytes(Primitive::ClassicalCipher)?
                        + table.size_bytes(Primitive::SymmetricSuite)?,
                })
            }
        }
    }

    /// Published per-handshake wire total (bytes), where one exists.
    ///
    /// These are the structural totals reported for the NIST parameter sets;
    /// the benchmark path uses them as fixed constants while latency is
    /// resampled per run. No figure was published for [`HybridRsaKyber`],
    /// so its overhead always comes from the parametric combination.
    ///
    /// [`HybridRsaKyber`]: ProtocolKind::HybridRsaKyber
    pub fn published_wire_bytes(&self) -> Option<u64> {
        match self {
            ProtocolKind::KyberOnly => Some(2272),
            ProtocolKind::KyberDilithium => Some(7517),
            ProtocolKind::HybridRsaKyber => None,
            ProtocolKind::HybridTls13 => Some(8500),
            ProtocolKind::Kemtls => Some(6544),
            ProtocolKind::HpqAke => Some(2784),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_cost_is_deterministic() {
        let table = PrimitiveCostTable::reference();

        for protocol in ProtocolKind::benchmark_suite() {
            let first = protocol.cost(&table).unwrap();
            let second = protocol.cost(&table).unwrap();
            assert_eq!(first, second, "{} not pure", protocol.display_name());
        }
    }

    #[test]
    fn test_hpq_ake_reference_cost() {
        let table = PrimitiveCostTable::reference();
        let cost = ProtocolKind::HpqAke.cost(&table).unwrap();

        // 2 * 1.8 + 1.2 + 0.15
        assert!(close(cost.latency_ms, 4.95));
        // 1088 + 1184 + 256 + 64
        assert_eq!(cost.overhead_bytes, 2592);
    }

    #[test]
    fn test_kyber_only_reference_cost() {
        let table = PrimitiveCostTable::reference();
        let cost = ProtocolKind::KyberOnly.cost(&table).unwrap();

        assert!(close(cost.latency_ms, 3.6));
        assert_eq!(cost.overhead_bytes, 2272);
    }

    #[test]
    fn test_kyber_dilithium_reference_cost() {
        let table = PrimitiveCostTable::reference();
        let cost = ProtocolKind::KyberDilithium.cost(&table).unwrap();

        assert!(close(cost.latency_ms, 10.0));
        assert_eq!(cost.overhead_bytes, 4972);
    }

    #[test]
    fn test_hybrid_rsa_kyber_reference_cost() {
        let table = PrimitiveCostTable::reference();
        let cost = ProtocolKind::HybridRsaKyber.cost(&table).unwrap();

        assert!(close(cost.latency_ms, 4.8));
        assert_eq!(cost.overhead_bytes, 2528);
    }

    #[test]
    fn test_tls_variants_reference_latency() {
        let table = PrimitiveCostTable::reference();

        let tls = ProtocolKind::HybridTls13.cost(&table).unwrap();
        // 2 * 1.8 + 6.4 + 1.2 + 1.2
        assert!(close(tls.latency_ms, 12.4));
        assert_eq!(tls.overhead_bytes, 8500);

        let kemtls = ProtocolKind::Kemtls.cost(&table).unwrap();
        // 3 * 1.8 + 0.5
        assert!(close(kemtls.latency_ms, 5.9));
        assert_eq!(kemtls.overhead_bytes, 6544);
    }

    #[test]
    fn test_benchmark_latency_scales_from_baseline() {
        let table = PrimitiveCostTable::benchmark(1.0);
        let cost = ProtocolKind::HpqAke.cost(&table).unwrap();

        // 2 * 0.35 + 1.0 + 0.15
        assert!(close(cost.latency_ms, 1.85));
    }

    #[test]
    fn test_published_wire_totals() {
        assert_eq!(ProtocolKind::KyberOnly.published_wire_bytes(), Some(2272));
        assert_eq!(
            ProtocolKind::KyberDilithium.published_wire_bytes(),
            Some(7517)
        );
        assert_eq!(ProtocolKind::HybridTls13.published_wire_bytes(), Some(8500));
        assert_eq!(ProtocolKind::Kemtls.published_wire_bytes(), Some(6544));
        assert_eq!(ProtocolKind::HpqAke.published_wire_bytes(), Some(2784));
        assert_eq!(ProtocolKind::HybridRsaKyber.published_wire_bytes(), None);
    }

    #[test]
    fn test_suites_have_fixed_order() {
        let suite = ProtocolKind::benchmark_suite();
        assert_eq!(
            suite,
            vec![
                ProtocolKind::KyberOnly,
                ProtocolKind::HybridTls13,
                ProtocolKind::Kemtls,
                ProtocolKind::KyberDilithium,
                ProtocolKind::HpqAke,
            ]
        );
        assert_eq!(ProtocolKind::model_suite().len(), 4);
    }
}
